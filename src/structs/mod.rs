pub mod category;
pub mod category_statistics;
pub mod cli;
pub mod config;
pub mod grouped_statistics;
pub mod pipeline_summary;
pub mod product;
