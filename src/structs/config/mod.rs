pub mod catalog_config;
pub mod config;
pub mod output_config;
pub mod statistics_config;
