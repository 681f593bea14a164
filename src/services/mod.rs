pub mod catalog_client;
pub mod category_aggregator;
pub mod deliverable_grouper;
pub mod product_statistics;
pub mod result_writer;
