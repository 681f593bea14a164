pub mod catalog_source;
pub mod statistics_calculator;
