//! # catalog-stats
//!
//! Fetches a product category tree and the product listing of each top-level
//! category from a catalog API, computes per-category statistics and writes
//! one JSON file per metric:
//!
//! - `number_of_products.json`: declared product count per category
//! - `top_5_products.json`: best selling products per category
//! - `percentage_swedish.json`: share of products with Swedish origin
//!
//! Runs are sequential and blocking. The request timeout is the HTTP client's
//! default, so a stalled endpoint holds up the whole run until it expires.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
