use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::structs::product::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStatistics {
    pub product_count: u64,
    pub top_5_products: Vec<Product>,
    pub percentage_swedish: f64,
}

/// Statistics keyed by category name.
pub type CategoryStatisticsMap = BTreeMap<String, CategoryStatistics>;
