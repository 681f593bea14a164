use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::enums::deliverable::Deliverable;
use crate::structs::category_statistics::CategoryStatistics;
use crate::structs::product::Product;

/// Per-category statistics pivoted by metric. The three maps always share
/// the same key set since `insert` is the only way to add a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedStatistics {
    number_of_products: BTreeMap<String, u64>,
    top_5_products: BTreeMap<String, Vec<Product>>,
    percentage_swedish: BTreeMap<String, f64>,
}

impl GroupedStatistics {
    pub fn insert(&mut self, category_name: &str, statistics: CategoryStatistics) {
        self.number_of_products.insert(category_name.to_string(), statistics.product_count);
        self.top_5_products.insert(category_name.to_string(), statistics.top_5_products);
        self.percentage_swedish.insert(category_name.to_string(), statistics.percentage_swedish);
    }

    pub fn number_of_products(&self) -> &BTreeMap<String, u64> {
        &self.number_of_products
    }

    pub fn top_5_products(&self) -> &BTreeMap<String, Vec<Product>> {
        &self.top_5_products
    }

    pub fn percentage_swedish(&self) -> &BTreeMap<String, f64> {
        &self.percentage_swedish
    }

    pub fn len(&self) -> usize {
        self.number_of_products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.number_of_products.is_empty()
    }

    /// The category → value map of one deliverable as a JSON object.
    pub fn metric_value(&self, deliverable: Deliverable) -> serde_json::Result<Value> {
        match deliverable {
            Deliverable::NumberOfProducts => serde_json::to_value(&self.number_of_products),
            Deliverable::TopProducts => serde_json::to_value(&self.top_5_products),
            Deliverable::PercentageSwedish => serde_json::to_value(&self.percentage_swedish),
        }
    }
}
