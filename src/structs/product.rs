use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product listing entry. Only `soldCount` and `countryOfOrigin` are
/// required; other fields are kept in `extra` so they survive into the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    pub sold_count: u64,
    pub country_of_origin: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(id: impl Into<Value>, sold_count: u64, country_of_origin: &str) -> Self {
        Self {
            id: id.into(),
            sold_count,
            country_of_origin: country_of_origin.to_string(),
            extra: Map::new(),
        }
    }
}
