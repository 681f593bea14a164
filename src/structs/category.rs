use serde::{Deserialize, Serialize};
use crate::helpers::serde_helper::string_or_number;

/// Body of the category tree endpoint. Only the top-level categories are
/// read; the root's own fields and anything below the first level are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTree {
    #[serde(default)]
    pub sub_categories: Vec<Category>,
}

/// A top-level category with its declared product count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub count: u64,
}

impl Category {
    pub fn new(id: &str, name: &str, count: u64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            count,
        }
    }
}
