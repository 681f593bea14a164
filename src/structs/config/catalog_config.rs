use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Endpoints of the remote catalog API.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CatalogConfig {
    #[serde(default = "ConfigHelper::default_category_tree_url")]
    pub category_tree_url: String,

    #[serde(default = "ConfigHelper::default_category_products_url")]
    pub category_products_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            category_tree_url: ConfigHelper::default_category_tree_url(),
            category_products_url: ConfigHelper::default_category_products_url(),
        }
    }
}
