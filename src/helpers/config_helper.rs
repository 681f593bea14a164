use crate::config::constants::{
    DEFAULT_CATEGORY_PRODUCTS_URL, DEFAULT_CATEGORY_TREE_URL, DEFAULT_COUNTRY_CODE, DEFAULT_TOP_N,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_category_tree_url() -> String {
        DEFAULT_CATEGORY_TREE_URL.to_string()
    }

    pub fn default_category_products_url() -> String {
        DEFAULT_CATEGORY_PRODUCTS_URL.to_string()
    }

    pub fn default_top_n() -> usize {
        DEFAULT_TOP_N
    }

    pub fn default_country_code() -> String {
        DEFAULT_COUNTRY_CODE.to_string()
    }
}
