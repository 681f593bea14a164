pub const DEFAULT_CATEGORY_TREE_URL: &str = "https://mat.se/api/product/getCategoryTree";
pub const DEFAULT_CATEGORY_PRODUCTS_URL: &str = "https://mat.se/api/product/listByCategory";
pub const CATEGORY_ID_PARAM: &str = "categoryId";

pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_COUNTRY_CODE: &str = "SE";

pub const CONFIG_DIR_NAME: &str = "catalog-stats";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const USER_AGENT: &str = concat!("catalog-stats/", env!("CARGO_PKG_VERSION"));
