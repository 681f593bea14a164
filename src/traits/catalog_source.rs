use crate::errors::CatalogStatsResult;
use crate::structs::category::CategoryTree;
use crate::structs::product::Product;

/// Read access to the remote catalog.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource {
    fn fetch_category_tree(&self) -> CatalogStatsResult<CategoryTree>;

    fn fetch_category_products(&self, category_id: &str) -> CatalogStatsResult<Vec<Product>>;
}
