use crate::errors::CatalogStatsResult;
use crate::structs::product::Product;

#[cfg_attr(test, mockall::automock)]
pub trait StatisticsCalculator {
    fn top_sellers(&self, products: &[Product]) -> Vec<Product>;

    fn country_ratio(&self, products: &[Product]) -> CatalogStatsResult<f64>;
}
