use crate::errors::{CatalogStatsError, CatalogStatsResult};
use crate::structs::config::statistics_config::StatisticsConfig;
use crate::structs::product::Product;
use crate::traits::statistics_calculator::StatisticsCalculator;

/// The `n` best selling products, highest `soldCount` first. Products with
/// equal counts keep their input order.
pub fn top_sellers(products: &[Product], n: usize) -> Vec<Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| b.sold_count.cmp(&a.sold_count));
    sorted.into_iter().take(n).cloned().collect()
}

/// Fraction of `products` whose country of origin is `country_code`.
pub fn country_ratio(products: &[Product], country_code: &str) -> CatalogStatsResult<f64> {
    if products.is_empty() {
        return Err(CatalogStatsError::division_error(
            "country ratio",
            &format!("no products to compare against '{country_code}'"),
        ));
    }

    let matching = products
        .iter()
        .filter(|product| product.country_of_origin == country_code)
        .count();

    Ok(matching as f64 / products.len() as f64)
}

#[derive(Debug, Clone)]
pub struct ProductStatistics {
    top_n: usize,
    country_code: String,
}

impl ProductStatistics {
    pub fn new(top_n: usize, country_code: &str) -> Self {
        Self {
            top_n,
            country_code: country_code.to_string(),
        }
    }
}

impl From<&StatisticsConfig> for ProductStatistics {
    fn from(config: &StatisticsConfig) -> Self {
        Self::new(config.top_n, &config.country_code)
    }
}

impl Default for ProductStatistics {
    fn default() -> Self {
        Self::from(&StatisticsConfig::default())
    }
}

impl StatisticsCalculator for ProductStatistics {
    fn top_sellers(&self, products: &[Product]) -> Vec<Product> {
        top_sellers(products, self.top_n)
    }

    fn country_ratio(&self, products: &[Product]) -> CatalogStatsResult<f64> {
        country_ratio(products, &self.country_code)
    }
}
