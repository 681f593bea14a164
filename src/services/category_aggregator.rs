use crate::errors::CatalogStatsResult;
use crate::structs::category::{Category, CategoryTree};
use crate::structs::category_statistics::{CategoryStatistics, CategoryStatisticsMap};
use crate::traits::catalog_source::CatalogSource;
use crate::traits::statistics_calculator::StatisticsCalculator;

/// Computes statistics for every direct subcategory of a category tree.
pub struct CategoryAggregator<'a> {
    catalog: &'a dyn CatalogSource,
    calculator: &'a dyn StatisticsCalculator,
}

impl<'a> CategoryAggregator<'a> {
    pub fn new(catalog: &'a dyn CatalogSource, calculator: &'a dyn StatisticsCalculator) -> Self {
        Self { catalog, calculator }
    }

    /// Categories are processed in tree order and keyed by name, so a later
    /// category with a duplicate name replaces the earlier one. The first
    /// failure aborts the whole aggregation.
    pub fn aggregate(&self, tree: &CategoryTree) -> CatalogStatsResult<CategoryStatisticsMap> {
        let mut result = CategoryStatisticsMap::new();

        for category in &tree.sub_categories {
            let statistics = self.category_statistics(category)?;
            if result.insert(category.name.clone(), statistics).is_some() {
                log::warn!("⚠️ Duplicate category name '{}', keeping id {}", category.name, category.id);
            }
            log::info!("✅ Processed {}: {}", category.id, category.name);
        }

        Ok(result)
    }

    fn category_statistics(&self, category: &Category) -> CatalogStatsResult<CategoryStatistics> {
        let products = self.catalog.fetch_category_products(&category.id)?;

        Ok(CategoryStatistics {
            // the tree count is authoritative, the listing may be truncated
            product_count: category.count,
            top_5_products: self.calculator.top_sellers(&products),
            percentage_swedish: self.calculator.country_ratio(&products)?,
        })
    }
}
