use std::path::Path;
use crate::errors::CatalogStatsResult;
use crate::services::catalog_client::CatalogClient;
use crate::services::category_aggregator::CategoryAggregator;
use crate::services::deliverable_grouper::group_by_metric;
use crate::services::product_statistics::ProductStatistics;
use crate::services::result_writer::write_all;
use crate::structs::config::config::Config;
use crate::structs::pipeline_summary::PipelineSummary;
use crate::traits::catalog_source::CatalogSource;
use crate::traits::statistics_calculator::StatisticsCalculator;

/// Fetch, aggregate, group and persist, in that order. Nothing is rolled
/// back when a later stage fails.
pub struct PipelineRunner<'a> {
    catalog: &'a dyn CatalogSource,
    calculator: &'a dyn StatisticsCalculator,
}

impl<'a> PipelineRunner<'a> {
    pub fn new(catalog: &'a dyn CatalogSource, calculator: &'a dyn StatisticsCalculator) -> Self {
        Self { catalog, calculator }
    }

    pub fn run(&self, output_directory: &Path) -> CatalogStatsResult<PipelineSummary> {
        let tree = self.catalog.fetch_category_tree()?;

        let per_category = CategoryAggregator::new(self.catalog, self.calculator).aggregate(&tree)?;

        let grouped = group_by_metric(per_category);
        if grouped.is_empty() {
            log::warn!("⚠️ Category tree has no top-level categories, writing empty deliverables");
        }
        let files_written = write_all(&grouped, output_directory)?;

        Ok(PipelineSummary {
            categories_processed: grouped.len(),
            files_written,
        })
    }
}

/// Runs the pipeline against the configured catalog API. Without an explicit
/// directory the configured one is used, then the system temp directory.
pub fn run_pipeline(config: &Config, output_directory: Option<&Path>) -> CatalogStatsResult<PipelineSummary> {
    let catalog = CatalogClient::new(config.catalog.clone())?;
    let calculator = ProductStatistics::from(&config.statistics);

    let output_directory = output_directory
        .map_or_else(|| config.output.resolve_output_dir(), Path::to_path_buf);

    log::info!("🚀 Writing deliverables to {}", output_directory.display());
    PipelineRunner::new(&catalog, &calculator).run(&output_directory)
}
