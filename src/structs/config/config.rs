use serde::{Deserialize, Serialize};
use crate::structs::config::catalog_config::CatalogConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::statistics_config::StatisticsConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub statistics: StatisticsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
