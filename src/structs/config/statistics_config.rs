use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StatisticsConfig {
    #[serde(default = "ConfigHelper::default_top_n")]
    pub top_n: usize,

    #[serde(default = "ConfigHelper::default_country_code")]
    pub country_code: String,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            top_n: ConfigHelper::default_top_n(),
            country_code: ConfigHelper::default_country_code(),
        }
    }
}
