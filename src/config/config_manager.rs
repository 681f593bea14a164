use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{CatalogStatsError, CatalogStatsResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Catalog Stats Configuration

[catalog]
# Endpoint returning the category tree
category_tree_url = "https://mat.se/api/product/getCategoryTree"

# Endpoint listing the products of one category, queried with ?categoryId=<id>
category_products_url = "https://mat.se/api/product/listByCategory"

[statistics]
# Number of best selling products kept per category
top_n = 5

# Country of origin counted by the percentage deliverable
country_code = "SE"

[output]
# Directory receiving the deliverable files, defaults to the system temp directory
# output_dir = "/tmp"
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load_or_default(path: Option<&Path>) -> CatalogStatsResult<Config> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> CatalogStatsResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogStatsError::io_error(path, "read", &e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn write_sample_config(config_file_path: &Path) -> CatalogStatsResult<()> {
        if let Some(config_file_dir_path) = config_file_path.parent() {
            fs::create_dir_all(config_file_dir_path)
                .map_err(|e| CatalogStatsError::io_error(config_file_dir_path, "create directory", &e))?;
        }
        fs::write(config_file_path, SAMPLE_CONFIG)
            .map_err(|e| CatalogStatsError::io_error(config_file_path, "write", &e))?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let endpoints = [
            ("catalog.category_tree_url", &config.catalog.category_tree_url),
            ("catalog.category_products_url", &config.catalog.category_products_url),
        ];
        for (field, url) in endpoints {
            match Url::parse(url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => errors.push(format!("{field} uses unsupported scheme '{}': {url}", parsed.scheme())),
                Err(e) => errors.push(format!("{field} is not a valid URL ({e}): {url}")),
            }
        }

        if config.statistics.top_n == 0 {
            errors.push("statistics.top_n must be greater than zero".to_string());
        }

        if config.statistics.country_code.trim().is_empty() {
            errors.push("statistics.country_code must not be empty".to_string());
        }

        if let Some(dir) = &config.output.output_dir {
            if !Path::new(dir).is_dir() {
                errors.push(format!("output.output_dir does not exist: {dir}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
