use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use crate::config::constants::{CATEGORY_ID_PARAM, USER_AGENT};
use crate::errors::{CatalogStatsError, CatalogStatsResult};
use crate::structs::category::CategoryTree;
use crate::structs::config::catalog_config::CatalogConfig;
use crate::structs::product::Product;
use crate::traits::catalog_source::CatalogSource;

/// Blocking HTTP client for the catalog API. Every call is a single attempt.
#[derive(Clone)]
pub struct CatalogClient {
    config: CatalogConfig,
    client: Client,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> CatalogStatsResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { config, client })
    }

    fn get_json_data<T: DeserializeOwned>(&self, url: &str, params: &[(&str, &str)]) -> CatalogStatsResult<T> {
        let response = self.client
            .get(url)
            .query(params)
            .send()
            .map_err(|e| CatalogStatsError::transport_error("GET", url, None, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogStatsError::transport_error(
                "GET",
                url,
                Some(status.as_u16()),
                &format!("unexpected response status {status}"),
            ));
        }

        let body = response
            .text()
            .map_err(|e| CatalogStatsError::transport_error("reading response body", url, Some(status.as_u16()), &e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| CatalogStatsError::decode_error(url, &e))
    }
}

impl CatalogSource for CatalogClient {
    fn fetch_category_tree(&self) -> CatalogStatsResult<CategoryTree> {
        log::info!("🌳 Fetching categories");
        self.get_json_data(&self.config.category_tree_url, &[])
    }

    fn fetch_category_products(&self, category_id: &str) -> CatalogStatsResult<Vec<Product>> {
        log::info!("📦 Fetching category id: {category_id}");
        self.get_json_data(&self.config.category_products_url, &[(CATEGORY_ID_PARAM, category_id)])
    }
}
