use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use grocer_core::{CatalogConfig, Product};

use crate::source::{CatalogError, CatalogSource};

/// Catalog source backed by the storefront backend's product listing
/// endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Build a client with the configured request timeout, so a hung backend
    /// cannot pin a recommendation call open.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self::from_parts(http, config.base_url.clone()))
    }

    pub fn from_parts(http: Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.http.get(self.products_url()).send().await?.error_for_status()?;
        let products = response.json::<Vec<Product>>().await?;
        Ok(products)
    }
}
