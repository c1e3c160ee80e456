use async_trait::async_trait;
use thiserror::Error;

use grocer_core::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}

/// The one operation the storefront needs from the backend: the full product
/// listing. Failures stop at the catalog cache and never reach recommendation
/// callers.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError>;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        (**self).fetch_all().await
    }
}

/// In-memory source over a fixed product list. Backs the CLI's fixture mode
/// and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
}

impl StaticCatalogSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}
