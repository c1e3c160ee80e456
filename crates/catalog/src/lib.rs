//! Catalog access for the storefront client: the backend fetch boundary, a
//! TTL cache over the full product listing, and the recommendation facade
//! consumed by UI code.

pub mod cache;
pub mod http;
pub mod recommender;
pub mod source;

pub use cache::{CatalogCache, DEFAULT_CATALOG_TTL_SECS};
pub use http::HttpCatalogClient;
pub use recommender::Recommender;
pub use source::{CatalogError, CatalogSource, StaticCatalogSource};
