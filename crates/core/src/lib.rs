pub mod config;
pub mod domain;
pub mod recs;

pub use config::{AppConfig, CatalogConfig, ConfigError, LoadOptions, LoggingConfig};
pub use domain::product::{Category, Product, ProductId};
pub use recs::{
    frequently_bought_together, related_products, trending_products, ScoreCalculator,
    ScoringWeights,
};
