//! Product recommendation engine.
//!
//! Pure functions over an in-memory catalog snapshot: a multi-factor
//! similarity ranking, a complementary-category pairing table, and a fixed
//! trending sampler. Catalog access and caching live in `grocer-catalog`;
//! nothing here performs I/O or can fail.

mod pairing;
mod scoring;
mod trending;

pub use pairing::{frequently_bought_together, TAG_FRUIT, TAG_HEALTHY};
pub use scoring::{related_products, PriceBand, ScoreCalculator, ScoredCandidate, ScoringWeights};
pub use trending::trending_products;

/// Default number of related products shown on a product view.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Default number of "frequently bought together" picks.
pub const DEFAULT_PAIRING_LIMIT: usize = 3;

/// Default number of trending products on the home view.
pub const DEFAULT_TRENDING_LIMIT: usize = 4;

/// Default similarity points: category match dominates, price proximity and
/// shared discounts are secondary, each shared tag adds a small boost.
pub const DEFAULT_WEIGHTS: ScoringWeights =
    ScoringWeights { same_category: 5, price_band: 3, shared_tag: 2, shared_discount: 2 };
