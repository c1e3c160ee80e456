//! Similarity scoring for related-product recommendations.

use rust_decimal::Decimal;

use crate::domain::product::Product;

/// Integer points awarded per matched similarity signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Candidate shares the current product's category.
    pub same_category: i64,
    /// Candidate's effective price falls inside the price band.
    pub price_band: i64,
    /// Awarded once per tag present on both products.
    pub shared_tag: i64,
    /// Both products are currently discounted.
    pub shared_discount: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        super::DEFAULT_WEIGHTS
    }
}

/// Inclusive price window around a reference price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBand {
    lower: Decimal,
    upper: Decimal,
}

impl PriceBand {
    /// Band of ±20% around the given price. Bounds are computed in decimal
    /// arithmetic, so a candidate priced exactly on a bound is inside it.
    pub fn around(price: Decimal) -> Self {
        Self { lower: price * Decimal::new(8, 1), upper: price * Decimal::new(12, 1) }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.lower && price <= self.upper
    }
}

/// A candidate product paired with its similarity score. Transient: scores
/// are an ordering device and never leave the engine.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub product: &'a Product,
    pub score: i64,
}

/// Accumulates similarity points between a reference product and catalog
/// candidates.
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    weights: ScoringWeights,
}

impl ScoreCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, current: &Product, candidate: &Product) -> i64 {
        let band = PriceBand::around(current.effective_price());
        let mut score = 0;

        if candidate.category == current.category {
            score += self.weights.same_category;
        }

        if band.contains(candidate.effective_price()) {
            score += self.weights.price_band;
        }

        let shared_tags =
            candidate.tags.iter().filter(|tag| current.has_tag(tag)).count() as i64;
        score += shared_tags * self.weights.shared_tag;

        if candidate.is_discounted && current.is_discounted {
            score += self.weights.shared_discount;
        }

        score
    }

    /// Score every candidate except the current product itself, ranked by
    /// score descending. The sort is stable: equal scores keep catalog order.
    pub fn rank<'a>(&self, catalog: &'a [Product], current: &Product) -> Vec<ScoredCandidate<'a>> {
        let mut candidates: Vec<ScoredCandidate<'a>> = catalog
            .iter()
            .filter(|candidate| candidate.id != current.id)
            .map(|candidate| ScoredCandidate { product: candidate, score: self.score(current, candidate) })
            .collect();

        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates
    }
}

/// Related products for a product view: the top `limit` catalog candidates by
/// similarity score, with the current product excluded.
pub fn related_products(catalog: &[Product], current: &Product, limit: usize) -> Vec<Product> {
    ScoreCalculator::new()
        .rank(catalog, current)
        .into_iter()
        .take(limit)
        .map(|candidate| candidate.product.clone())
        .collect()
}
