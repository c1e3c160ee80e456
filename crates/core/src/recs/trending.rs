//! Trending-products sampler.
//!
//! Placeholder policy until real sales/view signals exist: one discounted
//! pick each from produce and snacks, one pick each from cold drinks and
//! dairy, in that fixed order. Empty slots are skipped, never backfilled
//! from other categories.

use crate::domain::product::{Category, Product};

#[derive(Debug, Clone, Copy)]
struct TrendingSlot {
    category: Category,
    discounted_only: bool,
}

const TRENDING_SLOTS: &[TrendingSlot] = &[
    TrendingSlot { category: Category::FruitsVeggies, discounted_only: true },
    TrendingSlot { category: Category::Snacks, discounted_only: true },
    TrendingSlot { category: Category::ColdDrinks, discounted_only: false },
    TrendingSlot { category: Category::DairyProducts, discounted_only: false },
];

/// At most one product per trending slot, first match in catalog order,
/// truncated to `limit`.
pub fn trending_products(catalog: &[Product], limit: usize) -> Vec<Product> {
    TRENDING_SLOTS
        .iter()
        .filter_map(|slot| {
            catalog.iter().find(|product| {
                product.category == slot.category
                    && (!slot.discounted_only || product.is_discounted)
            })
        })
        .take(limit)
        .cloned()
        .collect()
}
