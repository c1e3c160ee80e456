//! Complementary-category pairings ("frequently bought together").
//!
//! The pairing policy is a static table: each category maps to an ordered
//! list of picks, each pick taking a fixed number of products from a filtered
//! slice of the catalog. This is merchandising policy, not a learned model.

use std::collections::HashSet;

use crate::domain::product::{Category, Product, ProductId};

/// Tag marking produce items that are fruit rather than vegetables.
pub const TAG_FRUIT: &str = "fruit";

/// Tag marking drinks merchandised as a healthy option.
pub const TAG_HEALTHY: &str = "healthy";

/// One slice of a pairing rule: take up to `take` catalog products matching
/// the category/tag filters, in catalog order.
#[derive(Debug, Clone, Copy)]
struct PairingPick {
    category: Option<Category>,
    with_tag: Option<&'static str>,
    without_tag: Option<&'static str>,
    take: usize,
}

impl PairingPick {
    const fn from_category(category: Category, take: usize) -> Self {
        Self { category: Some(category), with_tag: None, without_tag: None, take }
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        if let Some(tag) = self.with_tag {
            if !product.has_tag(tag) {
                return false;
            }
        }
        if let Some(tag) = self.without_tag {
            if product.has_tag(tag) {
                return false;
            }
        }
        true
    }
}

// A fruit goes with another fruit, a snack, and a healthy drink.
const FRUIT_PAIRINGS: &[PairingPick] = &[
    PairingPick { category: None, with_tag: Some(TAG_FRUIT), without_tag: None, take: 1 },
    PairingPick::from_category(Category::Snacks, 1),
    PairingPick {
        category: Some(Category::ColdDrinks),
        with_tag: Some(TAG_HEALTHY),
        without_tag: None,
        take: 1,
    },
];

// A vegetable goes with another vegetable, dairy, and a drink.
const VEGGIE_PAIRINGS: &[PairingPick] = &[
    PairingPick {
        category: Some(Category::FruitsVeggies),
        with_tag: None,
        without_tag: Some(TAG_FRUIT),
        take: 1,
    },
    PairingPick::from_category(Category::DairyProducts, 1),
    PairingPick::from_category(Category::ColdDrinks, 1),
];

const SNACK_PAIRINGS: &[PairingPick] = &[
    PairingPick::from_category(Category::ColdDrinks, 2),
    PairingPick::from_category(Category::Snacks, 1),
];

const COLD_DRINK_PAIRINGS: &[PairingPick] = &[
    PairingPick::from_category(Category::Snacks, 2),
    PairingPick::from_category(Category::ColdDrinks, 1),
];

const DAIRY_PAIRINGS: &[PairingPick] = &[
    PairingPick {
        category: Some(Category::FruitsVeggies),
        with_tag: Some(TAG_FRUIT),
        without_tag: None,
        take: 1,
    },
    PairingPick::from_category(Category::DairyProducts, 1),
    PairingPick::from_category(Category::Snacks, 1),
];

fn picks_for(current: &Product) -> &'static [PairingPick] {
    match current.category {
        Category::FruitsVeggies if current.has_tag(TAG_FRUIT) => FRUIT_PAIRINGS,
        Category::FruitsVeggies => VEGGIE_PAIRINGS,
        Category::Snacks => SNACK_PAIRINGS,
        Category::ColdDrinks => COLD_DRINK_PAIRINGS,
        Category::DairyProducts => DAIRY_PAIRINGS,
    }
}

/// Complementary products for the given catalog entry: the category's pairing
/// rules run in table order, then remaining slots are backfilled with
/// not-yet-selected products in catalog order. The current product is never
/// selected, no product is selected twice, and the result is truncated to
/// `limit`.
pub fn frequently_bought_together(
    catalog: &[Product],
    current: &Product,
    limit: usize,
) -> Vec<Product> {
    let mut selected: Vec<&Product> = Vec::new();
    let mut selected_ids: HashSet<&ProductId> = HashSet::new();

    for pick in picks_for(current) {
        let mut taken = 0;
        for candidate in catalog {
            if taken == pick.take {
                break;
            }
            if candidate.id == current.id || selected_ids.contains(&candidate.id) {
                continue;
            }
            if pick.matches(candidate) {
                selected.push(candidate);
                selected_ids.insert(&candidate.id);
                taken += 1;
            }
        }
    }

    if selected.len() < limit {
        for candidate in catalog {
            if selected.len() == limit {
                break;
            }
            if candidate.id == current.id || selected_ids.contains(&candidate.id) {
                continue;
            }
            selected.push(candidate);
            selected_ids.insert(&candidate.id);
        }
    }

    selected.truncate(limit);
    selected.into_iter().cloned().collect()
}
