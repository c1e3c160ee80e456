use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The storefront's fixed category codes, spelled the way the backend
/// product listing endpoint emits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    FruitsVeggies,
    Snacks,
    ColdDrinks,
    DairyProducts,
}

impl Category {
    pub const ALL: [Category; 4] =
        [Self::FruitsVeggies, Self::Snacks, Self::ColdDrinks, Self::DairyProducts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FruitsVeggies => "fruitsVeggies",
            Self::Snacks => "snacks",
            Self::ColdDrinks => "coldDrinks",
            Self::DairyProducts => "dairyProducts",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "fruitsVeggies" => Some(Self::FruitsVeggies),
            "snacks" => Some(Self::Snacks),
            "coldDrinks" => Some(Self::ColdDrinks),
            "dairyProducts" => Some(Self::DairyProducts),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog product as served by the backend listing endpoint.
///
/// The backend payload carries more detail (nutrition facts, seller, shelf
/// life); only the fields the storefront client reads are modeled here, the
/// rest is ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Category,
    pub price: Decimal,
    #[serde(default)]
    pub discount_price: Option<Decimal>,
    #[serde(default)]
    pub is_discounted: bool,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// The price a customer actually pays: the discount price while a
    /// discount is active, the list price otherwise. Products flagged as
    /// discounted without an explicit discount price fall back to the list
    /// price, matching how the backend seeds such rows.
    pub fn effective_price(&self) -> Decimal {
        if self.is_discounted {
            self.discount_price.unwrap_or(self.price)
        } else {
            self.price
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}
