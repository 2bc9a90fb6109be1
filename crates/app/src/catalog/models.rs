//! Catalog Models

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::ids::ProductId;

/// Product Record
///
/// Only `id` is required. The display fields the storefront understands are
/// typed; everything else the API sends is carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Remaining product attributes, kept verbatim.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// A product record carrying only its id.
    #[must_use]
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            title: None,
            price: None,
            image: None,
            attributes: Map::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Stock Record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,

    /// Maximum quantity that can be purchased. Negative amounts read as 0.
    #[serde(deserialize_with = "clamped_amount")]
    pub amount: u32,
}

impl Stock {
    #[must_use]
    pub const fn new(id: ProductId, amount: u32) -> Self {
        Self {
            id: Some(id),
            amount,
        }
    }
}

fn clamped_amount<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = i64::deserialize(deserializer)?;

    Ok(u32::try_from(amount.max(0)).unwrap_or(u32::MAX))
}
