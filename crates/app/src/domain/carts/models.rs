//! Cart Models

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{catalog::models::Product, ids::ProductId};

/// Immutable view of the cart at one point in time.
pub type CartSnapshot = Arc<[CartItem]>;

/// CartItem Model
///
/// Serialized flat: the product's fields followed by `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,

    /// Requested quantity, at least 1 while the item is in the cart.
    pub amount: u32,
}

impl CartItem {
    /// A new line for `product` with an amount of 1.
    #[must_use]
    pub fn new(mut product: Product) -> Self {
        // `amount` belongs to the line, not the product
        product.attributes.remove("amount");

        Self { product, amount: 1 }
    }

    #[must_use]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Copy of this line with a different amount.
    #[must_use]
    pub fn with_amount(&self, amount: u32) -> Self {
        Self {
            product: self.product.clone(),
            amount,
        }
    }

    /// `price × amount`, when the product has a price.
    #[must_use]
    pub fn subtotal(&self) -> Option<Decimal> {
        self.product
            .price
            .map(|price| price.saturating_mul(Decimal::from(self.amount)))
    }
}

/// Update Product Amount Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,

    /// Requested quantity. Values of zero or below are ignored.
    pub amount: i64,
}
