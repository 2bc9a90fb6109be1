//! Cart Summary
//!
//! Derived, read-only totals for displaying a cart.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::{Money, iso};

use crate::{domain::carts::models::CartItem, ids::ProductId};

/// One displayed cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: CartItem,

    /// `None` when the product carries no price.
    pub subtotal: Option<Decimal>,
}

/// Cart Summary
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
}

impl CartSummary {
    #[must_use]
    pub fn from_items(items: &[CartItem]) -> Self {
        let lines: Vec<CartLine> = items
            .iter()
            .map(|item| CartLine {
                subtotal: item.subtotal(),
                item: item.clone(),
            })
            .collect();

        let total = lines
            .iter()
            .filter_map(|line| line.subtotal)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        Self { lines, total }
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn size(&self) -> usize {
        self.lines.len()
    }
}

/// Amount in the cart for each product, keyed by id.
#[must_use]
pub fn amounts_by_product(items: &[CartItem]) -> FxHashMap<ProductId, u32> {
    items.iter().map(|item| (item.id(), item.amount)).collect()
}

/// Format a price in Brazilian reais.
#[must_use]
pub fn format_price(price: Decimal) -> String {
    format!("{}", Money::from_decimal(price.round_dp(2), iso::BRL))
}
