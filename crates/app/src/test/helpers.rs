//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    catalog::models::{Product, Stock},
    domain::carts::models::CartItem,
    ids::ProductId,
};

pub(crate) fn product(id: u64, title: &str) -> Product {
    Product::new(ProductId::new(id))
        .with_title(title)
        .with_price(Decimal::new(1795, 1))
        .with_image(format!("https://example.com/tenis{id}.jpg"))
}

pub(crate) fn stock(id: u64, amount: u32) -> Stock {
    Stock::new(ProductId::new(id), amount)
}

pub(crate) fn item(id: u64, amount: u32) -> CartItem {
    CartItem::new(Product::new(ProductId::new(id))).with_amount(amount)
}
