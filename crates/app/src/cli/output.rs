//! Cart rendering.

use std::io;

use rocketshoes_app::domain::carts::summary::{CartSummary, format_price};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

pub(crate) fn write_cart(out: &mut impl io::Write, summary: &CartSummary) -> io::Result<()> {
    if summary.lines.is_empty() {
        return writeln!(out, "cart is empty");
    }

    let mut builder = Builder::default();

    builder.push_record(["#", "Product", "Amount", "Price", "Subtotal"]);

    for (idx, line) in summary.lines.iter().enumerate() {
        let product = &line.item.product;

        builder.push_record([
            format!("{}", idx + 1),
            product
                .title
                .clone()
                .unwrap_or_else(|| format!("product {}", product.id)),
            line.item.amount.to_string(),
            product.price.map(format_price).unwrap_or_default(),
            line.subtotal.map(format_price).unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "{} item(s), total {}",
        summary.size(),
        format_price(summary.total)
    )
}

#[cfg(test)]
mod tests {
    use rocketshoes_app::{
        catalog::models::Product,
        domain::carts::models::CartItem,
        ids::ProductId,
    };
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn empty_cart_says_so() -> TestResult {
        let mut out = Vec::new();

        write_cart(&mut out, &CartSummary::from_items(&[]))?;

        assert_eq!(String::from_utf8(out)?, "cart is empty\n");

        Ok(())
    }

    #[test]
    fn lines_and_total_are_listed() -> TestResult {
        let items = [
            CartItem::new(
                Product::new(ProductId::new(1))
                    .with_title("Tênis de Caminhada Leve Confortável")
                    .with_price(Decimal::new(1799, 1)),
            )
            .with_amount(2),
            CartItem::new(Product::new(ProductId::new(9))),
        ];

        let mut out = Vec::new();

        write_cart(&mut out, &CartSummary::from_items(&items))?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Tênis de Caminhada Leve Confortável"), "{rendered}");
        assert!(rendered.contains("product 9"), "{rendered}");
        assert!(rendered.contains("2 item(s), total R$"), "{rendered}");

        Ok(())
    }
}
