//! Cart commands.

use std::io;

use clap::{Args, Subcommand};

use rocketshoes_app::{
    domain::carts::{CartStore, models::UpdateProductAmount},
    ids::ProductId,
};

use super::{CliError, output};

#[derive(Debug, Subcommand)]
pub(crate) enum CartCommand {
    /// Print the cart
    Show,

    /// Add one unit of a product
    Add(ProductArgs),

    /// Remove a product from the cart
    Remove(ProductArgs),

    /// Set the amount of a product already in the cart
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product id
    product_id: ProductId,
}

#[derive(Debug, Args)]
pub(crate) struct UpdateArgs {
    /// Product id
    product_id: ProductId,

    /// New amount; zero or below leaves the cart unchanged
    #[arg(allow_negative_numbers = true)]
    amount: i64,
}

pub(crate) async fn run(
    command: CartCommand,
    cart: &CartStore,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    match command {
        CartCommand::Show => {}
        CartCommand::Add(args) => cart.add_product(args.product_id).await?,
        CartCommand::Remove(args) => cart.remove_product(args.product_id).await?,
        CartCommand::Update(args) => {
            cart.update_product_amount(UpdateProductAmount {
                product_id: args.product_id,
                amount: args.amount,
            })
            .await?;
        }
    }

    output::write_cart(out, &cart.summary())?;

    Ok(())
}
