use std::io;

use clap::Parser;
use rocketshoes_app::{
    context::{AppContext, AppInitError},
    domain::carts::CartError,
};
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

mod cart;
mod config;
mod logging;
mod output;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Init(#[from] AppInitError),

    #[error("failed to initialise logging")]
    Logging(#[from] TryInitError),

    #[error("failed to write output")]
    Output(#[from] io::Error),

    #[error(transparent)]
    Cart(#[from] CartError),
}

impl CliError {
    /// Cart failures have already been shown through the notifier.
    pub(crate) fn is_reported(&self) -> bool {
        matches!(self, Self::Cart(_))
    }
}

#[derive(Debug, Parser)]
#[command(name = "rocketshoes", about = "RocketShoes cart", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    catalog: config::CatalogArgs,

    #[command(flatten)]
    storage: config::StorageArgs,

    #[command(flatten)]
    logging: config::LoggingArgs,

    #[command(subcommand)]
    command: cart::CartCommand,
}

impl Cli {
    pub(crate) async fn run(self, out: &mut impl io::Write) -> Result<(), CliError> {
        logging::init_subscriber(&self.logging)?;

        let context = AppContext::from_config(config::app_config(&self.catalog, &self.storage))?;

        cart::run(self.command, &context.cart, out).await
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rocketshoes_app::domain::carts::CART_STORAGE_KEY;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_update_with_negative_amount() -> TestResult {
        let cli = Cli::try_parse_from([
            "rocketshoes",
            "--api-url",
            "http://shop.test",
            "update",
            "4",
            "-2",
        ])?;

        assert_eq!(cli.catalog.api_url, "http://shop.test");
        assert!(
            matches!(cli.command, cart::CartCommand::Update(_)),
            "expected update, got {:?}",
            cli.command
        );

        Ok(())
    }

    #[test]
    fn storage_flags_are_parsed() -> TestResult {
        let cli = Cli::try_parse_from([
            "rocketshoes",
            "--storage-path",
            "/tmp/cart.json",
            "--cart-key",
            CART_STORAGE_KEY,
            "show",
        ])?;

        assert_eq!(cli.storage.storage_path, Path::new("/tmp/cart.json"));
        assert_eq!(cli.storage.cart_key, CART_STORAGE_KEY);

        Ok(())
    }

    #[test]
    fn rejects_non_numeric_product_id() {
        let result = Cli::try_parse_from(["rocketshoes", "add", "shoe"]);

        assert!(result.is_err(), "expected a parse error");
    }
}
