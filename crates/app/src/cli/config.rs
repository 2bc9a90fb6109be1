//! CLI configuration.

use std::{path::PathBuf, time::Duration};

use clap::Args;

use rocketshoes_app::{
    catalog::CatalogConfig, context::AppConfig, domain::carts::CART_STORAGE_KEY,
};

/// Storefront API settings.
#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Storefront API address
    #[arg(long, env = "ROCKETSHOES_API_URL", default_value = "http://localhost:3333")]
    pub api_url: String,

    /// Request timeout in seconds; requests wait indefinitely when omitted
    #[arg(long, env = "ROCKETSHOES_API_TIMEOUT_SECONDS")]
    pub api_timeout_seconds: Option<u64>,
}

/// Cart persistence settings.
#[derive(Debug, Args)]
pub(crate) struct StorageArgs {
    /// File holding the persisted cart
    #[arg(
        long,
        env = "ROCKETSHOES_STORAGE_PATH",
        default_value = ".rocketshoes/storage.json"
    )]
    pub storage_path: PathBuf,

    /// Storage key the cart is kept under
    #[arg(long, env = "ROCKETSHOES_CART_KEY", default_value = CART_STORAGE_KEY)]
    pub cart_key: String,
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingArgs {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "error")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

pub(crate) fn app_config(catalog: &CatalogArgs, storage: &StorageArgs) -> AppConfig {
    AppConfig {
        catalog: CatalogConfig {
            base_url: catalog.api_url.clone(),
            timeout: catalog.api_timeout_seconds.map(Duration::from_secs),
        },
        storage_path: storage.storage_path.clone(),
        cart_key: storage.cart_key.clone(),
    }
}
