//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;
use tracing::info;

use crate::{
    catalog::{CatalogConfig, CatalogError, CatalogService, HttpCatalogService},
    domain::carts::CartStore,
    notifications::{Notifier, TracingNotifier},
    storage::{CartStorage, FileStorage},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build catalog client")]
    Catalog(#[source] CatalogError),
}

/// Settings for building an [`AppContext`] from configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogConfig,

    /// File holding the persisted key-value slots.
    pub storage_path: PathBuf,

    /// Slot the cart is persisted under.
    pub cart_key: String,
}

/// Application wiring. Created once at startup and handed to whichever
/// component needs the cart.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub cart: Arc<CartStore>,
}

impl AppContext {
    /// Build a context around explicit collaborators.
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        storage: Arc<dyn CartStorage>,
        notifier: Arc<dyn Notifier>,
        cart_key: impl Into<String>,
    ) -> Self {
        Self {
            cart: Arc::new(CartStore::load(catalog, storage, notifier, cart_key)),
        }
    }

    /// Build a context backed by the storefront API, file storage and log
    /// notifications.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: AppConfig) -> Result<Self, AppInitError> {
        let catalog = HttpCatalogService::new(config.catalog).map_err(AppInitError::Catalog)?;

        info!(storage_path = %config.storage_path.display(), "opening cart storage");

        Ok(Self::new(
            Arc::new(catalog),
            Arc::new(FileStorage::new(config.storage_path)),
            Arc::new(TracingNotifier),
            config.cart_key,
        ))
    }
}
