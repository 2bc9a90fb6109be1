//! Cart store.
//!
//! Owns the shopper's cart. Every mutation runs under one writer lock, builds
//! a fresh snapshot instead of editing the current one, and is persisted when
//! the committed snapshot differs from the last one written.

use std::{
    error::Error as _,
    fmt::{Debug, Formatter, Result as FmtResult},
    iter,
    sync::{Arc, PoisonError, RwLock},
};

use rustc_hash::{FxHashMap, FxHashSet};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    catalog::CatalogService,
    domain::carts::{
        errors::{CartError, CartFailure},
        models::{CartItem, CartSnapshot, UpdateProductAmount},
        summary::{self, CartSummary},
    },
    ids::ProductId,
    notifications::{Notifier, Severity},
    storage::CartStorage,
};

/// Storage key the cart is persisted under unless configured otherwise.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

struct CartState {
    items: CartSnapshot,

    /// Last snapshot successfully written to storage.
    persisted: CartSnapshot,
}

/// The shopper's cart, shared by every component that reads or changes it.
pub struct CartStore {
    catalog: Arc<dyn CatalogService>,
    storage: Arc<dyn CartStorage>,
    notifier: Arc<dyn Notifier>,
    storage_key: String,
    state: Mutex<CartState>,
    published: RwLock<CartSnapshot>,
}

impl CartStore {
    /// Restore the cart persisted under `storage_key`.
    ///
    /// A missing, unreadable or malformed value yields an empty cart. Loading
    /// never writes back to storage.
    pub fn load(
        catalog: Arc<dyn CatalogService>,
        storage: Arc<dyn CartStorage>,
        notifier: Arc<dyn Notifier>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let items = restore(storage.as_ref(), &storage_key);

        info!(storage_key = %storage_key, items = items.len(), "loaded cart");

        Self {
            catalog,
            storage,
            notifier,
            storage_key,
            state: Mutex::new(CartState {
                items: Arc::clone(&items),
                persisted: Arc::clone(&items),
            }),
            published: RwLock::new(items),
        }
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> CartSnapshot {
        Arc::clone(&*self.published.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from_items(&self.cart())
    }

    pub fn amounts_by_product(&self) -> FxHashMap<ProductId, u32> {
        summary::amounts_by_product(&self.cart())
    }

    pub fn len(&self) -> usize {
        self.cart().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cart().is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Add one unit of a product, fetching its record on first add.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StockExceeded`] when the new amount would exceed
    /// stock, and [`CartError::AddProduct`] when the catalog cannot be reached.
    #[tracing::instrument(name = "cart.add_product", skip_all, fields(product_id = %product_id))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<(), CartError> {
        let mut state = self.state.lock().await;

        let outcome = self.added(&state.items, product_id).await;

        self.settle(&mut state, outcome)
    }

    /// Remove a product line entirely.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::RemoveProduct`] when the product is not in the cart.
    #[tracing::instrument(name = "cart.remove_product", skip_all, fields(product_id = %product_id))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<(), CartError> {
        let mut state = self.state.lock().await;

        let outcome = removed(&state.items, product_id);

        self.settle(&mut state, outcome)
    }

    /// Set a product's amount. Amounts of zero or below are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StockExceeded`] when the amount exceeds stock, and
    /// [`CartError::UpdateAmount`] when the product is not in the cart or the
    /// catalog cannot be reached.
    #[tracing::instrument(
        name = "cart.update_product_amount",
        skip_all,
        fields(product_id = %update.product_id, amount = update.amount)
    )]
    pub async fn update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<(), CartError> {
        if update.amount <= 0 {
            debug!("ignoring non-positive amount");

            return Ok(());
        }

        let mut state = self.state.lock().await;

        let outcome = self.updated(&state.items, update).await;

        self.settle(&mut state, outcome)
    }

    /// Persist the current snapshot if it differs from the last one written.
    ///
    /// Operations already do this after each commit; calling it again is a
    /// no-op unless an earlier write failed.
    pub async fn sync(&self) {
        let mut state = self.state.lock().await;

        self.persist_if_changed(&mut state);
    }

    async fn added(
        &self,
        items: &[CartItem],
        product_id: ProductId,
    ) -> Result<CartSnapshot, CartError> {
        let existing = items.iter().find(|item| item.id() == product_id);

        let stock = self
            .catalog
            .get_stock(product_id)
            .await
            .map_err(|error| CartError::AddProduct(error.into()))?;

        let requested = existing.map_or(0, |item| u64::from(item.amount)) + 1;

        let amount = match u32::try_from(requested) {
            Ok(amount) if amount <= stock.amount => amount,
            _ => {
                return Err(CartError::StockExceeded {
                    product_id,
                    requested,
                    available: stock.amount,
                });
            }
        };

        if let Some(snapshot) = with_amount(items, product_id, amount) {
            return Ok(snapshot);
        }

        let product = self
            .catalog
            .get_product(product_id)
            .await
            .map_err(|error| CartError::AddProduct(error.into()))?;

        if product.id != product_id {
            return Err(CartError::AddProduct(CartFailure::MismatchedProduct {
                requested: product_id,
                received: product.id,
            }));
        }

        Ok(items
            .iter()
            .cloned()
            .chain(iter::once(CartItem::new(product)))
            .collect())
    }

    async fn updated(
        &self,
        items: &[CartItem],
        update: UpdateProductAmount,
    ) -> Result<CartSnapshot, CartError> {
        let product_id = update.product_id;
        let requested = update.amount.unsigned_abs();

        let stock = self
            .catalog
            .get_stock(product_id)
            .await
            .map_err(|error| CartError::UpdateAmount(error.into()))?;

        let amount = match u32::try_from(requested) {
            Ok(amount) if amount <= stock.amount => amount,
            _ => {
                return Err(CartError::StockExceeded {
                    product_id,
                    requested,
                    available: stock.amount,
                });
            }
        };

        with_amount(items, product_id, amount)
            .ok_or_else(|| CartError::UpdateAmount(CartFailure::NotInCart(product_id)))
    }

    fn settle(
        &self,
        state: &mut CartState,
        outcome: Result<CartSnapshot, CartError>,
    ) -> Result<(), CartError> {
        match outcome {
            Ok(items) => {
                self.commit(state, items);

                Ok(())
            }
            Err(error) => {
                let cause = error.source().map(ToString::to_string);

                warn!(%error, cause = cause.as_deref().unwrap_or("none"), "cart operation failed");

                self.notifier.notify(Severity::Error, &error.to_string());

                Err(error)
            }
        }
    }

    fn commit(&self, state: &mut CartState, items: CartSnapshot) {
        state.items = Arc::clone(&items);

        *self
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner) = items;

        info!(items = state.items.len(), "committed cart");

        self.persist_if_changed(state);
    }

    fn persist_if_changed(&self, state: &mut CartState) {
        if Arc::ptr_eq(&state.items, &state.persisted) {
            debug!("cart unchanged since last write");

            return;
        }

        let raw = match serde_json::to_string(&*state.items) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "failed to serialize cart");

                return;
            }
        };

        if let Err(error) = self.storage.set_item(&self.storage_key, &raw) {
            warn!(%error, storage_key = %self.storage_key, "failed to persist cart");

            return;
        }

        debug!(storage_key = %self.storage_key, bytes = raw.len(), "persisted cart");

        state.persisted = Arc::clone(&state.items);
    }
}

impl Debug for CartStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartStore")
            .field("storage_key", &self.storage_key)
            .field("items", &self.cart())
            .finish_non_exhaustive()
    }
}

fn restore(storage: &dyn CartStorage, key: &str) -> CartSnapshot {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return CartSnapshot::from([]),
        Err(error) => {
            warn!(%error, storage_key = key, "failed to read persisted cart; starting empty");

            return CartSnapshot::from([]);
        }
    };

    let items: Vec<CartItem> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(error) => {
            warn!(%error, storage_key = key, "discarding malformed persisted cart");

            return CartSnapshot::from([]);
        }
    };

    let mut seen = FxHashSet::default();

    items
        .into_iter()
        .filter(|item| {
            if item.amount == 0 {
                warn!(product_id = %item.id(), "dropping persisted cart line with no amount");

                return false;
            }

            let first = seen.insert(item.id());

            if !first {
                warn!(product_id = %item.id(), "dropping duplicate persisted cart line");
            }

            first
        })
        .collect()
}

fn removed(items: &[CartItem], product_id: ProductId) -> Result<CartSnapshot, CartError> {
    if !items.iter().any(|item| item.id() == product_id) {
        return Err(CartError::RemoveProduct(CartFailure::NotInCart(product_id)));
    }

    Ok(items
        .iter()
        .filter(|item| item.id() != product_id)
        .cloned()
        .collect())
}

/// New snapshot with `product_id` set to `amount`, or `None` when absent.
fn with_amount(items: &[CartItem], product_id: ProductId, amount: u32) -> Option<CartSnapshot> {
    items.iter().any(|item| item.id() == product_id).then(|| {
        items
            .iter()
            .map(|item| {
                if item.id() == product_id {
                    item.with_amount(amount)
                } else {
                    item.clone()
                }
            })
            .collect()
    })
}
