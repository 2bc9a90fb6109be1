//! Test context for cart store tests.

use std::sync::Arc;

use crate::{
    catalog::{MockCatalogService, models::Product},
    domain::carts::{CART_STORAGE_KEY, CartStore, models::CartItem},
    ids::ProductId,
    notifications::{MockNotifier, Severity},
    storage::{CartStorage, MemoryStorage},
};

use super::helpers::stock;

/// Mocked collaborators for a [`CartStore`], plus real in-memory storage.
pub(crate) struct TestContext {
    pub catalog: MockCatalogService,
    pub notifier: MockNotifier,
    pub storage: Arc<MemoryStorage>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            catalog: MockCatalogService::new(),
            notifier: MockNotifier::new(),
            storage: Arc::new(MemoryStorage::new()),
        }
    }

    /// Context whose storage already holds `items`.
    pub fn with_cart(items: &[CartItem]) -> Self {
        let ctx = Self::new();

        let raw = serde_json::to_string(items).unwrap_or_else(|error| {
            panic!("failed to serialize seed cart: {error}");
        });

        ctx.storage
            .set_item(CART_STORAGE_KEY, &raw)
            .unwrap_or_else(|error| panic!("failed to seed storage: {error}"));

        ctx
    }

    /// Every stock lookup for `id` reports `amount`.
    pub fn expect_stock(&mut self, id: u64, amount: u32) {
        self.catalog
            .expect_get_stock()
            .withf(move |product| *product == ProductId::new(id))
            .returning(move |_| Ok(stock(id, amount)));
    }

    /// `product` is fetched exactly once.
    pub fn expect_product(&mut self, product: Product) {
        let id = product.id;

        self.catalog
            .expect_get_product()
            .withf(move |requested| *requested == id)
            .times(1)
            .return_once(move |_| Ok(product));
    }

    /// Exactly one error notification with `message`.
    pub fn expect_notification(&mut self, message: &'static str) {
        self.notifier
            .expect_notify()
            .withf(move |severity, text| {
                *severity == Severity::Error && text.to_string() == message
            })
            .times(1)
            .return_const(());
    }

    pub fn expect_no_notification(&mut self) {
        self.notifier.expect_notify().never();
    }

    pub fn store(self) -> CartStore {
        CartStore::load(
            Arc::new(self.catalog),
            self.storage,
            Arc::new(self.notifier),
            CART_STORAGE_KEY,
        )
    }
}
