//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    catalog::{
        errors::CatalogError,
        models::{Product, Stock},
    },
    ids::ProductId,
};

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch the current stock level for a product. Never cached.
    async fn get_stock(&self, product: ProductId) -> Result<Stock, CatalogError>;

    /// Fetch the full product record.
    async fn get_product(&self, product: ProductId) -> Result<Product, CatalogError>;
}
