//! Cart errors.
//!
//! Each [`CartError`] variant is one of the four messages a shopper can see.
//! The underlying cause travels as the error's source, for logs only.

use thiserror::Error;

use crate::{catalog::CatalogError, ids::ProductId};

#[derive(Debug, Error)]
pub enum CartError {
    #[error("requested quantity exceeds stock")]
    StockExceeded {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },

    #[error("failed to add product")]
    AddProduct(#[source] CartFailure),

    #[error("failed to remove product")]
    RemoveProduct(#[source] CartFailure),

    #[error("failed to change product quantity")]
    UpdateAmount(#[source] CartFailure),
}

/// Why an operation failed, behind the shopper-facing message.
#[derive(Debug, Error)]
pub enum CartFailure {
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("catalog returned product {received} when asked for {requested}")]
    MismatchedProduct {
        requested: ProductId,
        received: ProductId,
    },

    #[error("catalog request failed")]
    Catalog(#[from] CatalogError),
}
