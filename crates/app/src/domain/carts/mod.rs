//! Carts

pub mod errors;
pub mod models;
pub mod store;
pub mod summary;

pub use errors::{CartError, CartFailure};
pub use store::*;
