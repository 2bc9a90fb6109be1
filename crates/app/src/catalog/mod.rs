//! Catalog
//!
//! Remote product and stock records served by the storefront API.

pub mod errors;
pub mod http;
pub mod models;
pub mod service;

pub use errors::CatalogError;
pub use http::{CatalogConfig, HttpCatalogService};
pub use service::*;
