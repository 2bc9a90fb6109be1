//! Catalog errors.

use thiserror::Error;

/// Errors that can occur when talking to the storefront API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-2xx response.
    #[error("unexpected response from catalog: {0}")]
    UnexpectedResponse(String),
}
