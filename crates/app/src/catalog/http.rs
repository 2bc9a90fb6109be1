//! HTTP client for the storefront API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    catalog::{
        CatalogService,
        errors::CatalogError,
        models::{Product, Stock},
    },
    ids::ProductId,
};

/// Configuration for connecting to the storefront API.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API base address, e.g. `"http://localhost:3333"`.
    pub base_url: String,

    /// Per-request timeout. Requests wait indefinitely when unset.
    pub timeout: Option<Duration>,
}

/// Catalog backed by `GET /stock/{id}` and `GET /products/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    base_url: String,
    http: Client,
}

impl HttpCatalogService {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{path}", self.base_url);

        debug!(%url, "requesting catalog record");

        let response = self.http.get(&url).send().await?;

        Ok(ensure_success(response).await?.json().await?)
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn get_stock(&self, product: ProductId) -> Result<Stock, CatalogError> {
        self.get_json(&format!("/stock/{product}")).await
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, CatalogError> {
        self.get_json(&format!("/products/{product}")).await
    }
}

async fn ensure_success(response: Response) -> Result<Response, CatalogError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let url = response.url().clone();
    let text = response.text().await.unwrap_or_default();

    Err(CatalogError::UnexpectedResponse(format!(
        "GET {url} failed with status {status}: {text}"
    )))
}
