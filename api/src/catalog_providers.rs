//! Defines the trait and implementations for remote catalog services.

use crate::product::Product;
use thiserror::Error;

/// An error raised while talking to the catalog service.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("could not reach the catalog service: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("catalog service returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON shape.
    #[error("unexpected catalog response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// A read-only source of products and category names.
pub trait CatalogService {
    /// Fetches every product, in service order.
    async fn products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetches every category name, in service order.
    async fn categories(&self) -> Result<Vec<String>, CatalogError>;
}

/// Catalog served by a Fake Store API compatible HTTP endpoint.
pub mod fake_store {
    use super::*;
    use serde::de::DeserializeOwned;

    /// An implementation of the `CatalogService` trait over HTTP.
    #[derive(Clone, Debug)]
    pub struct FakeStore {
        client: reqwest::Client,
        base_url: String,
    }

    impl FakeStore {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                base_url: base_url.into().trim_end_matches('/').to_string(),
            }
        }

        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }

        async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
            let url = self.url(path);
            dioxus_logger::tracing::debug!("GET {}", url);

            let resp = self.client.get(&url).send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(CatalogError::Status {
                    status: status.as_u16(),
                    url,
                });
            }
            Ok(resp.json::<T>().await?)
        }
    }

    impl CatalogService for FakeStore {
        async fn products(&self) -> Result<Vec<Product>, CatalogError> {
            self.get_json("/products").await
        }

        async fn categories(&self) -> Result<Vec<String>, CatalogError> {
            self.get_json("/products/categories").await
        }
    }

}
