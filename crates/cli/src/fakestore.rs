//! Fake Store API client.
//!
//! Thin REST client over the three public collection endpoints (`/users`,
//! `/products`, `/carts`). Each call is a single GET with no retries; the
//! caller decides what a failure means. [`FakeStoreClient::fetch_snapshot`]
//! issues all three concurrently and fails fast on the first error.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use storelens_core::{Cart, Product, User};

use crate::config::StoreApiConfig;

/// Errors that can occur when talking to the Fake Store API.
#[derive(Debug, Error)]
pub enum StoreApiError {
    /// HTTP request failed (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One complete fetch of the store's collections.
///
/// Either all three collections were fetched successfully or no snapshot
/// exists; there is no partial state.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    /// All registered users.
    pub users: Vec<User>,
    /// The product catalog.
    pub products: Vec<Product>,
    /// All shopping carts.
    pub carts: Vec<Cart>,
}

/// Client for the Fake Store API.
#[derive(Debug, Clone)]
pub struct FakeStoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl FakeStoreClient {
    /// Create a new Fake Store API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &StoreApiConfig) -> Result<Self, StoreApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch all registered users.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a user array.
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> Result<Vec<User>, StoreApiError> {
        self.fetch_list("users").await
    }

    /// Fetch the product catalog.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a product array.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, StoreApiError> {
        self.fetch_list("products").await
    }

    /// Fetch all shopping carts.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a cart array.
    #[instrument(skip(self))]
    pub async fn get_carts(&self) -> Result<Vec<Cart>, StoreApiError> {
        self.fetch_list("carts").await
    }

    /// Fetch users, products, and carts concurrently.
    ///
    /// The three requests run in parallel on the same connection pool. The
    /// first failure aborts the whole fetch and the in-flight requests are
    /// dropped, so a partial snapshot is never observable.
    ///
    /// # Errors
    ///
    /// Returns the first error any of the three fetches produced.
    #[instrument(skip(self))]
    pub async fn fetch_snapshot(&self) -> Result<StoreSnapshot, StoreApiError> {
        let (users, products, carts) =
            tokio::try_join!(self.get_users(), self.get_products(), self.get_carts())?;

        debug!(
            users = users.len(),
            products = products.len(),
            carts = carts.len(),
            "store snapshot fetched"
        );

        Ok(StoreSnapshot {
            users,
            products,
            carts,
        })
    }

    /// GET a collection endpoint and decode the JSON array body.
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, StoreApiError> {
        let url = format!("{}/{path}", self.base_url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Fake Store API returned non-success status"
            );
            return Err(StoreApiError::Api {
                status: status.as_u16(),
                message: response_text.chars().take(200).collect::<String>(),
            });
        }

        let items: Vec<T> = match serde_json::from_str(&response_text) {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Fake Store API response"
                );
                return Err(StoreApiError::Parse(e));
            }
        };

        debug!(path, count = items.len(), "collection fetched");
        Ok(items)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = StoreApiError::Api {
            status: 503,
            message: "maintenance".to_string(),
        };
        assert_eq!(error.to_string(), "API error: 503 - maintenance");
    }

    #[test]
    fn test_parse_error_display() {
        let source = serde_json::from_str::<Vec<User>>("{").expect_err("invalid JSON");
        let error = StoreApiError::from(source);
        assert!(error.to_string().starts_with("JSON parse error:"));
    }
}
