//! Static JSON data client.
//!
//! # Behavior
//!
//! - Every request waits a fixed delay first (500 ms by default). This is
//!   simulated latency for the loading states of the UI, not a backoff.
//! - GET is the only verb. The path is appended to the configured origin.
//! - Any non-2xx status fails with the generic [`API_ERROR_MESSAGE`]; callers
//!   get no distinction between 4xx and 5xx.
//! - No caching and no retries.
//!
//! [`CatalogClient::get_cancellable`] lets a caller that goes away abandon a
//! pending request through a [`CancellationToken`].
//!
//! # Example
//!
//! ```rust,ignore
//! use phone_catalog_core::Product;
//! use phone_catalog_storefront::client::CatalogClient;
//!
//! let client = CatalogClient::new(&config);
//! let phones: Vec<Product> = client.get("/api/phones.json").await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;

/// Message carried by every non-success response.
pub const API_ERROR_MESSAGE: &str = "Something went wrong with API!";

/// Errors that can occur when fetching catalog data.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("Something went wrong with API!")]
    Api {
        /// Status returned by the server (for logs only).
        status: reqwest::StatusCode,
        /// Full URL that was requested.
        url: String,
    },

    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The collection loaded but holds no matching record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller cancelled before the response arrived.
    #[error("Request cancelled")]
    Cancelled,
}

/// Client for the static catalog collections.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    delay: Duration,
}

impl CatalogClient {
    /// Create a client for the origin selected by the config's build mode.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_base_url(config.api_base(), config.request_delay)
    }

    /// Create a client for an explicit base URL and delay.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, delay: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url,
                delay,
            }),
        }
    }

    /// Full URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.inner.base_url)
        } else {
            format!("{}/{path}", self.inner.base_url)
        }
    }

    /// Wait the configured delay, then GET `path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] for any non-2xx status, and
    /// [`ClientError::Http`] or [`ClientError::Parse`] for transport and
    /// decoding failures.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tokio::time::sleep(self.inner.delay).await;
        self.fetch(path).await
    }

    /// Like [`get`](Self::get), but resolves to [`ClientError::Cancelled`] as
    /// soon as `token` is cancelled, dropping the in-flight request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Cancelled`] if the token fires first, otherwise
    /// the same errors as [`get`](Self::get).
    pub async fn get_cancellable<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &CancellationToken,
    ) -> Result<T, ClientError> {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                debug!(path, "Catalog request cancelled");
                Err(ClientError::Cancelled)
            }
            result = self.get(path) => result,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url_for(path);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = %status, url = %url, "Catalog request returned non-success status");
            return Err(ClientError::Api { status, url });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            ClientError::Parse(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_is_generic() {
        let err = ClientError::Api {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "http://localhost/missing.json".to_string(),
        };
        assert_eq!(err.to_string(), API_ERROR_MESSAGE);

        let err = ClientError::Api {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://localhost/api/phones.json".to_string(),
        };
        assert_eq!(err.to_string(), API_ERROR_MESSAGE);
    }

    #[test]
    fn test_url_for() {
        let client = CatalogClient::with_base_url("http://localhost:3000/", Duration::ZERO);
        assert_eq!(
            client.url_for("/api/phones.json"),
            "http://localhost:3000/api/phones.json"
        );
        assert_eq!(
            client.url_for("api/tablets.json"),
            "http://localhost:3000/api/tablets.json"
        );
    }

    #[test]
    fn test_url_for_keeps_base_path() {
        let client = CatalogClient::with_base_url(
            "https://andriana1112.github.io/phone-catalog_react",
            Duration::ZERO,
        );
        assert_eq!(
            client.url_for("/api/products.json"),
            "https://andriana1112.github.io/phone-catalog_react/api/products.json"
        );
    }

    #[tokio::test]
    async fn test_cancelled_before_delay_elapses() {
        // Nothing listens on this port; the request must never be sent.
        let client = CatalogClient::with_base_url("http://127.0.0.1:9", Duration::from_secs(60));
        let token = CancellationToken::new();
        token.cancel();

        let result: Result<Vec<String>, _> =
            client.get_cancellable("/api/phones.json", &token).await;
        assert!(matches!(result, Err(ClientError::Cancelled)));
    }

    #[test]
    fn test_not_found_display() {
        let err = ClientError::NotFound("phones/apple-iphone-99".to_string());
        assert_eq!(err.to_string(), "Not found: phones/apple-iphone-99");
    }

    #[test]
    fn test_cancelled_display() {
        assert_eq!(ClientError::Cancelled.to_string(), "Request cancelled");
    }
}
