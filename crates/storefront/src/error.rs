//! Unified error handling with Sentry integration.
//!
//! Provides a unified `CatalogError` type for operations that span the data
//! client, storage, and rendering. Front ends call [`CatalogError::report`]
//! before showing a fallback to the user.

use thiserror::Error;

use crate::client::ClientError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Fetching catalog data failed.
    #[error("{0}")]
    Client(#[from] ClientError),

    /// Reading or writing local storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl CatalogError {
    /// Returns `true` for failures worth an error report rather than a
    /// user-facing fallback message.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Render(_) | Self::Config(_))
    }

    /// Log the error and capture internal failures to Sentry.
    pub fn report(&self) {
        if self.is_internal() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Catalog error"
            );
        } else {
            tracing::warn!(error = %self, "Catalog request failed");
        }
    }

    /// Message safe to show to a shopper.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(ClientError::Cancelled) => "Request cancelled".to_string(),
            Self::Client(ClientError::NotFound(_)) => "Product was not found".to_string(),
            Self::Client(_) => crate::client::API_ERROR_MESSAGE.to_string(),
            Self::Config(_) | Self::Storage(_) | Self::Render(_) => {
                "Internal error".to_string()
            }
        }
    }
}

/// Result type alias for `CatalogError`.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "add", Some(&[("identity", "apple-iphone-11-64gb-black")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
