//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `CATALOG_BUILD_MODE` - `development` or `production` (default: development)
//! - `CATALOG_DEV_ORIGIN` - Origin serving `/api` and `/img` during development
//!   (default: `http://127.0.0.1:3000`)
//! - `CATALOG_PUBLIC_ORIGIN` - Origin of the published static site
//!   (default: `https://andriana1112.github.io/phone-catalog_react`)
//! - `CATALOG_REQUEST_DELAY_MS` - Artificial delay before each fetch (default: 500)
//! - `CATALOG_STORAGE_DIR` - Directory for persisted cart/favourites (default: `.catalog`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_DEV_ORIGIN: &str = "http://127.0.0.1:3000";
const DEFAULT_PUBLIC_ORIGIN: &str = "https://andriana1112.github.io/phone-catalog_react";
const DEFAULT_REQUEST_DELAY_MS: u64 = 500;
const DEFAULT_STORAGE_DIR: &str = ".catalog";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which origin assets and data are served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Local static server; asset URLs stay relative.
    #[default]
    Development,
    /// Published site; asset URLs are absolute.
    Production,
}

impl std::str::FromStr for BuildMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!("expected development or production, got {s}")),
        }
    }
}

/// Catalog application configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub build_mode: BuildMode,
    /// Origin used for data requests in development.
    pub dev_origin: Url,
    /// Origin of the published site, used for everything in production.
    pub public_origin: Url,
    /// Fixed delay before each fetch.
    pub request_delay: Duration,
    /// Directory backing the persisted stores.
    pub storage_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let build_mode = get_or("CATALOG_BUILD_MODE", "development")
            .parse::<BuildMode>()
            .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_BUILD_MODE".to_string(), e))?;
        let dev_origin = parse_origin(
            "CATALOG_DEV_ORIGIN",
            &get_or("CATALOG_DEV_ORIGIN", DEFAULT_DEV_ORIGIN),
        )?;
        let public_origin = parse_origin(
            "CATALOG_PUBLIC_ORIGIN",
            &get_or("CATALOG_PUBLIC_ORIGIN", DEFAULT_PUBLIC_ORIGIN),
        )?;
        let delay_ms = get_or(
            "CATALOG_REQUEST_DELAY_MS",
            &DEFAULT_REQUEST_DELAY_MS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOG_REQUEST_DELAY_MS".to_string(), e.to_string())
        })?;
        let storage_dir = PathBuf::from(get_or("CATALOG_STORAGE_DIR", DEFAULT_STORAGE_DIR));

        Ok(Self {
            build_mode,
            dev_origin,
            public_origin,
            request_delay: Duration::from_millis(delay_ms),
            storage_dir,
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Development configuration pointed at `origin`, with default delay and storage.
    #[must_use]
    pub fn development(origin: Url) -> Self {
        Self {
            build_mode: BuildMode::Development,
            public_origin: origin.clone(),
            dev_origin: origin,
            request_delay: Duration::from_millis(DEFAULT_REQUEST_DELAY_MS),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Base that request paths such as `/api/phones.json` are appended to.
    #[must_use]
    pub fn api_base(&self) -> String {
        let origin = match self.build_mode {
            BuildMode::Development => &self.dev_origin,
            BuildMode::Production => &self.public_origin,
        };
        origin.as_str().trim_end_matches('/').to_string()
    }

    /// Prefix for image URLs: empty in development, the public origin in production.
    #[must_use]
    pub fn asset_prefix(&self) -> String {
        match self.build_mode {
            BuildMode::Development => String::new(),
            BuildMode::Production => self.public_origin.as_str().trim_end_matches('/').to_string(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an origin URL, requiring an http(s) scheme and a host.
fn parse_origin(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "origin must have a host".to_string(),
        ));
    }

    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<CatalogConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CatalogConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.build_mode, BuildMode::Development);
        assert_eq!(config.request_delay, Duration::from_millis(500));
        assert_eq!(config.storage_dir, PathBuf::from(".catalog"));
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_development_bases() {
        let config = load(&[]).unwrap();
        assert_eq!(config.api_base(), "http://127.0.0.1:3000");
        assert_eq!(config.asset_prefix(), "");
    }

    #[test]
    fn test_production_bases() {
        let config = load(&[("CATALOG_BUILD_MODE", "production")]).unwrap();
        assert_eq!(
            config.api_base(),
            "https://andriana1112.github.io/phone-catalog_react"
        );
        assert_eq!(
            config.asset_prefix(),
            "https://andriana1112.github.io/phone-catalog_react"
        );
    }

    #[test]
    fn test_invalid_build_mode() {
        let err = load(&[("CATALOG_BUILD_MODE", "staging")]).unwrap_err();
        assert!(err.to_string().contains("CATALOG_BUILD_MODE"));
    }

    #[test]
    fn test_invalid_delay() {
        assert!(load(&[("CATALOG_REQUEST_DELAY_MS", "soon")]).is_err());
    }

    #[test]
    fn test_origin_requires_http_scheme() {
        let err = load(&[("CATALOG_DEV_ORIGIN", "ftp://example.com")]).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_origin_must_parse() {
        assert!(load(&[("CATALOG_PUBLIC_ORIGIN", "not a url")]).is_err());
    }

    #[test]
    fn test_custom_delay_and_storage() {
        let config = load(&[
            ("CATALOG_REQUEST_DELAY_MS", "0"),
            ("CATALOG_STORAGE_DIR", "/tmp/catalog"),
        ])
        .unwrap();
        assert_eq!(config.request_delay, Duration::ZERO);
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/catalog"));
    }
}
