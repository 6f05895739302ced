//! Integration tests for the phone catalog.
//!
//! Tests run against a real HTTP server: [`TestServer`] copies the fixture
//! collections into a temporary directory and serves it with
//! `tower_http::services::ServeDir` on an ephemeral local port, the same way
//! the published catalog is a plain static site.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p phone-catalog-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `client_fetch` - data client against live responses
//! - `persistence` - stores over file storage across restarts
//! - `product_page` - fetched products rendered to HTML

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::Router;
use phone_catalog_storefront::client::CatalogClient;
use phone_catalog_storefront::config::CatalogConfig;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;
use url::Url;

/// Directory holding the JSON fixtures, laid out as on the static site.
#[must_use]
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// A static file server over a private copy of the fixtures.
pub struct TestServer {
    addr: SocketAddr,
    /// Removed from disk when the server is dropped.
    _root: TempDir,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve the standard fixtures.
    ///
    /// # Panics
    ///
    /// Panics if the fixtures cannot be copied or the listener cannot bind.
    pub async fn start() -> Self {
        let root = tempfile::tempdir().expect("Failed to create server root");
        copy_dir(&fixtures_dir(), root.path());
        Self::serve(root).await
    }

    /// Serve the standard fixtures plus `files`, given as `(path, contents)`.
    /// Later entries overwrite fixtures with the same path.
    ///
    /// # Panics
    ///
    /// Panics if the files cannot be written or the listener cannot bind.
    pub async fn with_files(files: &[(&str, &str)]) -> Self {
        let root = tempfile::tempdir().expect("Failed to create server root");
        copy_dir(&fixtures_dir(), root.path());
        for (path, contents) in files {
            let target = root.path().join(path.trim_start_matches('/'));
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
            }
            std::fs::write(&target, contents).expect("Failed to write fixture");
        }
        Self::serve(root).await
    }

    async fn serve(root: TempDir) -> Self {
        let app = Router::new().fallback_service(ServeDir::new(root.path()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read local address");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                panic!("Test server failed: {e}");
            }
        });

        Self {
            addr,
            _root: root,
            handle,
        }
    }

    /// Origin of the server, e.g. `http://127.0.0.1:49152`.
    #[must_use]
    pub fn origin(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Development configuration pointed at this server, without request delay.
    ///
    /// # Panics
    ///
    /// Panics if the origin is not a valid URL.
    #[must_use]
    pub fn config(&self) -> CatalogConfig {
        let origin = Url::parse(&self.origin()).expect("Invalid test server origin");
        let mut config = CatalogConfig::development(origin);
        config.request_delay = Duration::ZERO;
        config
    }

    /// Client for this server with the given delay.
    #[must_use]
    pub fn client_with_delay(&self, delay: Duration) -> CatalogClient {
        CatalogClient::with_base_url(self.origin(), delay)
    }

    /// Client for this server without delay.
    #[must_use]
    pub fn client(&self) -> CatalogClient {
        self.client_with_delay(Duration::ZERO)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn copy_dir(from: &Path, to: &Path) {
    std::fs::create_dir_all(to).expect("Failed to create fixture directory");
    for entry in std::fs::read_dir(from).expect("Failed to read fixtures") {
        let entry = entry.expect("Failed to read fixture entry");
        let target = to.join(entry.file_name());
        if entry.path().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), &target).expect("Failed to copy fixture");
        }
    }
}
