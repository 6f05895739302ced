//! Application state shared across front ends.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use askama::Template;
use phone_catalog_core::ProductCategory;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::client::CatalogClient;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::images::AssetUrls;
use crate::storage::{FileStorage, KeyValueStorage};
use crate::store::{CartStore, FavouritesStore};
use crate::views::breadcrumbs::product_trail;
use crate::views::{BreadcrumbsTemplate, NotFoundTemplate, ProductDescription, ProductPageTemplate};

/// Application state shared across all callers.
///
/// This struct is cheaply cloneable via `Arc`. Each store sits behind its
/// own mutex, so clones still see a single writer per store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    client: CatalogClient,
    assets: AssetUrls,
    favourites: Mutex<FavouritesStore>,
    cart: Mutex<CartStore>,
}

impl AppState {
    /// Create a new application state with stores persisted under
    /// `config.storage_dir`.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let storage = Arc::new(FileStorage::new(&config.storage_dir));
        Self::with_storage(config, storage)
    }

    /// Create a new application state over an explicit storage backend.
    #[must_use]
    pub fn with_storage(config: &CatalogConfig, storage: Arc<dyn KeyValueStorage>) -> Self {
        let client = CatalogClient::new(config);
        let assets = AssetUrls::from_config(config);
        let favourites = FavouritesStore::load(Arc::clone(&storage));
        let cart = CartStore::load(storage);

        Self {
            inner: Arc::new(AppStateInner {
                client,
                assets,
                favourites: Mutex::new(favourites),
                cart: Mutex::new(cart),
            }),
        }
    }

    /// Get a reference to the catalog data client.
    #[must_use]
    pub fn client(&self) -> &CatalogClient {
        &self.inner.client
    }

    /// Get a reference to the asset URL builder.
    #[must_use]
    pub fn assets(&self) -> &AssetUrls {
        &self.inner.assets
    }

    /// Lock the favourites store.
    pub fn favourites(&self) -> MutexGuard<'_, FavouritesStore> {
        self.inner
            .favourites
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the cart store.
    pub fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.inner.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch the variant `slug` and build its description view.
    ///
    /// # Errors
    ///
    /// Returns an error if the product cannot be fetched or does not exist.
    #[instrument(skip(self, token), fields(category = %category, slug = %slug))]
    pub async fn product_view(
        &self,
        category: ProductCategory,
        slug: &str,
        token: &CancellationToken,
    ) -> Result<ProductDescription> {
        let product = self
            .inner
            .client
            .product_cancellable(category, slug, token)
            .await?;
        Ok(ProductDescription::new(product, category, Some(slug)))
    }

    /// Render the product page for `view` against the current stores.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_product_page(&self, view: &ProductDescription) -> Result<String> {
        let in_cart = view.is_in_cart(&self.cart());
        let in_favourites = view.is_in_favourites(&self.favourites());
        let page = ProductPageTemplate::new(view, self.assets(), in_cart, in_favourites)?;
        Ok(page.render()?)
    }

    /// Render only the breadcrumb trail of the product page for `view`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_breadcrumbs(&self, view: &ProductDescription) -> Result<String> {
        let trail = product_trail(view.category(), &view.product().name);
        Ok(BreadcrumbsTemplate::new(&trail, self.assets()).render()?)
    }

    /// Render the not-found page.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_not_found(&self) -> Result<String> {
        Ok(NotFoundTemplate::new(self.assets()).render()?)
    }
}
