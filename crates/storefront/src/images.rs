//! Image URL construction.
//!
//! Catalog records carry image paths relative to the site root
//! (`img/phones/apple-iphone-11/black/00.webp`). In development they are
//! served by the local origin and stay root-relative; in production they
//! are prefixed with the published site's origin.

use phone_catalog_core::Product;

use crate::config::CatalogConfig;

/// Shown wherever a product has no usable image, and on the not-found page.
pub const PLACEHOLDER_IMAGE: &str = "img/page-not-found.png";
/// Breadcrumb home icon.
pub const HOME_ICON: &str = "img/Home.png";
/// Breadcrumb separator arrow.
pub const NEXT_ICON: &str = "img/btn-next.png";
/// Favourite button, not yet a favourite.
pub const FAVOURITE_ICON: &str = "img/favourite-icon.png";
/// Favourite button, already a favourite.
pub const FAVOURITE_ICON_SELECTED: &str = "img/favourite-icon-selected.png";

/// Builds absolute or root-relative asset URLs for the current build mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetUrls {
    prefix: String,
}

impl AssetUrls {
    /// Asset URLs under `prefix`. An empty prefix yields root-relative URLs.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim_end_matches('/').to_string(),
        }
    }

    /// Asset URLs for the config's build mode.
    #[must_use]
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.asset_prefix())
    }

    /// URL of `path`, which may or may not start with `/`.
    ///
    /// ```
    /// use phone_catalog_storefront::images::AssetUrls;
    ///
    /// assert_eq!(AssetUrls::default().url("img/Home.png"), "/img/Home.png");
    /// assert_eq!(
    ///     AssetUrls::new("https://example.com/site/").url("/img/Home.png"),
    ///     "https://example.com/site/img/Home.png",
    /// );
    /// ```
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.prefix, path.trim_start_matches('/'))
    }

    /// Main image of a product view.
    ///
    /// The product's legacy single `image` wins, then the image the viewer
    /// selected, then [`PLACEHOLDER_IMAGE`].
    #[must_use]
    pub fn image_src(&self, product: &Product, selected: Option<&str>) -> String {
        let path = product
            .image
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| selected.filter(|p| !p.is_empty()))
            .unwrap_or(PLACEHOLDER_IMAGE);
        self.url(path)
    }
}
