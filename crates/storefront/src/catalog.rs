//! Typed access to the catalog collections.
//!
//! Collections are plain JSON arrays:
//! - `/api/products.json` - summary records for every category
//! - `/api/phones.json`, `/api/tablets.json`, `/api/accessories.json` - full
//!   records, one per color/capacity variant

use phone_catalog_core::{Product, ProductCategory, ProductIdentity};
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::client::{CatalogClient, ClientError};

/// Path of the summary collection.
pub const PRODUCTS_PATH: &str = "/api/products.json";

impl CatalogClient {
    /// Summary records for the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn products(&self) -> Result<Vec<Product>, ClientError> {
        self.get(PRODUCTS_PATH).await
    }

    /// Summary records of one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn products_in(&self, category: ProductCategory) -> Result<Vec<Product>, ClientError> {
        let products: Vec<Product> = self.products().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.category == Some(category))
            .collect())
    }

    /// Full records of one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn collection(&self, category: ProductCategory) -> Result<Vec<Product>, ClientError> {
        self.get(category.collection_path()).await
    }

    /// Full record of the variant whose identity is `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the collection has no such
    /// variant, or the underlying request error.
    #[instrument(skip(self), fields(category = %category, slug = %slug))]
    pub async fn product(
        &self,
        category: ProductCategory,
        slug: &str,
    ) -> Result<Product, ClientError> {
        let products = self.collection(category).await?;
        find_variant(products, category, slug)
    }

    /// Like [`product`](Self::product), abandoned as soon as `token` fires.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Cancelled`] if the token fires first, otherwise
    /// the same errors as [`product`](Self::product).
    pub async fn product_cancellable(
        &self,
        category: ProductCategory,
        slug: &str,
        token: &CancellationToken,
    ) -> Result<Product, ClientError> {
        let products = self
            .get_cancellable(category.collection_path(), token)
            .await?;
        find_variant(products, category, slug)
    }
}

fn find_variant(
    products: Vec<Product>,
    category: ProductCategory,
    slug: &str,
) -> Result<Product, ClientError> {
    let wanted = ProductIdentity::from(slug);
    products
        .into_iter()
        .find(|p| p.has_identity(&wanted))
        .ok_or_else(|| ClientError::NotFound(category.product_path(slug)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use phone_catalog_core::RawId;

    use super::*;

    fn variant(id: &str) -> Product {
        Product {
            id: Some(RawId::from(id)),
            name: id.to_string(),
            ..Product::default()
        }
    }

    #[test]
    fn test_find_variant() {
        let products = vec![variant("apple-ipad-air-64gb-gold"), variant("apple-ipad-air-256gb-gold")];
        let found = find_variant(products, ProductCategory::Tablets, "apple-ipad-air-256gb-gold").unwrap();
        assert_eq!(found.name, "apple-ipad-air-256gb-gold");
    }

    #[test]
    fn test_find_variant_missing() {
        let err = find_variant(vec![], ProductCategory::Tablets, "apple-ipad-air-1tb-gold").unwrap_err();
        assert_eq!(err.to_string(), "Not found: /tablets/apple-ipad-air-1tb-gold");
    }
}
