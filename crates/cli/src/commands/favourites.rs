//! Favourites commands.

use phone_catalog_core::{ProductCategory, ProductIdentity};
use phone_catalog_storefront::error::CatalogError;
use phone_catalog_storefront::state::AppState;
use tokio_util::sync::CancellationToken;

use super::product_line;

/// Print every favourite.
pub fn list(state: &AppState) {
    let favourites = state.favourites();
    for entry in favourites.entries() {
        println!("{}", product_line(&entry.product));
    }
    println!("{} favourite(s)", favourites.count());
}

/// Fetch `slug` and add it to favourites.
///
/// # Errors
///
/// Returns an error if the product cannot be fetched or the list cannot be saved.
pub async fn add(
    state: &AppState,
    category: ProductCategory,
    slug: &str,
    token: &CancellationToken,
) -> Result<(), CatalogError> {
    let product = state
        .client()
        .product_cancellable(category, slug, token)
        .await?;

    let mut favourites = state.favourites();
    if favourites.contains(&product) {
        tracing::info!(slug, "Already a favourite");
    } else {
        tracing::info!(slug, name = %product.name, "Adding to favourites");
    }
    favourites.add(product)?;
    println!("{} favourite(s)", favourites.count());
    Ok(())
}

/// Remove the favourite named by `identity`.
///
/// # Errors
///
/// Returns an error if the list cannot be saved.
pub fn remove(state: &AppState, identity: &str) -> Result<(), CatalogError> {
    let identity = ProductIdentity::from(identity);
    let mut favourites = state.favourites();
    let before = favourites.count();
    favourites.remove(&identity)?;
    if favourites.count() == before {
        tracing::info!(identity = %identity, "Not a favourite");
    }
    println!("{} favourite(s)", favourites.count());
    Ok(())
}
