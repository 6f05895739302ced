//! Cart commands.

use phone_catalog_core::{Price, ProductCategory, ProductIdentity};
use phone_catalog_storefront::error::CatalogError;
use phone_catalog_storefront::state::AppState;
use tokio_util::sync::CancellationToken;

use super::product_line;

/// Print every cart line followed by the totals.
pub fn list(state: &AppState) {
    let cart = state.cart();
    for entry in cart.entries() {
        let line_total = entry
            .line_total()
            .map(|total| Price::usd(total).to_string())
            .unwrap_or_default();
        println!(
            "{}\tx{}\t{line_total}",
            product_line(&entry.product),
            entry.quantity
        );
    }
    println!(
        "Total: {} item(s), {}",
        cart.total_quantity(),
        Price::usd(cart.total_price())
    );
}

/// Fetch `slug` and add it to the cart.
///
/// # Errors
///
/// Returns an error if the product cannot be fetched or the cart cannot be saved.
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

    let mut cart = state.cart();
    if cart.contains(&product) {
        tracing::info!(slug, "Already in cart");
    }
    cart.add(product)?;
    println!("{} item(s) in cart", cart.total_quantity());
    Ok(())
}

/// Remove the line named by `identity`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn remove(state: &AppState, identity: &str) -> Result<(), CatalogError> {
    let mut cart = state.cart();
    cart.remove(&ProductIdentity::from(identity))?;
    println!("{} item(s) in cart", cart.total_quantity());
    Ok(())
}

/// Raise the quantity of the line named by `identity`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn increment(state: &AppState, identity: &str) -> Result<(), CatalogError> {
    let mut cart = state.cart();
    cart.increment(&ProductIdentity::from(identity))?;
    println!("{} item(s) in cart", cart.total_quantity());
    Ok(())
}

/// Lower the quantity of the line named by `identity`.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn decrement(state: &AppState, identity: &str) -> Result<(), CatalogError> {
    let mut cart = state.cart();
    cart.decrement(&ProductIdentity::from(identity))?;
    println!("{} item(s) in cart", cart.total_quantity());
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn clear(state: &AppState) -> Result<(), CatalogError> {
    state.cart().clear()?;
    println!("Cart cleared");
    Ok(())
}
