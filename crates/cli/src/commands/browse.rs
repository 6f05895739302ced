//! Catalog browsing commands.

use phone_catalog_core::ProductCategory;
use phone_catalog_storefront::client::ClientError;
use phone_catalog_storefront::error::CatalogError;
use phone_catalog_storefront::state::AppState;
use phone_catalog_storefront::views::product_description::capacity_label;
use tokio_util::sync::CancellationToken;

use super::product_line;

/// List the catalog summary, or the full records of `category`.
///
/// # Errors
///
/// Returns an error if the collection cannot be fetched.
pub async fn products(
    state: &AppState,
    category: Option<ProductCategory>,
) -> Result<(), CatalogError> {
    let products = match category {
        Some(category) => state.client().collection(category).await?,
        None => state.client().products().await?,
    };

    for product in &products {
        println!("{}", product_line(product));
    }
    tracing::info!(count = products.len(), "Products listed");
    Ok(())
}

/// Render the product page, or only its breadcrumb trail.
///
/// An unknown slug prints the not-found page and still fails.
///
/// # Errors
///
/// Returns an error if the product cannot be fetched or rendered.
pub async fn show(
    state: &AppState,
    category: ProductCategory,
    slug: &str,
    breadcrumbs_only: bool,
    token: &CancellationToken,
) -> Result<(), CatalogError> {
    let view = match state.product_view(category, slug, token).await {
        Ok(view) => view,
        Err(e @ CatalogError::Client(ClientError::NotFound(_))) => {
            println!("{}", state.render_not_found()?);
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    let html = if breadcrumbs_only {
        state.render_breadcrumbs(&view)?
    } else {
        state.render_product_page(&view)?
    };
    println!("{html}");
    Ok(())
}

/// Print the route of every color and capacity sibling.
///
/// # Errors
///
/// Returns an error if the product cannot be fetched.
pub async fn links(
    state: &AppState,
    category: ProductCategory,
    slug: &str,
    token: &CancellationToken,
) -> Result<(), CatalogError> {
    let view = state.product_view(category, slug, token).await?;
    let product = view.product();

    for color in product.colors_available.iter().flatten() {
        let route = view.color_link(color).unwrap_or_else(|| "-".to_string());
        println!("color\t{color}\t{route}");
    }
    for capacity in &product.capacity_available {
        let route = view.capacity_link(capacity).unwrap_or_else(|| "-".to_string());
        println!("capacity\t{}\t{route}", capacity_label(capacity));
    }
    Ok(())
}
