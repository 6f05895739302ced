//! Command implementations.
//!
//! Command output is written to stdout; logs go to stderr.

#![allow(clippy::print_stdout)]

pub mod browse;
pub mod cart;
pub mod favourites;

use phone_catalog_core::{Product, ProductIdentity};

/// One tab-separated listing line: identity, name, price.
fn product_line(product: &Product) -> String {
    let identity = product
        .identity()
        .map(ProductIdentity::into_inner)
        .unwrap_or_default();
    let price = product
        .price()
        .map(|price| price.to_string())
        .unwrap_or_default();
    format!("{identity}\t{}\t{price}", product.name)
}
