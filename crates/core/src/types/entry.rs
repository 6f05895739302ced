//! Cart and favourites entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductIdentity;
use super::product::Product;

/// A product held in the cart or the favourites list.
///
/// Serialized as `{"product": ..., "quantity": n}`, which is also the
/// persisted storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl Entry {
    /// A fresh entry with quantity 1.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Identity of the held product.
    #[must_use]
    pub fn identity(&self) -> Option<ProductIdentity> {
        self.product.identity()
    }

    /// Returns `true` if this entry holds the product named by `identity`.
    #[must_use]
    pub fn matches(&self, identity: &ProductIdentity) -> bool {
        self.product.has_identity(identity)
    }

    /// Unit price times quantity, if the product is priced.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.product
            .unit_price()
            .map(|price| price * Decimal::from(self.quantity))
    }
}
