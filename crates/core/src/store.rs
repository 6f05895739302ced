//! Cart and favourites state transitions.
//!
//! Both lists share one reducer: a [`StoreAction`] is applied to the current
//! entries and a new list is returned. The input is never modified, which
//! keeps every transition testable without storage or rendering.
//!
//! # Invariants
//!
//! - At most one entry per [`ProductIdentity`].
//! - Every entry has `quantity >= 1`.
//! - Entry order is insertion order.
//!
//! # Example
//!
//! ```rust
//! use phone_catalog_core::{Product, RawId, StoreAction, reduce};
//!
//! let phone = Product {
//!     id: Some(RawId::from("apple-iphone-11-64gb-black")),
//!     ..Product::default()
//! };
//!
//! let entries = reduce(&[], StoreAction::Add(phone.clone()));
//! let entries = reduce(&entries, StoreAction::Add(phone));
//! assert_eq!(entries.len(), 1);
//! ```

use rust_decimal::Decimal;

use crate::types::{Entry, Product, ProductIdentity};

/// A single user-initiated change to a cart or favourites list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Append the product with quantity 1 unless it is already present.
    Add(Product),
    /// Drop the entry with this identity.
    Remove(ProductIdentity),
    /// Raise the entry's quantity by one.
    Increment(ProductIdentity),
    /// Lower the entry's quantity by one, stopping at 1.
    Decrement(ProductIdentity),
    /// Drop every entry.
    Clear,
}

impl StoreAction {
    /// Short name for logs and breadcrumbs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::Increment(_) => "increment",
            Self::Decrement(_) => "decrement",
            Self::Clear => "clear",
        }
    }

    /// Identity the action targets, if any.
    #[must_use]
    pub fn identity(&self) -> Option<ProductIdentity> {
        match self {
            Self::Add(product) => product.identity(),
            Self::Remove(id) | Self::Increment(id) | Self::Decrement(id) => Some(id.clone()),
            Self::Clear => None,
        }
    }
}

/// Apply `action` to `entries` and return the resulting list.
///
/// Actions that would break an invariant (duplicate add, unknown identity,
/// product without identity) return an unchanged copy.
#[must_use]
pub fn reduce(entries: &[Entry], action: StoreAction) -> Vec<Entry> {
    match action {
        StoreAction::Add(product) => {
            let Some(identity) = product.identity() else {
                return entries.to_vec();
            };
            if contains(entries, &identity) {
                return entries.to_vec();
            }
            let mut next = entries.to_vec();
            next.push(Entry::new(product));
            next
        }
        StoreAction::Remove(identity) => entries
            .iter()
            .filter(|entry| !entry.matches(&identity))
            .cloned()
            .collect(),
        StoreAction::Increment(identity) => map_quantity(entries, &identity, |q| q.saturating_add(1)),
        StoreAction::Decrement(identity) => {
            map_quantity(entries, &identity, |q| q.saturating_sub(1).max(1))
        }
        StoreAction::Clear => Vec::new(),
    }
}

fn map_quantity(
    entries: &[Entry],
    identity: &ProductIdentity,
    f: impl Fn(u32) -> u32,
) -> Vec<Entry> {
    entries
        .iter()
        .map(|entry| {
            if entry.matches(identity) {
                Entry {
                    product: entry.product.clone(),
                    quantity: f(entry.quantity),
                }
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Restore the invariants on a list that did not come from [`reduce`].
///
/// Entries without identity and later duplicates are dropped; zero quantities
/// are raised to 1. Order of the surviving entries is kept.
#[must_use]
pub fn normalize(entries: Vec<Entry>) -> Vec<Entry> {
    let mut seen = Vec::with_capacity(entries.len());
    let mut kept = Vec::with_capacity(entries.len());
    for mut entry in entries {
        let Some(identity) = entry.identity() else {
            continue;
        };
        if seen.contains(&identity) {
            continue;
        }
        seen.push(identity);
        entry.quantity = entry.quantity.max(1);
        kept.push(entry);
    }
    kept
}

/// Returns `true` if any entry holds the product named by `identity`.
#[must_use]
pub fn contains(entries: &[Entry], identity: &ProductIdentity) -> bool {
    entries.iter().any(|entry| entry.matches(identity))
}

/// Sum of all entry quantities.
#[must_use]
pub fn total_quantity(entries: &[Entry]) -> u32 {
    entries
        .iter()
        .fold(0_u32, |sum, entry| sum.saturating_add(entry.quantity))
}

/// Sum of all priced line totals. Unpriced products contribute nothing.
#[must_use]
pub fn total_price(entries: &[Entry]) -> Decimal {
    entries.iter().filter_map(Entry::line_total).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::types::RawId;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: Some(RawId::from(id)),
            name: id.to_string(),
            price_discount: Some(Decimal::from(price)),
            ..Product::default()
        }
    }

    fn identity(id: &str) -> ProductIdentity {
        ProductIdentity::from(id)
    }

    #[test]
    fn test_add_appends_with_quantity_one() {
        let entries = reduce(&[], StoreAction::Add(product("a", 10)));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity, 1);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut entries = Vec::new();
        for id in ["a", "b", "a", "c", "b", "a"] {
            let before = entries.len();
            let already = contains(&entries, &identity(id));
            entries = reduce(&entries, StoreAction::Add(product(id, 1)));
            let expected = if already { before } else { before + 1 };
            assert_eq!(entries.len(), expected, "adding {id}");
        }
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_add_matches_numeric_and_text_ids() {
        let numeric = Product {
            id: Some(RawId::Number(7)),
            ..Product::default()
        };
        let textual = Product {
            id: Some(RawId::from("7")),
            ..Product::default()
        };
        let entries = reduce(&[], StoreAction::Add(numeric));
        let entries = reduce(&entries, StoreAction::Add(textual));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_add_uses_item_id_over_id() {
        let summary = Product {
            id: Some(RawId::Number(1)),
            item_id: Some(RawId::from("apple-iphone-7-32gb-black")),
            ..Product::default()
        };
        let full = product("apple-iphone-7-32gb-black", 400);
        let entries = reduce(&[], StoreAction::Add(summary));
        let entries = reduce(&entries, StoreAction::Add(full));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_add_without_identity_is_ignored() {
        let entries = reduce(&[], StoreAction::Add(Product::default()));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut entries = Vec::new();
        for id in ["c", "a", "b"] {
            entries = reduce(&entries, StoreAction::Add(product(id, 1)));
        }
        let order: Vec<_> = entries
            .iter()
            .map(|e| e.identity().unwrap().into_inner())
            .collect();
        assert_eq!(order, ["c", "a", "b"]);
    }

    #[test]
    fn test_remove_present() {
        let entries = reduce(&[], StoreAction::Add(product("a", 1)));
        let entries = reduce(&entries, StoreAction::Add(product("b", 1)));
        let entries = reduce(&entries, StoreAction::Remove(identity("a")));
        assert_eq!(entries.len(), 1);
        assert!(contains(&entries, &identity("b")));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let entries = reduce(&[], StoreAction::Add(product("a", 1)));
        let after = reduce(&entries, StoreAction::Remove(identity("zzz")));
        assert_eq!(after, entries);
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let entries = reduce(&[], StoreAction::Add(product("a", 1)));
        let snapshot = entries.clone();
        let _ = reduce(&entries, StoreAction::Clear);
        let _ = reduce(&entries, StoreAction::Increment(identity("a")));
        assert_eq!(entries, snapshot);
    }

    #[test]
    fn test_increment_and_decrement() {
        let entries = reduce(&[], StoreAction::Add(product("a", 1)));
        let entries = reduce(&entries, StoreAction::Increment(identity("a")));
        let entries = reduce(&entries, StoreAction::Increment(identity("a")));
        assert_eq!(entries[0].quantity, 3);

        let entries = reduce(&entries, StoreAction::Decrement(identity("a")));
        assert_eq!(entries[0].quantity, 2);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let entries = reduce(&[], StoreAction::Add(product("a", 1)));
        let entries = reduce(&entries, StoreAction::Decrement(identity("a")));
        let entries = reduce(&entries, StoreAction::Decrement(identity("a")));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity, 1);
    }

    #[test]
    fn test_clear() {
        let entries = reduce(&[], StoreAction::Add(product("a", 1)));
        assert!(reduce(&entries, StoreAction::Clear).is_empty());
    }

    #[test]
    fn test_totals() {
        let entries = reduce(&[], StoreAction::Add(product("a", 100)));
        let entries = reduce(&entries, StoreAction::Add(product("b", 50)));
        let entries = reduce(&entries, StoreAction::Increment(identity("b")));

        assert_eq!(total_quantity(&entries), 3);
        assert_eq!(total_price(&entries), Decimal::from(200));
    }

    #[test]
    fn test_normalize_repairs_foreign_lists() {
        let entries = vec![
            Entry {
                product: product("a", 1),
                quantity: 0,
            },
            Entry::new(Product::default()),
            Entry::new(product("b", 1)),
            Entry {
                product: product("a", 1),
                quantity: 5,
            },
        ];
        let repaired = normalize(entries);
        assert_eq!(repaired.len(), 2);
        assert_eq!(repaired[0].quantity, 1);
        assert!(repaired[1].matches(&identity("b")));
    }

    #[test]
    fn test_action_metadata() {
        assert_eq!(StoreAction::Clear.name(), "clear");
        assert_eq!(StoreAction::Clear.identity(), None);
        assert_eq!(
            StoreAction::Add(product("a", 1)).identity(),
            Some(identity("a"))
        );
    }
}
