//! Persisted cart and favourites stores.
//!
//! Each store owns its entry list and a handle to the storage it was loaded
//! from. Every action runs through the core reducer and the resulting list is
//! written back under the store's key before the call returns.
//!
//! # Startup
//!
//! A store is seeded from storage when constructed. A missing key gives an
//! empty store; so does a malformed value, which is logged and otherwise
//! ignored. A bad value therefore never prevents the application from
//! starting, and is overwritten by the next action.

use std::sync::Arc;

use phone_catalog_core::store::{self as reducer, StoreAction};
use phone_catalog_core::{Entry, Product, ProductIdentity};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::add_breadcrumb;
use crate::storage::{KeyValueStorage, StorageError};

/// Storage key of the favourites list.
pub const FAVOURITES_KEY: &str = "favourite";
/// Storage key of the cart.
pub const CART_KEY: &str = "cart";

/// Entry list persisted under one storage key.
pub struct EntryStore {
    key: &'static str,
    entries: Vec<Entry>,
    storage: Arc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for EntryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryStore")
            .field("key", &self.key)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl EntryStore {
    /// Load the list stored under `key`, falling back to empty.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStorage>, key: &'static str) -> Self {
        let entries = match storage.get(key) {
            Ok(Some(raw)) => decode_entries(key, &raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored entries, starting empty");
                Vec::new()
            }
        };

        debug!(key, count = entries.len(), "Store loaded");

        Self {
            key,
            entries,
            storage,
        }
    }

    /// Apply `action` and persist the resulting list.
    ///
    /// The in-memory list is updated even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written to storage.
    pub fn dispatch(&mut self, action: StoreAction) -> Result<(), StorageError> {
        let name = action.name();
        let identity = action.identity();

        self.entries = reducer::reduce(&self.entries, action);

        debug!(
            key = self.key,
            action = name,
            identity = identity.as_ref().map_or("", ProductIdentity::as_str),
            count = self.entries.len(),
            "Store updated"
        );
        match &identity {
            Some(id) => add_breadcrumb(self.key, name, Some(&[("identity", id.as_str())])),
            None => add_breadcrumb(self.key, name, None),
        }

        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.entries)?;
        self.storage.set(self.key, &json)
    }

    /// Current entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds the product named by `identity`.
    #[must_use]
    pub fn contains(&self, identity: &ProductIdentity) -> bool {
        reducer::contains(&self.entries, identity)
    }

    /// Returns `true` if the store holds `product`.
    #[must_use]
    pub fn contains_product(&self, product: &Product) -> bool {
        product
            .identity()
            .is_some_and(|identity| self.contains(&identity))
    }
}

fn decode_entries(key: &str, raw: &str) -> Vec<Entry> {
    match serde_json::from_str::<Vec<Entry>>(raw) {
        Ok(entries) => reducer::normalize(entries),
        Err(e) => {
            warn!(
                key,
                error = %e,
                "Invalid JSON data in storage, starting with an empty list"
            );
            Vec::new()
        }
    }
}

// =============================================================================
// FavouritesStore
// =============================================================================

/// The shopper's favourites list.
#[derive(Debug)]
pub struct FavouritesStore {
    inner: EntryStore,
}

impl FavouritesStore {
    /// Load favourites from `storage`.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            inner: EntryStore::load(storage, FAVOURITES_KEY),
        }
    }

    /// Add `product` unless it is already a favourite.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be persisted.
    pub fn add(&mut self, product: Product) -> Result<(), StorageError> {
        self.inner.dispatch(StoreAction::Add(product))
    }

    /// Remove the favourite named by `identity`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be persisted.
    pub fn remove(&mut self, identity: &ProductIdentity) -> Result<(), StorageError> {
        self.inner.dispatch(StoreAction::Remove(identity.clone()))
    }

    /// Add `product` if absent, remove it if present. Returns whether it is now a favourite.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be persisted.
    pub fn toggle(&mut self, product: Product) -> Result<bool, StorageError> {
        match product.identity() {
            Some(identity) if self.inner.contains(&identity) => {
                self.remove(&identity)?;
                Ok(false)
            }
            Some(_) => {
                self.add(product)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Current favourites, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        self.inner.entries()
    }

    /// Number of favourites.
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Returns `true` if `product` is a favourite.
    #[must_use]
    pub fn contains(&self, product: &Product) -> bool {
        self.inner.contains_product(product)
    }
}

// =============================================================================
// CartStore
// =============================================================================

/// The shopper's cart.
#[derive(Debug)]
pub struct CartStore {
    inner: EntryStore,
}

impl CartStore {
    /// Load the cart from `storage`.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            inner: EntryStore::load(storage, CART_KEY),
        }
    }

    /// Add `product` with quantity 1 unless it is already in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub fn add(&mut self, product: Product) -> Result<(), StorageError> {
        self.inner.dispatch(StoreAction::Add(product))
    }

    /// Remove the line named by `identity`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub fn remove(&mut self, identity: &ProductIdentity) -> Result<(), StorageError> {
        self.inner.dispatch(StoreAction::Remove(identity.clone()))
    }

    /// Raise the quantity of the line named by `identity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub fn increment(&mut self, identity: &ProductIdentity) -> Result<(), StorageError> {
        self.inner.dispatch(StoreAction::Increment(identity.clone()))
    }

    /// Lower the quantity of the line named by `identity`, never below 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub fn decrement(&mut self, identity: &ProductIdentity) -> Result<(), StorageError> {
        self.inner.dispatch(StoreAction::Decrement(identity.clone()))
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.inner.dispatch(StoreAction::Clear)
    }

    /// Current lines, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        self.inner.entries()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// Sum of line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        reducer::total_quantity(self.inner.entries())
    }

    /// Sum of line totals.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        reducer::total_price(self.inner.entries())
    }

    /// Returns `true` if `product` is in the cart.
    #[must_use]
    pub fn contains(&self, product: &Product) -> bool {
        self.inner.contains_product(product)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use phone_catalog_core::RawId;

    use super::*;
    use crate::storage::MemoryStorage;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: Some(RawId::from(id)),
            name: id.to_string(),
            price_discount: Some(Decimal::from(price)),
            ..Product::default()
        }
    }

    fn memory() -> Arc<dyn KeyValueStorage> {
        Arc::new(MemoryStorage::new())
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let favourites = FavouritesStore::load(memory());
        assert_eq!(favourites.count(), 0);
    }

    #[test]
    fn test_add_twice_counts_once() {
        let mut favourites = FavouritesStore::load(memory());
        favourites.add(product("a", 1)).unwrap();
        favourites.add(product("a", 1)).unwrap();
        assert_eq!(favourites.count(), 1);
    }

    #[test]
    fn test_remove_absent_keeps_state() {
        let mut favourites = FavouritesStore::load(memory());
        favourites.add(product("a", 1)).unwrap();
        let before = favourites.entries().to_vec();

        favourites.remove(&ProductIdentity::from("missing")).unwrap();
        assert_eq!(favourites.entries(), before.as_slice());
    }

    #[test]
    fn test_every_action_is_persisted() {
        let storage = memory();
        let mut favourites = FavouritesStore::load(Arc::clone(&storage));

        favourites.add(product("a", 1)).unwrap();
        let stored: Vec<Entry> =
            serde_json::from_str(&storage.get(FAVOURITES_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), 1);

        favourites.remove(&ProductIdentity::from("a")).unwrap();
        assert_eq!(storage.get(FAVOURITES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_reload_reproduces_list() {
        let storage = memory();
        let mut cart = CartStore::load(Arc::clone(&storage));
        cart.add(product("b", 20)).unwrap();
        cart.add(product("a", 10)).unwrap();
        cart.increment(&ProductIdentity::from("b")).unwrap();

        let reloaded = CartStore::load(storage);
        assert_eq!(reloaded.entries(), cart.entries());
    }

    #[test]
    fn test_corrupted_value_loads_empty() {
        let storage = memory();
        storage.set(FAVOURITES_KEY, "{not json").unwrap();

        let mut favourites = FavouritesStore::load(Arc::clone(&storage));
        assert_eq!(favourites.count(), 0);

        // The next action overwrites the bad value.
        favourites.add(product("a", 1)).unwrap();
        let reloaded = FavouritesStore::load(storage);
        assert_eq!(reloaded.count(), 1);
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let storage = memory();
        storage.set(CART_KEY, r#"{"product": 1}"#).unwrap();
        assert_eq!(CartStore::load(storage).count(), 0);
    }

    #[test]
    fn test_stores_use_separate_keys() {
        let storage = memory();
        let mut favourites = FavouritesStore::load(Arc::clone(&storage));
        let cart = CartStore::load(Arc::clone(&storage));

        favourites.add(product("a", 1)).unwrap();
        assert_eq!(cart.count(), 0);
        assert_eq!(CartStore::load(storage).count(), 0);
    }

    #[test]
    fn test_toggle_favourite() {
        let mut favourites = FavouritesStore::load(memory());
        assert!(favourites.toggle(product("a", 1)).unwrap());
        assert!(favourites.contains(&product("a", 1)));
        assert!(!favourites.toggle(product("a", 1)).unwrap());
        assert_eq!(favourites.count(), 0);
    }

    #[test]
    fn test_cart_quantities_and_totals() {
        let mut cart = CartStore::load(memory());
        cart.add(product("a", 100)).unwrap();
        cart.add(product("b", 25)).unwrap();
        cart.increment(&ProductIdentity::from("b")).unwrap();
        cart.increment(&ProductIdentity::from("b")).unwrap();
        cart.decrement(&ProductIdentity::from("a")).unwrap();

        assert_eq!(cart.count(), 2);
        assert_eq!(cart.entries()[0].quantity, 1);
        assert_eq!(cart.total_quantity(), 4);
        assert_eq!(cart.total_price(), Decimal::from(175));

        cart.clear().unwrap();
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_original_storage_format_loads() {
        // Entries written by the browser app: numeric prices, text paragraphs.
        let storage = memory();
        storage
            .set(
                FAVOURITES_KEY,
                r#"[{"product":{"id":3,"itemId":"apple-iphone-7-32gb-black","name":"Apple iPhone 7 32GB Black","price":375,"fullPrice":400},"quantity":1}]"#,
            )
            .unwrap();

        let favourites = FavouritesStore::load(storage);
        assert_eq!(favourites.count(), 1);
        assert_eq!(
            favourites.entries()[0].identity().unwrap().as_str(),
            "apple-iphone-7-32gb-black"
        );
    }

    #[test]
    fn test_entries_with_null_fields_load() {
        let storage = memory();
        storage
            .set(
                CART_KEY,
                r#"[{"product":{"id":"apple-iphone-7-32gb-black","name":"Apple iPhone 7 32GB Black","cell":null,"images":null,"category":"watches","price":375},"quantity":2},{"product":{"id":"apple-iphone-8-64gb-gold","description":[{"title":"Camera"}]},"quantity":1}]"#,
            )
            .unwrap();

        let cart = CartStore::load(storage);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_price(), Decimal::from(750));
    }
}
