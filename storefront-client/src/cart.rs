//! Shopping cart engine
//!
//! One cart per browsing session, persisted to a [`CartStore`] under a
//! fixed key so it survives reloads. Every mutation writes through; the UI
//! calls [`CartManager::restore`] whenever the customer returns to the
//! storefront root, which also absorbs clears done by the checkout flow.
//!
//! Storage failures are deliberately non-fatal: a cart that cannot be read
//! or written degrades to an empty cart instead of breaking the page.

use std::sync::Arc;

use thiserror::Error;

use crate::checkout::{self, CheckoutMessage};
use crate::store::CartStore;
use shared::models::{CartItem, MenuItem, Settings};

/// Fixed storage key for the serialized cart
pub const CART_STORAGE_KEY: &str = "cart";

/// Cart errors surfaced to the UI
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Quantity must be a positive integer
    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    /// Unavailable items can be viewed but not ordered
    #[error("'{0}' is currently unavailable")]
    ItemUnavailable(String),

    /// Checkout requires at least one line; callers redirect home on this
    #[error("Cart is empty")]
    EmptyCart,
}

/// The cart engine
pub struct CartManager {
    items: Vec<CartItem>,
    store: Arc<dyn CartStore>,
}

impl CartManager {
    /// Create a manager bound to a store and load whatever cart the
    /// session left behind
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        let mut manager = Self {
            items: Vec::new(),
            store,
        };
        manager.restore();
        manager
    }

    /// Current cart lines in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total unit count across all lines (the cart badge)
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Subtotal in minor currency units
    pub fn subtotal(&self) -> i64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Add a line, or replace the line at `edit_index` in place when the
    /// index is valid (an invalid index appends, matching the detail-flow
    /// contract)
    pub fn add_or_update(
        &mut self,
        item: MenuItem,
        quantity: u32,
        note: Option<String>,
        edit_index: Option<usize>,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        if !item.is_available {
            return Err(CartError::ItemUnavailable(item.name));
        }

        let entry = CartItem {
            menu_item: item,
            quantity,
            note: note.filter(|n| !n.is_empty()),
        };

        match edit_index {
            Some(index) if index < self.items.len() => self.items[index] = entry,
            _ => self.items.push(entry),
        }

        self.persist();
        Ok(())
    }

    /// Remove the line at `index`; out-of-range indices are a silent no-op
    /// (the UI only ever hands us indices it rendered)
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
            self.persist();
        }
    }

    /// Empty the cart and drop the persisted record. Called exactly once,
    /// after the checkout link has been handed to the host environment.
    pub fn clear(&mut self) {
        self.items.clear();
        if let Err(e) = self.store.remove(CART_STORAGE_KEY) {
            tracing::warn!("Failed to clear persisted cart: {}", e);
        }
    }

    /// Reload the cart from the store. Missing or malformed data yields an
    /// empty cart, never an error.
    pub fn restore(&mut self) {
        self.items = match self.store.get(CART_STORAGE_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!("Discarding corrupt persisted cart: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read persisted cart: {}", e);
                Vec::new()
            }
        };
    }

    /// Compose the order message and deep link for the current cart
    ///
    /// Callers must treat [`CartError::EmptyCart`] as "redirect to the
    /// storefront root"; opening the link and calling [`Self::clear`]
    /// afterwards are theirs too.
    pub fn checkout(&self, settings: &Settings) -> Result<CheckoutMessage, CartError> {
        if self.items.is_empty() {
            return Err(CartError::EmptyCart);
        }
        Ok(checkout::compose(&self.items, settings))
    }

    fn persist(&self) {
        let bytes = match serde_json::to_vec(&self.items) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to serialize cart: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(CART_STORAGE_KEY, &bytes) {
            tracing::warn!("Failed to persist cart: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};

    fn item(name: &str, price: i64) -> MenuItem {
        MenuItem {
            id: Some(format!("menu_item:{}", name.to_lowercase().replace(' ', "_"))),
            category_id: "category:test".to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            image_url: None,
            is_available: true,
            is_hidden: false,
        }
    }

    fn manager() -> CartManager {
        CartManager::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_subtotal_is_integer_minor_units() {
        let mut cart = manager();
        cart.add_or_update(item("Margherita Pizza", 1299), 2, None, None)
            .unwrap();
        cart.add_or_update(item("Caesar Salad", 899), 1, None, None)
            .unwrap();

        assert_eq!(cart.subtotal(), 1299 * 2 + 899);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut cart = manager();
        assert_eq!(
            cart.add_or_update(item("Pizza", 1299), 0, None, None),
            Err(CartError::InvalidQuantity)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unavailable_item_rejected() {
        let mut cart = manager();
        let mut sold_out = item("Twennie Deluxe", 1499);
        sold_out.is_available = false;

        assert!(matches!(
            cart.add_or_update(sold_out, 1, None, None),
            Err(CartError::ItemUnavailable(_))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_edit_changes_only_the_addressed_line() {
        let mut cart = manager();
        cart.add_or_update(item("A", 100), 1, Some("first".into()), None)
            .unwrap();
        cart.add_or_update(item("B", 200), 2, None, None).unwrap();
        cart.add_or_update(item("C", 300), 3, None, None).unwrap();

        cart.add_or_update(item("B2", 250), 5, Some("changed".into()), Some(1))
            .unwrap();

        let items = cart.items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].menu_item.name, "A");
        assert_eq!(items[0].note.as_deref(), Some("first"));
        assert_eq!(items[1].menu_item.name, "B2");
        assert_eq!(items[1].quantity, 5);
        assert_eq!(items[1].note.as_deref(), Some("changed"));
        assert_eq!(items[2].menu_item.name, "C");
    }

    #[test]
    fn test_invalid_edit_index_appends() {
        let mut cart = manager();
        cart.add_or_update(item("A", 100), 1, None, None).unwrap();
        cart.add_or_update(item("B", 200), 1, None, Some(7)).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[1].menu_item.name, "B");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = manager();
        cart.add_or_update(item("A", 100), 1, None, None).unwrap();

        cart.remove(5);
        assert_eq!(cart.len(), 1);

        cart.remove(0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_persist_restore_roundtrip() {
        let store = Arc::new(MemoryStore::new());

        let mut cart = CartManager::new(store.clone());
        cart.add_or_update(item("Pizza", 1299), 2, Some("Extra cheese".into()), None)
            .unwrap();
        cart.add_or_update(item("Salad", 899), 1, None, None).unwrap();
        cart.add_or_update(
            item("Cake", 599),
            1,
            Some("Happy birthday!\nNo candles, please.".into()),
            None,
        )
        .unwrap();
        let before = cart.items().to_vec();

        // A second manager over the same store sees a deep-equal cart
        let reloaded = CartManager::new(store.clone());
        assert_eq!(reloaded.items(), before.as_slice());

        // Empty carts round-trip too
        let mut cart = CartManager::new(store.clone());
        cart.clear();
        let reloaded = CartManager::new(store);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_empty_note_is_normalized_away() {
        let mut cart = manager();
        cart.add_or_update(item("A", 100), 1, Some(String::new()), None)
            .unwrap();
        assert_eq!(cart.items()[0].note, None);
    }

    #[test]
    fn test_corrupt_persisted_cart_restores_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(CART_STORAGE_KEY, b"{not json!").unwrap();

        let cart = CartManager::new(store);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_failing_store_degrades_to_empty_cart() {
        struct FailingStore;
        impl CartStore for FailingStore {
            fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
                Err(StoreError::Storage(redb::StorageError::Io(
                    std::io::Error::other("disk full"),
                )))
            }
            fn set(&self, _key: &str, _value: &[u8]) -> Result<(), StoreError> {
                Err(StoreError::Storage(redb::StorageError::Io(
                    std::io::Error::other("disk full"),
                )))
            }
            fn remove(&self, _key: &str) -> Result<(), StoreError> {
                Ok(())
            }
        }

        let mut cart = CartManager::new(Arc::new(FailingStore));
        assert!(cart.is_empty());

        // Mutations still work in memory even when persistence fails
        cart.add_or_update(item("A", 100), 1, None, None).unwrap();
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_restore_absorbs_external_clear() {
        let store = Arc::new(MemoryStore::new());

        let mut cart = CartManager::new(store.clone());
        cart.add_or_update(item("Pizza", 1299), 1, None, None).unwrap();

        // Another handle (the checkout flow) clears the cart
        let mut checkout_view = CartManager::new(store.clone());
        checkout_view.clear();

        // Returning to the storefront root re-reads storage
        cart.restore();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_rejects_empty_cart() {
        let cart = manager();
        assert_eq!(
            cart.checkout(&Settings::fallback()).unwrap_err(),
            CartError::EmptyCart
        );
    }
}
