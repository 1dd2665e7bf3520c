//! # Wishlist Model
//!
//! The set of products the user has marked as favorites.
//!
//! ## Invariants
//! - At most one entry per product id; add is idempotent (inserting an id
//!   already present is a no-op, checked inside the model rather than
//!   left to callers)
//! - Entries keep insertion order for rendering

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Wishlist Entry
// =============================================================================

/// A saved product reference.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Product the entry references.
    pub product_id: String,

    /// Product name at time of saving (frozen).
    pub name: String,

    /// Price in minor units at time of saving (frozen).
    pub price_minor: i64,

    /// Image URI at time of saving (frozen).
    pub image: String,

    /// Storefront label, when the saving screen had one.
    pub store: Option<String>,
}

impl WishlistEntry {
    /// Creates an entry from a catalog product.
    pub fn from_product(product: &Product) -> Self {
        WishlistEntry {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price_minor: product.price_minor,
            image: product.image.clone(),
            store: Some(product.store.clone()),
        }
    }

    /// Returns the saved price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor(self.price_minor)
    }

    /// Builds the cart line the wishlist screen's "add to cart" creates.
    pub fn to_cart_line(&self, quantity: i64) -> CartLine {
        CartLine::new(
            self.product_id.clone(),
            self.name.clone(),
            self.price_minor,
            self.image.clone(),
            quantity,
        )
    }
}

// =============================================================================
// Wishlist
// =============================================================================

/// The wishlist collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    /// Entries in insertion order.
    pub entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist {
            entries: Vec::new(),
        }
    }

    /// Inserts the entry unless one with the same product id exists.
    pub fn add(&mut self, entry: WishlistEntry) {
        if self.contains(&entry.product_id) {
            return;
        }
        self.entries.push(entry);
    }

    /// Removes the entry with the given product id. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: &str) {
        self.entries.retain(|e| e.product_id != product_id);
    }

    /// Empties the wishlist unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Membership test by product id.
    pub fn contains(&self, product_id: &str) -> bool {
        self.entries.iter().any(|e| e.product_id == product_id)
    }

    /// Finds the entry with the given product id.
    pub fn get(&self, product_id: &str) -> Option<&WishlistEntry> {
        self.entries.iter().find(|e| e.product_id == product_id)
    }

    /// Number of saved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> WishlistEntry {
        WishlistEntry {
            product_id: id.to_string(),
            name: format!("Product {}", id),
            price_minor: 15_999_000,
            image: format!("https://img.example/{}.jpg", id),
            store: Some("Samsung Official Store".to_string()),
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        wishlist.add(entry("1"));
        wishlist.add(entry("1"));

        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut wishlist = Wishlist::new();
        wishlist.add(entry("1"));
        wishlist.remove("missing");

        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut wishlist = Wishlist::new();
        wishlist.add(entry("1"));
        wishlist.add(entry("2"));
        assert!(!wishlist.is_empty());

        wishlist.clear();
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_contains() {
        let mut wishlist = Wishlist::new();
        assert!(!wishlist.contains("1"));

        wishlist.add(entry("1"));
        assert!(wishlist.contains("1"));
        assert!(!wishlist.contains("2"));
    }

    #[test]
    fn test_to_cart_line_carries_saved_fields() {
        let line = entry("1").to_cart_line(1);
        assert_eq!(line.product_id, "1");
        assert_eq!(line.price_minor, 15_999_000);
        assert_eq!(line.quantity, 1);
    }
}
