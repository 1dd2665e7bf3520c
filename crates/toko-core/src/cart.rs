//! # Cart Model
//!
//! The ordered set of line items the user intends to purchase, plus the
//! totals derived from it.
//!
//! ## Invariants
//! - Lines are unique by product id (adding the same product merges
//!   quantities)
//! - Quantity is at least 1 in any observable snapshot; a transition to
//!   zero or below removes the line instead of storing it
//! - Totals are recomputed on every read, never cached, so they cannot
//!   go stale against the line collection
//!
//! All mutations are total functions: absent ids are no-ops, and adding
//! always succeeds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// A line item in the shopping cart.
///
/// Display fields are frozen copies taken when the line is added; a later
/// catalog change does not rewrite what the cart shows.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product the line references.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price in minor units at time of adding (frozen).
    pub price_minor: i64,

    /// Image URI at time of adding (frozen).
    pub image: String,

    /// Quantity in cart.
    pub quantity: i64,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a line from its display fields.
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        price_minor: i64,
        image: impl Into<String>,
        quantity: i64,
    ) -> Self {
        CartLine {
            product_id: product_id.into(),
            name: name.into(),
            price_minor,
            image: image.into(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Creates a line from a catalog product, freezing its price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine::new(
            product.id.clone(),
            product.name.clone(),
            product.price_minor,
            product.image.clone(),
            quantity,
        )
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        Money::from_minor(self.price_minor).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,

    /// When the cart was created.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a line to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by the incoming
    ///   quantity, insertion order unchanged
    /// - Otherwise: the line is appended at the end
    pub fn add_line(&mut self, line: CartLine) {
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == line.product_id)
        {
            existing.quantity += line.quantity;
            return;
        }
        self.lines.push(line);
    }

    /// Removes the line with the given product id. Absent ids are a no-op.
    pub fn remove_line(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Sets the quantity of the line with the given product id.
    ///
    /// ## Behavior
    /// - Quantity ≤ 0: the line is removed; a zero-quantity row is never
    ///   stored
    /// - Absent product id: no-op
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_line(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Number of distinct lines (the "Beli (N)" label), not total units.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals. Recomputed on every read, never cached.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for snapshot responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_minor: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_minor: cart.total_price().minor(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price_minor: i64, quantity: i64) -> CartLine {
        CartLine::new(
            id,
            format!("Product {}", id),
            price_minor,
            format!("https://img.example/{}.jpg", id),
            quantity,
        )
    }

    #[test]
    fn test_add_line() {
        let mut cart = Cart::new();
        cart.add_line(line("1", 17_999_000, 1));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total_price(), Money::from_minor(17_999_000));
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_line(line("1", 1000, 2));
        cart.add_line(line("1", 1000, 3));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.lines[0].quantity, 5);
    }

    #[test]
    fn test_distinct_ids_one_line_each() {
        let mut cart = Cart::new();
        cart.add_line(line("1", 1000, 1));
        cart.add_line(line("2", 2000, 1));
        cart.add_line(line("3", 3000, 1));

        assert_eq!(cart.item_count(), 3);
        let ids: Vec<&str> = cart.lines.iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.remove_line("missing");
        assert!(cart.is_empty());

        cart.add_line(line("1", 1000, 1));
        cart.remove_line("missing");
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_total_price_commutes_over_insertion_order() {
        let mut forward = Cart::new();
        forward.add_line(line("a", 1000, 2));
        forward.add_line(line("b", 500, 1));

        let mut backward = Cart::new();
        backward.add_line(line("b", 500, 1));
        backward.add_line(line("a", 1000, 2));

        assert_eq!(forward.total_price(), Money::from_minor(2500));
        assert_eq!(backward.total_price(), Money::from_minor(2500));
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add_line(line("1", 1000, 1));

        cart.set_quantity("1", 4);
        assert_eq!(cart.lines[0].quantity, 4);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_line(line("1", 1000, 2));

        cart.set_quantity("1", 0);
        assert!(cart.is_empty());

        cart.add_line(line("1", 1000, 2));
        cart.set_quantity("1", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_line(line("1", 1000, 1));

        cart.set_quantity("missing", 7);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.lines[0].quantity, 1);
    }

    #[test]
    fn test_decrement_to_zero_via_remove() {
        // The cart screen routes a decrement below 1 to remove.
        let mut cart = Cart::new();
        cart.add_line(line("p1", 17_999_000, 1));

        let current = cart.lines[0].quantity;
        let next = current - 1;
        if next > 0 {
            cart.set_quantity("p1", next);
        } else {
            cart.remove_line("p1");
        }

        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add_line(line("1", 1000, 2));
        cart.add_line(line("2", 500, 1));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total_minor, 2500);
    }

    #[test]
    fn test_line_serializes_camel_case() {
        let json = serde_json::to_value(line("1", 1000, 2)).unwrap();
        assert_eq!(json["productId"], "1");
        assert_eq!(json["priceMinor"], 1000);
        assert!(json["addedAt"].is_string());
    }
}
