//! # Catalog Types
//!
//! The product shape the sample catalog serves and the screens render.
//!
//! A product id is a short opaque string, unique within the catalog. Cart
//! and wishlist entries reference products by id and carry frozen copies
//! of the display fields they need (name, price, image), so a catalog
//! entry changing later never rewrites what a cart already shows.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
///
/// Rating, sold count and stock are display data only — the storefront
/// carries no inventory logic.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name shown on cards and the detail screen.
    pub name: String,

    /// Price in minor units (whole rupiah).
    pub price_minor: i64,

    /// Primary image URI.
    pub image: String,

    /// Storefront the product is sold from.
    pub store: String,

    /// Seller location shown on the product card.
    pub location: String,

    /// Long-form description for the detail screen.
    pub description: Option<String>,

    /// Average review rating.
    pub rating: Option<f64>,

    /// Units sold.
    pub sold: Option<i64>,

    /// Stock on hand.
    pub stock: Option<i64>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor(self.price_minor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
