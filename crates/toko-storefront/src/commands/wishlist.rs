//! # Wishlist Commands
//!
//! Favorite toggling from the product detail screen and the wishlist
//! screen's list management, including its "add to cart" action.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, WishlistState};
use toko_core::validation::validate_product_id;
use toko_core::wishlist::{Wishlist, WishlistEntry};

/// Wishlist snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<WishlistEntry>,
    pub count: usize,
}

impl From<&Wishlist> for WishlistResponse {
    fn from(wishlist: &Wishlist) -> Self {
        WishlistResponse {
            items: wishlist.entries.clone(),
            count: wishlist.len(),
        }
    }
}

/// Gets the current wishlist contents.
pub fn get_wishlist(wishlist: &WishlistState) -> WishlistResponse {
    debug!("get_wishlist command");
    wishlist.with_wishlist(|w| WishlistResponse::from(w))
}

/// Saves a catalog product to the wishlist. Saving an id already present
/// is a no-op.
pub fn add_to_wishlist(
    catalog: &CatalogState,
    wishlist: &WishlistState,
    product_id: &str,
) -> Result<WishlistResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_wishlist command");

    validate_product_id(product_id)?;

    let entry = catalog
        .get_by_id(product_id)
        .map(WishlistEntry::from_product)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    Ok(wishlist.with_wishlist_mut(|w| {
        w.add(entry);
        WishlistResponse::from(&*w)
    }))
}

/// Removes an entry from the wishlist. Absent ids are a no-op.
pub fn remove_from_wishlist(wishlist: &WishlistState, product_id: &str) -> WishlistResponse {
    debug!(product_id = %product_id, "remove_from_wishlist command");

    wishlist.with_wishlist_mut(|w| {
        w.remove(product_id);
        WishlistResponse::from(&*w)
    })
}

/// Empties the wishlist unconditionally.
pub fn clear_wishlist(wishlist: &WishlistState) -> WishlistResponse {
    debug!("clear_wishlist command");

    wishlist.with_wishlist_mut(|w| {
        w.clear();
        WishlistResponse::from(&*w)
    })
}

/// Membership test for the detail screen's heart affordance.
///
/// The id may still be unavailable while related data loads, so `None`
/// answers `false` rather than erroring.
pub fn is_wishlisted(wishlist: &WishlistState, product_id: Option<&str>) -> bool {
    debug!(product_id = ?product_id, "is_wishlisted command");

    match product_id {
        Some(id) => wishlist.with_wishlist(|w| w.contains(id)),
        None => false,
    }
}

/// The wishlist screen's "add to cart": builds a quantity-1 cart line from
/// the saved entry's data. The entry stays wishlisted.
pub fn add_wishlist_item_to_cart(
    wishlist: &WishlistState,
    cart: &CartState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_wishlist_item_to_cart command");

    let line = wishlist
        .with_wishlist(|w| w.get(product_id).map(|entry| entry.to_cart_line(1)))
        .ok_or_else(|| ApiError::not_found("Wishlist item", product_id))?;

    Ok(cart.with_cart_mut(|c| {
        c.add_line(line);
        CartResponse::from(&*c)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_add_is_idempotent() {
        let catalog = CatalogState::new();
        let wishlist = WishlistState::new();

        add_to_wishlist(&catalog, &wishlist, "1").unwrap();
        let response = add_to_wishlist(&catalog, &wishlist, "1").unwrap();

        assert_eq!(response.count, 1);
    }

    #[test]
    fn test_add_unknown_product() {
        let catalog = CatalogState::new();
        let wishlist = WishlistState::new();

        let err = add_to_wishlist(&catalog, &wishlist, "999").unwrap_err();
        assert!(matches!(err.code, ErrorCode::NotFound));
    }

    #[test]
    fn test_is_wishlisted_none_is_false() {
        let wishlist = WishlistState::new();
        assert!(!is_wishlisted(&wishlist, None));
    }

    #[test]
    fn test_heart_toggle_round_trip() {
        // Detail screen: heart off -> add, heart on -> remove.
        let catalog = CatalogState::new();
        let wishlist = WishlistState::new();

        assert!(!is_wishlisted(&wishlist, Some("1")));
        add_to_wishlist(&catalog, &wishlist, "1").unwrap();
        assert!(is_wishlisted(&wishlist, Some("1")));
        remove_from_wishlist(&wishlist, "1");
        assert!(!is_wishlisted(&wishlist, Some("1")));
    }

    #[test]
    fn test_clear_empties() {
        let catalog = CatalogState::new();
        let wishlist = WishlistState::new();

        add_to_wishlist(&catalog, &wishlist, "1").unwrap();
        add_to_wishlist(&catalog, &wishlist, "2").unwrap();
        let response = clear_wishlist(&wishlist);

        assert_eq!(response.count, 0);
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_move_to_cart_keeps_entry_wishlisted() {
        let catalog = CatalogState::new();
        let wishlist = WishlistState::new();
        let cart = CartState::new();

        add_to_wishlist(&catalog, &wishlist, "2").unwrap();
        let response = add_wishlist_item_to_cart(&wishlist, &cart, "2").unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 1);
        assert_eq!(response.items[0].price_minor, 15_999_000);
        assert!(is_wishlisted(&wishlist, Some("2")));
    }

    #[test]
    fn test_move_to_cart_requires_saved_entry() {
        let wishlist = WishlistState::new();
        let cart = CartState::new();

        let err = add_wishlist_item_to_cart(&wishlist, &cart, "1").unwrap_err();
        assert!(matches!(err.code, ErrorCode::NotFound));
        assert!(cart.with_cart(|c| c.is_empty()));
    }
}
