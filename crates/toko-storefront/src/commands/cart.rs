//! # Cart Commands
//!
//! Cart manipulation invoked from the product detail screen (add) and the
//! cart tab (quantity stepper, remove).
//!
//! The cart screen's stepper translates a decrement that would reach zero
//! into `remove_from_cart`; `update_cart_item` additionally removes the
//! line itself if handed a non-positive quantity, so a zero-quantity row
//! can never be stored.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};
use toko_core::cart::{Cart, CartLine, CartTotals};
use toko_core::validation::{validate_product_id, validate_quantity};

/// Cart snapshot including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.lines.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases
/// - Product not in cart: appended, price frozen at time of adding
///
/// ## Arguments
/// * `product_id` - Catalog id to add
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    validate_product_id(product_id)?;
    validate_quantity(quantity)?;

    let line = catalog
        .get_by_id(product_id)
        .map(|product| CartLine::from_product(product, quantity))
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    Ok(cart.with_cart_mut(|c| {
        c.add_line(line);
        CartResponse::from(&*c)
    }))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity ≤ 0: the line is removed
/// - Absent product id: no-op
pub fn update_cart_item(cart: &CartState, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.set_quantity(product_id, quantity);
        CartResponse::from(&*c)
    })
}

/// Removes a line from the cart. Absent ids are a no-op.
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_line(product_id);
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_add_to_cart_freezes_catalog_price() {
        let catalog = CatalogState::new();
        let cart = CartState::new();

        let response = add_to_cart(&catalog, &cart, "1", None).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].price_minor, 17_999_000);
        assert_eq!(response.items[0].quantity, 1);
        assert_eq!(response.totals.total_minor, 17_999_000);
    }

    #[test]
    fn test_add_to_cart_merges_on_repeat() {
        let catalog = CatalogState::new();
        let cart = CartState::new();

        add_to_cart(&catalog, &cart, "1", Some(2)).unwrap();
        let response = add_to_cart(&catalog, &cart, "1", Some(3)).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 5);
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let catalog = CatalogState::new();
        let cart = CartState::new();

        let err = add_to_cart(&catalog, &cart, "999", None).unwrap_err();
        assert!(matches!(err.code, ErrorCode::NotFound));
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_add_to_cart_rejects_non_positive_quantity() {
        let catalog = CatalogState::new();
        let cart = CartState::new();

        let err = add_to_cart(&catalog, &cart, "1", Some(0)).unwrap_err();
        assert!(matches!(err.code, ErrorCode::ValidationError));
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let catalog = CatalogState::new();
        let cart = CartState::new();

        add_to_cart(&catalog, &cart, "1", Some(2)).unwrap();
        let response = update_cart_item(&cart, "1", 0);

        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_minor, 0);
    }

    #[test]
    fn test_stepper_decrement_to_zero_routes_to_remove() {
        // The cart screen calls remove when the stepper would reach zero.
        let catalog = CatalogState::new();
        let cart = CartState::new();

        add_to_cart(&catalog, &cart, "1", Some(1)).unwrap();

        let current = get_cart(&cart).items[0].quantity;
        let next = current - 1;
        let response = if next > 0 {
            update_cart_item(&cart, "1", next)
        } else {
            remove_from_cart(&cart, "1")
        };

        assert!(response.items.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let cart = CartState::new();
        let response = remove_from_cart(&cart, "missing");
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let catalog = CatalogState::new();
        let cart = CartState::new();

        let response = add_to_cart(&catalog, &cart, "2", None).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["items"][0]["productId"], "2");
        assert_eq!(json["totals"]["itemCount"], 1);
        assert_eq!(json["totals"]["totalMinor"], 15_999_000);
    }
}
