//! # Commands Module
//!
//! The functions the presentation shell invokes, one module per
//! screen-facing concern.
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Command Flow                            │
//! │                                                             │
//! │  Screen interaction (tap "+", tap heart, flip dark mode)    │
//! │         │                                                   │
//! │         ▼                                                   │
//! │  command function, given the state slices it declares       │
//! │    add_to_cart(&catalog, &cart, "1", Some(1))               │
//! │         │                                                   │
//! │         ▼                                                   │
//! │  snapshot DTO (CartResponse, WishlistResponse, ...)         │
//! │         │                                                   │
//! │         ▼                                                   │
//! │  screen re-renders from the returned snapshot               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands declare exactly the slices they need:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // Needs catalog and cart
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, ...)
//! ```
//!
//! Mutating commands return a freshly built snapshot after the mutation,
//! never a reference into the store.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod theme;
pub mod wishlist;
