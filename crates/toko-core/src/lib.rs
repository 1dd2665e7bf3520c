//! # toko-core: Pure Domain Logic for the Toko Storefront
//!
//! This crate holds the storefront's client-side domain state as pure
//! values with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Presentation Shell (screens)               │
//! │     Home ──► Product Detail ──► Cart ──► Checkout           │
//! └────────────────────────────┬────────────────────────────────┘
//! │                            │ command layer (toko-storefront)│
//! ┌────────────────────────────▼────────────────────────────────┐
//! │                 ★ toko-core (THIS CRATE) ★                  │
//! │                                                             │
//! │   ┌────────┐ ┌────────┐ ┌──────────┐ ┌───────┐ ┌─────────┐ │
//! │   │ money  │ │  cart  │ │ wishlist │ │ theme │ │ checkout│ │
//! │   │ Money  │ │  Cart  │ │ Wishlist │ │ Theme │ │ totals  │ │
//! │   └────────┘ └────────┘ └──────────┘ └───────┘ └─────────┘ │
//! │                                                             │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types ([`Product`])
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Shopping cart model and derived totals
//! - [`wishlist`] - Saved-product collection
//! - [`theme`] - Dark-mode flag
//! - [`checkout`] - Order summary over cart + shipping option
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation at the command boundary
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output
//! 2. **Integer Money**: all monetary values are in minor units (i64)
//! 3. **Total Operations**: cart/wishlist/theme mutations never fail;
//!    absent ids are no-ops, not errors
//! 4. **Explicit Errors**: command-boundary failures are typed, never
//!    strings or panics

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod theme;
pub mod types;
pub mod validation;
pub mod wishlist;

pub use cart::{Cart, CartLine, CartTotals};
pub use checkout::{OrderSummary, PaymentChannel, ShippingOption};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use theme::Theme;
pub use types::Product;
pub use wishlist::{Wishlist, WishlistEntry};
