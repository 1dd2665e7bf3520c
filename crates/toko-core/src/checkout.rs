//! # Checkout Totals
//!
//! The order summary the checkout screen renders: cart subtotal plus the
//! selected shipping option. Shipping and payment data here are display
//! choices only — there is no carrier or payment integration.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;

// =============================================================================
// Shipping Option
// =============================================================================

/// A selectable courier option.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    /// Unique identifier within the option list.
    pub id: String,

    /// Courier name (e.g. "JNE Regular").
    pub name: String,

    /// Shipping cost in minor units.
    pub price_minor: i64,

    /// Delivery estimate label (e.g. "2-3 hari").
    pub eta: String,
}

impl ShippingOption {
    /// Returns the shipping cost as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor(self.price_minor)
    }
}

// =============================================================================
// Payment Channel
// =============================================================================

/// A selectable payment channel. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentChannel {
    /// Manual bank transfer.
    BankTransfer,
    /// Bank virtual account number.
    VirtualAccount,
    /// E-wallet (GoPay, OVO, ...).
    EWallet,
}

impl PaymentChannel {
    /// Label shown on the checkout screen.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentChannel::BankTransfer => "Transfer Bank",
            PaymentChannel::VirtualAccount => "Virtual Account",
            PaymentChannel::EWallet => "E-Wallet",
        }
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Totals for the payment footer: subtotal, shipping, grand total.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal_minor: i64,
    pub shipping_minor: i64,
    pub total_minor: i64,
}

impl OrderSummary {
    /// Computes the summary for the current cart and a shipping choice.
    pub fn for_cart(cart: &Cart, shipping: &ShippingOption) -> Self {
        let subtotal = cart.total_price();
        let total = subtotal + shipping.price();
        OrderSummary {
            subtotal_minor: subtotal.minor(),
            shipping_minor: shipping.price_minor,
            total_minor: total.minor(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
