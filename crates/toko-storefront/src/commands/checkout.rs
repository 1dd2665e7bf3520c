//! # Checkout Commands
//!
//! The checkout screen's option lists and payment-footer totals. Shipping
//! options and payment channels are fixed sample data; selecting one only
//! changes the computed summary.

use tracing::debug;

use crate::error::ApiError;
use crate::state::CartState;
use toko_core::checkout::{OrderSummary, PaymentChannel, ShippingOption};

/// The selectable courier options.
pub fn shipping_options() -> Vec<ShippingOption> {
    debug!("shipping_options command");
    sample_shipping_options()
}

/// The selectable payment channels.
pub fn payment_channels() -> Vec<PaymentChannel> {
    debug!("payment_channels command");
    vec![
        PaymentChannel::BankTransfer,
        PaymentChannel::VirtualAccount,
        PaymentChannel::EWallet,
    ]
}

/// Computes the payment-footer totals for the current cart and a selected
/// shipping option.
pub fn order_summary(cart: &CartState, shipping_id: &str) -> Result<OrderSummary, ApiError> {
    debug!(shipping_id = %shipping_id, "order_summary command");

    let options = sample_shipping_options();
    let shipping = options
        .iter()
        .find(|o| o.id == shipping_id)
        .ok_or_else(|| ApiError::not_found("Shipping option", shipping_id))?;

    Ok(cart.with_cart(|c| OrderSummary::for_cart(c, shipping)))
}

/// The hardcoded courier list.
fn sample_shipping_options() -> Vec<ShippingOption> {
    vec![
        ShippingOption {
            id: "1".to_string(),
            name: "JNE Regular".to_string(),
            price_minor: 10_000,
            eta: "2-3 hari".to_string(),
        },
        ShippingOption {
            id: "2".to_string(),
            name: "J&T Express".to_string(),
            price_minor: 12_000,
            eta: "1-2 hari".to_string(),
        },
        ShippingOption {
            id: "3".to_string(),
            name: "SiCepat".to_string(),
            price_minor: 15_000,
            eta: "1 hari".to_string(),
        },
    ]
}
