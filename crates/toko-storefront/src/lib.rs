//! # Toko Storefront
//!
//! Application layer for the Toko storefront: the state containers the
//! presentation shell injects, and the command functions its screens
//! invoke over the view bridge.
//!
//! ## Module Organization
//! ```text
//! toko_storefront/
//! ├── lib.rs          ◄─── You are here (logging setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports + Storefront context
//! │   ├── cart.rs     ◄─── Cart container
//! │   ├── wishlist.rs ◄─── Wishlist container
//! │   ├── theme.rs    ◄─── Theme container
//! │   ├── catalog.rs  ◄─── Read-only sample catalog
//! │   └── config.rs   ◄─── Store/currency configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── wishlist.rs ◄─── Wishlist commands
//! │   ├── theme.rs    ◄─── Theme commands
//! │   ├── catalog.rs  ◄─── Catalog browse/search commands
//! │   ├── checkout.rs ◄─── Shipping options + order summary
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! The shell constructs one [`state::Storefront`] at startup and hands
//! each screen the slices it needs; commands take those slices explicitly
//! and return serializable snapshots.

pub mod commands;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Called once by the embedding shell before any command runs.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=toko=trace` - Show trace for toko crates only
/// - Default: INFO level, DEBUG for toko crates
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,toko=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
