//! # State Module
//!
//! The process-wide state slices behind the storefront screens.
//!
//! Each concern gets its own container rather than one monolithic state
//! struct: commands declare exactly the slices they touch, tests can
//! construct a single slice in isolation, and independent slices never
//! contend for the same lock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Storefront                           │
//! │                                                             │
//! │  ┌───────────┐ ┌───────────────┐ ┌────────────┐             │
//! │  │ CartState │ │ WishlistState │ │ ThemeState │  mutable,   │
//! │  │ Arc<Mutex>│ │  Arc<Mutex>   │ │ Arc<Mutex> │  lock-held  │
//! │  └───────────┘ └───────────────┘ └────────────┘  briefly    │
//! │                                                             │
//! │  ┌──────────────┐ ┌─────────────┐                           │
//! │  │ CatalogState │ │ ConfigState │   read-only after init    │
//! │  └──────────────┘ └─────────────┘                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations run synchronously inside the interaction handler that
//! triggered them; nothing here blocks on anything but its own lock.

mod cart;
mod catalog;
mod config;
mod theme;
mod wishlist;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;
pub use theme::ThemeState;
pub use wishlist::WishlistState;

/// The application context the shell constructs once at process start and
/// injects into the presentation layer. Owns every state slice; screens
/// receive the slices they need and never hold an authoritative copy.
///
/// A restart builds a fresh context — nothing is persisted.
#[derive(Debug, Default)]
pub struct Storefront {
    pub cart: CartState,
    pub wishlist: WishlistState,
    pub theme: ThemeState,
    pub catalog: CatalogState,
    pub config: ConfigState,
}

impl Storefront {
    /// Creates the context with empty cart/wishlist, light theme, the
    /// sample catalog, and default configuration.
    pub fn new() -> Self {
        Storefront::default()
    }
}
