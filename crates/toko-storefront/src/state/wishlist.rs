//! # Wishlist State
//!
//! Shared container for the user's saved products, mirroring the cart
//! container's lock-and-apply access pattern.

use std::sync::{Arc, Mutex};

use toko_core::wishlist::Wishlist;

/// Shared wishlist container injected into the presentation shell.
#[derive(Debug)]
pub struct WishlistState {
    wishlist: Arc<Mutex<Wishlist>>,
}

impl WishlistState {
    /// Creates a new empty wishlist state.
    pub fn new() -> Self {
        WishlistState {
            wishlist: Arc::new(Mutex::new(Wishlist::new())),
        }
    }

    /// Executes a function with read access to the wishlist.
    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&wishlist)
    }

    /// Executes a function with write access to the wishlist.
    pub fn with_wishlist_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wishlist) -> R,
    {
        let mut wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&mut wishlist)
    }
}

impl Default for WishlistState {
    fn default() -> Self {
        Self::new()
    }
}
