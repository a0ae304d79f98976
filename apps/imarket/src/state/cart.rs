//! # Cart State
//!
//! The session's cart behind a lock.
//!
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Commands may run on any runtime thread
//! 2. Most cart commands modify it, so a read/write split buys nothing
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart State Access                                  │
//! │                                                                         │
//! │   get_cart ──────────► with_cart(|c| ...)       (lock, read, release)   │
//! │   add_to_cart ───────► with_cart_mut(|c| ...)   (lock, write, release)  │
//! │   remove_one ────────► with_cart_mut(|c| ...)                           │
//! │   checkout ──────────► with_cart(|c| ...)                               │
//! │                                                                         │
//! │  NOTE: The lock is held only for the closure, never across an await.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use imarket_core::Cart;

/// Shared cart state.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = cart_state.with_cart(|cart| cart.item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        // Every cart mutation is a single Vec operation, so a poisoned
        // lock still guards a consistent cart.
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&product))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imarket_core::{Money, Product};

    fn product(id: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            category: "groceries".to_string(),
            price: Money::from_cents(250),
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_empty() {
        let state = CartState::new();
        assert!(state.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_clones_share_the_cart() {
        let state = CartState::new();
        let other = state.clone();

        state.with_cart_mut(|c| c.add(&product(1))).unwrap();
        other.with_cart_mut(|c| c.add(&product(1))).unwrap();

        assert_eq!(state.with_cart(|c| c.item_count()), 2);
        assert_eq!(other.with_cart(|c| c.line_count()), 1);
    }
}
