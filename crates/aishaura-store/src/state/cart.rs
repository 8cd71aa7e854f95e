//! # Cart State
//!
//! Holds the live cart behind a lock.
//!
//! ## Thread Safety
//! The cart is wrapped in `Mutex<Cart>` because commands may be driven
//! from any runtime worker thread. There is no true concurrency in the
//! storefront's event model - user events arrive one at a time - but the
//! lock makes that assumption safe rather than implicit.
//!
//! ## Why Not RwLock?
//! Cart operations are quick and most of them mutate. A RwLock would add
//! complexity with minimal benefit.

use std::sync::Mutex;

use serde::Serialize;

use aishaura_core::cart::{Cart, CartLineItem};
use aishaura_core::money::Money;

/// Shell-managed cart state.
#[derive(Debug)]
pub struct CartState {
    cart: Mutex<Cart>,
}

impl CartState {
    /// Wraps a (possibly rehydrated) cart.
    pub fn new(cart: Cart) -> Self {
        CartState {
            cart: Mutex::new(cart),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(CartTotals::from);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Clones the current cart (used for submissions and renders).
    pub fn snapshot(&self) -> Cart {
        self.with_cart(Cart::clone)
    }
}

impl Default for CartState {
    fn default() -> Self {
        CartState::new(Cart::new())
    }
}

// =============================================================================
// Totals & Response
// =============================================================================

/// Cart totals summary for the drawer footer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_grams: i64,
    pub subtotal: Money,
    /// Always zero; rendered as "FREE".
    pub delivery: Money,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_grams: cart.total_grams(),
            subtotal: cart.subtotal(),
            delivery: cart.delivery_fee(),
            total: cart.order_total(),
        }
    }
}

/// Cart response including items and totals, as commands return it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
