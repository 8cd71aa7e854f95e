//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│Confirmed │       │
//! │  │  Cart    │     │          │     │  Modal   │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └─────┬────┘       │
//! │       ▲                │                                   │            │
//! │       │           add_to_cart                        1 s delay          │
//! │       │           update_quantity                          │            │
//! │       │           remove_from_cart                         │            │
//! │       │                │                                   │            │
//! │       └── clear_cart ◄─┴───────────────────────────────────┘            │
//! │                                                                         │
//! │  Every mutation persists the full cart and re-renders the drawer.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use aishaura_core::cart::clamp_quantity;
use aishaura_core::money::Money;

use crate::state::CartResponse;
use crate::view::Notification;
use crate::Storefront;

impl Storefront {
    /// Adds a product to the cart, or replaces its quantity if already
    /// present.
    ///
    /// ## Behavior
    /// - Unknown product: logged, NO mutation, current cart returned
    ///   unchanged (the gallery button and the catalog can disagree for a
    ///   moment around a refresh; that's not worth an error dialog)
    /// - `price_hint` comes from the clicked card; a missing/zero hint
    ///   falls back to the catalog's current price
    /// - Quantity clamps to the 50 g minimum (`None` = unparsable input)
    ///
    /// ## Side Effects
    /// Persists the cart, shows the "added" toast, re-renders the drawer.
    pub fn add_to_cart(
        &self,
        product: &str,
        quantity: Option<i64>,
        price_hint: Option<Money>,
    ) -> CartResponse {
        let Some(catalog_price) = self.catalog.with_catalog(|c| c.price_of(product)) else {
            warn!(product, "add_to_cart for unknown product; ignoring");
            return self.get_cart();
        };

        let price = price_hint.filter(Money::is_positive).unwrap_or(catalog_price);
        let quantity = clamp_quantity(quantity);
        debug!(product, quantity, %price, "add_to_cart");

        let response = self.cart.with_cart_mut(|cart| {
            cart.upsert(product, quantity, price);
            CartResponse::from(&*cart)
        });

        self.persist_cart();
        self.view.notify(&Notification::success(
            "Fresh greens added",
            format!("{quantity}g of {product} is now in your basket."),
        ));
        self.render_cart();

        response
    }

    /// Updates the quantity of the line item at `index` (50 g minimum).
    pub fn update_quantity(&self, index: usize, grams: i64) -> CartResponse {
        debug!(index, grams, "update_quantity");

        let (changed, response) = self.cart.with_cart_mut(|cart| {
            let changed = cart.update_quantity(index, grams);
            (changed, CartResponse::from(&*cart))
        });

        if changed {
            self.persist_cart();
            self.render_cart();
        }

        response
    }

    /// Removes the line item at `index`.
    ///
    /// An out-of-range index is a defensive no-op. If the removal empties
    /// the cart while a checkout is open, the checkout closes - a modal
    /// over an empty cart has nothing left to sell.
    pub fn remove_from_cart(&self, index: usize) -> CartResponse {
        debug!(index, "remove_from_cart");

        let (removed, response) = self.cart.with_cart_mut(|cart| {
            let removed = cart.remove(index);
            (removed, CartResponse::from(&*cart))
        });

        if removed.is_none() {
            return response;
        }

        self.persist_cart();
        self.render_cart();

        if response.items.is_empty() {
            let was_open = self
                .session
                .lock()
                .expect("Session mutex poisoned")
                .take()
                .is_some();
            if was_open {
                self.view.close_checkout();
            }
        }

        response
    }

    /// Empties the cart and removes its persisted state.
    pub fn clear_cart(&self) -> CartResponse {
        debug!("clear_cart");

        let response = self.cart.with_cart_mut(|cart| {
            cart.clear();
            CartResponse::from(&*cart)
        });

        self.store.clear_cart();
        self.render_cart();

        response
    }

    /// Writes the current cart to durable storage.
    pub(crate) fn persist_cart(&self) {
        self.cart.with_cart(|cart| self.store.save_cart(cart));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::storefront_with;

    #[test]
    fn test_add_to_cart_uses_catalog_price_fallback() {
        let (storefront, view) = storefront_with("add-fallback", |_| {});

        let response = storefront.add_to_cart("Sunflower", Some(100), None);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].price, Money::from_rupees(100));

        // A zero hint is as good as no hint
        let response = storefront.add_to_cart("Radish", Some(50), Some(Money::zero()));
        assert_eq!(response.items[1].price, Money::from_rupees(80));

        assert!(view.saw("notify:Success:Fresh greens added"));
    }

    #[test]
    fn test_add_to_cart_unknown_product_is_silent_noop() {
        let (storefront, view) = storefront_with("add-unknown", |_| {});

        let response = storefront.add_to_cart("Wheatgrass", Some(100), None);
        assert!(response.items.is_empty());
        // No toast, no render for a no-op
        assert!(view.events().is_empty());
    }

    #[test]
    fn test_two_adds_for_different_products_both_persist() {
        let (storefront, _view) = storefront_with("add-two", |_| {});

        storefront.add_to_cart("Sunflower", Some(100), None);
        storefront.add_to_cart("Radish", Some(50), None);

        // Both in memory and both on disk
        assert_eq!(storefront.get_cart().items.len(), 2);
        let rehydrated = storefront.store.load_cart();
        assert_eq!(rehydrated.item_count(), 2);
        assert_eq!(rehydrated.items[0].product, "Sunflower");
        assert_eq!(rehydrated.items[1].product, "Radish");
    }

    #[test]
    fn test_re_add_replaces_quantity() {
        let (storefront, _view) = storefront_with("re-add", |_| {});

        storefront.add_to_cart("Sunflower", Some(100), None);
        storefront.add_to_cart("Sunflower", Some(250), None);

        let response = storefront.get_cart();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 250);
    }

    #[test]
    fn test_clamp_applies_through_the_command() {
        let (storefront, _view) = storefront_with("clamp", |_| {});

        storefront.add_to_cart("Sunflower", Some(20), None);
        assert_eq!(storefront.get_cart().items[0].quantity, 50);

        storefront.add_to_cart("Radish", None, None);
        assert_eq!(storefront.get_cart().items[1].quantity, 50);
    }

    #[test]
    fn test_clear_cart_removes_persisted_state() {
        let (storefront, _view) = storefront_with("clear", |_| {});

        storefront.add_to_cart("Sunflower", Some(100), None);
        storefront.clear_cart();

        assert!(storefront.get_cart().items.is_empty());
        assert!(storefront.store.load_cart().is_empty());
    }
}
