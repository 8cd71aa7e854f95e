//! # Order Submission Protocol
//!
//! The one command with real consequences. Linear, no cancellation:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. snapshot session (must be at Payment) + cart (must be non-empty)   │
//! │  2. disable the submit control                                         │
//! │  3. POST the form-encoded payload                                      │
//! │     ├─ transport / receipt failure ──► toast "Order failed: ...",      │
//! │     │                                  cart UNTOUCHED, still step 3    │
//! │     └─ validated receipt ──► Confirmation step + receipt render        │
//! │  4. best-effort inventory decrement, one product at a time;            │
//! │     failures are logged and NEVER touch the confirmed order            │
//! │  5. re-enable the submit control (always, success or failure)          │
//! │  6. success only: wait the configured beat, then clear the cart and    │
//! │     its persisted state                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use aishaura_core::cart::Cart;
use aishaura_core::types::OrderReceipt;
use aishaura_sheets::OrderPayload;

use crate::error::StoreError;
use crate::view::Notification;
use crate::Storefront;

impl Storefront {
    /// Submits the order and, on success, walks the session to
    /// Confirmation and clears the cart after a short beat.
    ///
    /// The submit control is disabled for the whole attempt and re-enabled
    /// unconditionally - a failed order must leave the button pressable
    /// for a retry.
    pub async fn place_order(&self) -> Result<OrderReceipt, StoreError> {
        self.view.set_submit_enabled(false);
        let result = self.try_place_order().await;
        self.view.set_submit_enabled(true);

        match &result {
            Ok(receipt) => {
                info!(order_id = %receipt.order_id, "order placed");
                // Let the confirmation render before the drawer empties.
                tokio::time::sleep(self.config.cart_clear_delay).await;
                self.clear_cart();
            }
            Err(err) => {
                self.view
                    .notify(&Notification::error("Order failed", err.message.clone()));
            }
        }

        result
    }

    async fn try_place_order(&self) -> Result<OrderReceipt, StoreError> {
        // Snapshot everything up front; the session lock is never held
        // across an await.
        let (customer, payment_method) = {
            let guard = self.session.lock().expect("Session mutex poisoned");
            let session = guard
                .as_ref()
                .ok_or_else(|| StoreError::checkout("Checkout is not open"))?;
            if session.current_step() != aishaura_core::CheckoutStep::Payment {
                return Err(StoreError::checkout(
                    "Order can only be placed from the payment step",
                ));
            }
            (session.customer().clone(), session.payment_method())
        };

        let cart = self.cart.snapshot();
        if cart.is_empty() {
            return Err(StoreError::from(aishaura_core::CoreError::EmptyCart));
        }

        let payload = OrderPayload::new(&customer, &cart, payment_method);
        debug!(amount = %payload.amount, items = cart.item_count(), "submitting order");

        let ack = self.sheets.submit_order(&payload).await?;

        // The server's echoed amount wins over the local computation.
        let receipt = OrderReceipt {
            order_id: ack.order_id,
            amount: ack.amount.unwrap_or_else(|| cart.order_total()),
            phone: customer.phone.clone(),
        };

        {
            let mut guard = self.session.lock().expect("Session mutex poisoned");
            if let Some(session) = guard.as_mut() {
                session.confirm().map_err(StoreError::from)?;
            }
        }
        self.view.render_confirmation(&receipt);

        self.reduce_ordered_quantities(&cart).await;

        Ok(receipt)
    }

    /// Fire-and-forget stock decrements, one product at a time.
    ///
    /// A failure on one product never blocks the next, and nothing here
    /// can roll back the confirmation the customer is already looking at.
    async fn reduce_ordered_quantities(&self, cart: &Cart) {
        for item in &cart.items {
            let packs = item.packs();
            match self.sheets.reduce_quantity(&item.product, packs).await {
                Ok(update) => debug!(
                    product = %item.product,
                    packs,
                    previous = ?update.previous_quantity,
                    new = ?update.new_quantity,
                    "stock reduced"
                ),
                Err(err) => warn!(
                    product = %item.product,
                    packs,
                    error = %err,
                    "could not reduce stock; order is unaffected"
                ),
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::testing::{spawn_endpoint, storefront_with};
    use aishaura_core::money::Money;
    use aishaura_core::types::CustomerInfo;

    fn checkout_to_payment(storefront: &crate::Storefront) {
        storefront.add_to_cart("Sunflower", Some(100), None);
        storefront.open_checkout();
        storefront.continue_to_customer_info().unwrap();
        storefront
            .submit_customer_info(CustomerInfo {
                name: "Asha".to_string(),
                phone: "9876543210".to_string(),
                email: "asha@example.com".to_string(),
                address: "12 Green Lane".to_string(),
                notes: String::new(),
            })
            .unwrap();
    }

    #[tokio::test]
    async fn test_successful_order_confirms_and_clears() {
        let orders = spawn_endpoint("200 OK", r#"{"orderId":"AM-123","amount":"199.50"}"#);
        let (storefront, view) = storefront_with("order-ok", move |config| {
            config.sheets.orders_url = orders;
        });
        checkout_to_payment(&storefront);

        let receipt = storefront.place_order().await.unwrap();

        // Server-echoed amount wins over the locally computed ₹200
        assert_eq!(receipt.order_id, "AM-123");
        assert_eq!(receipt.amount, Money::from_paise(19950));
        assert_eq!(receipt.phone, "9876543210");

        assert!(view.saw("confirmed:#AM-123:₹199.50"));
        assert_eq!(storefront.checkout_step().unwrap().number(), 4);

        // Cart cleared in memory and on disk after the beat
        assert!(storefront.get_cart().items.is_empty());
        assert!(storefront.store.load_cart().is_empty());

        // Submit control cycled off and back on
        let events = view.events();
        let off = events.iter().position(|e| e == "submit-enabled:false").unwrap();
        let on = events.iter().position(|e| e == "submit-enabled:true").unwrap();
        assert!(off < on);
    }

    #[tokio::test]
    async fn test_wrong_prefix_receipt_fails_and_preserves_cart() {
        let orders = spawn_endpoint("200 OK", r#"{"orderId":"XYZ-1"}"#);
        let (storefront, view) = storefront_with("order-prefix", move |config| {
            config.sheets.orders_url = orders;
        });
        checkout_to_payment(&storefront);

        let err = storefront.place_order().await.unwrap_err();
        assert!(err.message.contains("invalid order ID"));

        // Cart untouched, still on the payment step, ready for a retry
        assert_eq!(storefront.get_cart().items.len(), 1);
        assert_eq!(storefront.checkout_step().unwrap().number(), 3);
        assert!(view.saw("notify:Error:Order failed"));
        assert!(view.saw("submit-enabled:true"));
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_and_preserves_cart() {
        let orders = spawn_endpoint("503 Service Unavailable", r#"{"error":"down"}"#);
        let (storefront, view) = storefront_with("order-503", move |config| {
            config.sheets.orders_url = orders;
        });
        checkout_to_payment(&storefront);

        let err = storefront.place_order().await.unwrap_err();
        assert!(err.message.contains("503"));

        assert_eq!(storefront.get_cart().items.len(), 1);
        assert!(view.saw("submit-enabled:true"));
        assert!(!view.saw("confirmed"));
    }

    #[tokio::test]
    async fn test_missing_order_id_is_a_hard_failure() {
        let orders = spawn_endpoint("200 OK", r#"{"amount":"200.00"}"#);
        let (storefront, _view) = storefront_with("order-noid", move |config| {
            config.sheets.orders_url = orders;
        });
        checkout_to_payment(&storefront);

        let err = storefront.place_order().await.unwrap_err();
        assert!(err.message.contains("Missing order ID"));
        assert_eq!(storefront.get_cart().items.len(), 1);
    }

    #[tokio::test]
    async fn test_decrement_failures_never_touch_the_confirmation() {
        // Orders succeed; the products endpoint (decrements) is unroutable
        let orders = spawn_endpoint("200 OK", r#"{"orderId":"AM-77"}"#);
        let (storefront, view) = storefront_with("order-decrement", move |config| {
            config.sheets.orders_url = orders;
        });
        checkout_to_payment(&storefront);

        let receipt = storefront.place_order().await.unwrap();

        // No echoed amount: the local total stands
        assert_eq!(receipt.amount, Money::from_rupees(200));
        assert!(view.saw("confirmed:#AM-77"));
        assert_eq!(storefront.checkout_step().unwrap().number(), 4);
    }

    #[tokio::test]
    async fn test_place_order_requires_payment_step() {
        let (storefront, _view) = storefront_with("order-step", |_| {});
        storefront.add_to_cart("Sunflower", Some(100), None);
        storefront.open_checkout();

        let err = storefront.place_order().await.unwrap_err();
        assert!(err.message.contains("payment step"));
    }
}
