//! # Checkout Commands
//!
//! Drives the [`CheckoutSession`] state machine and projects each step to
//! the view. Transition rules live in `aishaura-core`; this layer adds
//! the side effects: fresh summaries, QR regeneration, warnings.
//!
//! ## Step Rendering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Review        summary rebuilt from live cart                          │
//! │  CustomerInfo  form; summary passed along for the sidebar              │
//! │  Payment       summary rebuilt + payment code REGENERATED from the     │
//! │                live total (re-entering after a cart edit must never    │
//! │                show yesterday's QR)                                    │
//! │  Confirmation  rendered by the order protocol with the receipt        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use aishaura_core::checkout::{BackAction, CheckoutSession, CheckoutStep};
use aishaura_core::types::{CustomerInfo, PaymentMethod};

use crate::error::StoreError;
use crate::view::{Notification, OrderSummary};
use crate::Storefront;

impl Storefront {
    /// Opens the checkout modal at the Review step.
    ///
    /// Always a FRESH session - a previously abandoned checkout never
    /// resumes halfway through.
    pub fn open_checkout(&self) {
        debug!("open_checkout");
        *self.session.lock().expect("Session mutex poisoned") = Some(CheckoutSession::new());
        self.render_step(CheckoutStep::Review);
    }

    /// Review → CustomerInfo. Warns and stays put when the cart is empty.
    pub fn continue_to_customer_info(&self) -> Result<(), StoreError> {
        let cart = self.cart.snapshot();

        let result = self.with_session(|session| session.continue_to_customer_info(&cart));

        match result {
            Ok(()) => {
                self.render_step(CheckoutStep::CustomerInfo);
                Ok(())
            }
            Err(err) => {
                self.view
                    .notify(&Notification::error("Cannot continue", err.message.clone()));
                Err(err)
            }
        }
    }

    /// CustomerInfo → Payment, guarded by validation. On failure the
    /// message is surfaced and the step does not move.
    pub fn submit_customer_info(&self, info: CustomerInfo) -> Result<(), StoreError> {
        let result = self.with_session(|session| session.submit_customer_info(info));

        match result {
            Ok(()) => {
                self.render_step(CheckoutStep::Payment);
                Ok(())
            }
            Err(err) => {
                self.view.notify(&Notification::error(
                    "Please check the form",
                    err.message.clone(),
                ));
                Err(err)
            }
        }
    }

    /// Marks a payment option active (same-state side effect).
    pub fn select_payment(&self, method: PaymentMethod) -> Result<(), StoreError> {
        self.with_session(|session| {
            session.select_payment(method);
            Ok(())
        })
    }

    /// Steps backward; from Review this closes the flow.
    pub fn go_back(&self) {
        let action = {
            let mut guard = self.session.lock().expect("Session mutex poisoned");
            guard.as_mut().map(CheckoutSession::back)
        };

        match action {
            Some(BackAction::Step(step)) => self.render_step(step),
            Some(BackAction::Close) | None => self.close_checkout(),
        }
    }

    /// Closes the checkout flow and discards the session.
    pub fn close_checkout(&self) {
        debug!("close_checkout");
        *self.session.lock().expect("Session mutex poisoned") = None;
        self.view.close_checkout();
    }

    /// Projects a step to the view with data computed from LIVE state.
    pub(crate) fn render_step(&self, step: CheckoutStep) {
        let summary = self.cart.with_cart(OrderSummary::from_cart);
        self.view.render_checkout_step(step, &summary);

        if step == CheckoutStep::Payment {
            // Regenerate the payment code on every entry - the total may
            // have changed since the last visit to this step.
            let request = self.config.upi.payment_request(summary.total);
            if !self.view.render_payment_code(&request) {
                self.view.render_payment_fallback(&request);
            }
        }
    }

    /// Runs a closure against the open session, mapping "no checkout open"
    /// and state-machine rejections onto [`StoreError`].
    fn with_session<T>(
        &self,
        f: impl FnOnce(&mut CheckoutSession) -> Result<T, aishaura_core::CoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.session.lock().expect("Session mutex poisoned");
        let session = guard
            .as_mut()
            .ok_or_else(|| StoreError::checkout("Checkout is not open"))?;
        f(session).map_err(StoreError::from)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
