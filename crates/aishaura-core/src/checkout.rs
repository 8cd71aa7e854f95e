//! # Checkout State Machine
//!
//! The 4-step checkout flow, held as authoritative data rather than
//! inferred from whatever the UI currently shows.
//!
//! ## State Diagram
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                                     │
//! │                                                                         │
//! │            cart non-empty        info valid        order accepted       │
//! │  ┌────────┐ ────────────► ┌──────────────┐ ────► ┌─────────┐ ────►     │
//! │  │ Review │               │ CustomerInfo │       │ Payment │            │
//! │  │  (1)   │ ◄──────────── │     (2)      │ ◄──── │   (3)   │            │
//! │  └───┬────┘     back      └──────────────┘  back └────┬────┘            │
//! │      │ back                                           │                 │
//! │      ▼                                                ▼                 │
//! │   (close)                                      ┌──────────────┐         │
//! │                                                │ Confirmation │         │
//! │                                                │     (4)      │         │
//! │                                                └──────────────┘         │
//! │                                                                         │
//! │  • Forward transitions are GUARDED (empty cart / invalid info block)   │
//! │  • Payment → Confirmation happens ONLY via a successful submission,    │
//! │    never a direct "next" action                                        │
//! │  • Backward from any step N>1 is always allowed; back from Review      │
//! │    closes the whole flow                                               │
//! │  • Opening checkout ALWAYS starts at Review - no partial-flow resume   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Re-entering Review or Payment must redraw summaries from live cart
//! state; the session deliberately stores no totals.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::types::{CustomerInfo, PaymentMethod};
use crate::validation::validate_customer_info;

// =============================================================================
// Checkout Step
// =============================================================================

/// The four checkout steps, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CheckoutStep {
    /// Step 1: cart review with the order summary.
    Review,
    /// Step 2: customer details form.
    CustomerInfo,
    /// Step 3: payment method + UPI code.
    Payment,
    /// Step 4: order confirmation. Terminal for the session.
    Confirmation,
}

impl CheckoutStep {
    /// The 1-based step number shown by the progress indicator.
    pub const fn number(&self) -> u8 {
        match self {
            CheckoutStep::Review => 1,
            CheckoutStep::CustomerInfo => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Confirmation => 4,
        }
    }

    /// The step before this one, if any.
    const fn previous(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Review => None,
            CheckoutStep::CustomerInfo => Some(CheckoutStep::Review),
            CheckoutStep::Payment => Some(CheckoutStep::CustomerInfo),
            CheckoutStep::Confirmation => Some(CheckoutStep::Payment),
        }
    }
}

// =============================================================================
// Back Action
// =============================================================================

/// Result of pressing "back": either a step to show, or close the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Move to (and render) this step.
    Step(CheckoutStep),
    /// Back from Review closes the checkout entirely.
    Close,
}

// =============================================================================
// Checkout Session
// =============================================================================

/// One pass through the checkout flow.
///
/// Ephemeral: never persisted, discarded when the flow closes. A new
/// session always starts at Review regardless of where a previous one
/// ended.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    step: CheckoutStep,
    customer: CustomerInfo,
    payment_method: PaymentMethod,
}

impl CheckoutSession {
    /// Opens a fresh session at the Review step.
    pub fn new() -> Self {
        CheckoutSession {
            step: CheckoutStep::Review,
            customer: CustomerInfo::default(),
            payment_method: PaymentMethod::default(),
        }
    }

    /// The current step - the single source of truth for what the UI shows.
    #[inline]
    pub fn current_step(&self) -> CheckoutStep {
        self.step
    }

    /// Customer info as last accepted by [`Self::submit_customer_info`].
    #[inline]
    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// The selected payment method (UPI unless the customer picked cash).
    #[inline]
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Review → CustomerInfo. Guarded: rejected while the cart is empty.
    pub fn continue_to_customer_info(&mut self, cart: &Cart) -> CoreResult<()> {
        if self.step != CheckoutStep::Review {
            return Err(CoreError::InvalidTransition {
                from: self.step,
                to: CheckoutStep::CustomerInfo,
            });
        }
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        self.step = CheckoutStep::CustomerInfo;
        Ok(())
    }

    /// CustomerInfo → Payment. Guarded by full field validation; on
    /// failure the step does not move and the session keeps its previous
    /// accepted info.
    pub fn submit_customer_info(&mut self, info: CustomerInfo) -> CoreResult<()> {
        if self.step != CheckoutStep::CustomerInfo {
            return Err(CoreError::InvalidTransition {
                from: self.step,
                to: CheckoutStep::Payment,
            });
        }
        validate_customer_info(&info)?;
        self.customer = info;
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    /// Marks a payment option active. A same-state side effect, not a
    /// transition.
    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Payment → Confirmation.
    ///
    /// Only the order-submission protocol calls this, after the server has
    /// accepted the order. There is no user-driven path to Confirmation.
    pub fn confirm(&mut self) -> CoreResult<()> {
        if self.step != CheckoutStep::Payment {
            return Err(CoreError::InvalidTransition {
                from: self.step,
                to: CheckoutStep::Confirmation,
            });
        }
        self.step = CheckoutStep::Confirmation;
        Ok(())
    }

    /// Steps backward. From Review the whole flow closes instead.
    pub fn back(&mut self) -> BackAction {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                BackAction::Step(previous)
            }
            None => BackAction::Close,
        }
    }
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
