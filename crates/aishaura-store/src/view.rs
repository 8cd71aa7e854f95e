//! # View Seam
//!
//! The storefront renders nothing itself. Every pixel belongs to the web
//! frontend; this trait is the entire contract between the two.
//!
//! ## Why a Trait
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A storefront that reads checkout state back OUT of the DOM (inline    │
//! │  styles deciding "which step are we on") cannot be tested without a    │
//! │  browser. Here the state machine is authoritative and rendering is a   │
//! │  pure projection of it:                                                │
//! │                                                                         │
//! │      commands ──► state change ──► view.render_*(fresh data)          │
//! │                                                                         │
//! │  which is also what makes every checkout property testable with a      │
//! │  recording fake instead of a browser.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Order summaries handed to the view are rebuilt from live cart state on
//! every render; nothing here is cached.

use serde::Serialize;
use tracing::{debug, info};

use aishaura_core::cart::Cart;
use aishaura_core::checkout::CheckoutStep;
use aishaura_core::money::Money;
use aishaura_core::types::OrderReceipt;
use aishaura_core::upi::PaymentRequest;

use crate::state::CartTotals;

// =============================================================================
// Notifications
// =============================================================================

/// Toast flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

/// A user-visible toast.
///
/// Messages are short and human; anything technical belongs in the log.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// One rendered line of the checkout summary: `"Sunflower (100g)" ₹200`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub amount: Money,
}

/// The order summary shown on the review and payment steps.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<SummaryLine>,
    pub subtotal: Money,
    /// Always zero; rendered as "FREE".
    pub delivery: Money,
    pub total: Money,
}

impl OrderSummary {
    /// Builds a summary from the live cart. Called on every render of a
    /// summary-bearing step, so totals can never go stale after a
    /// mid-checkout cart edit.
    pub fn from_cart(cart: &Cart) -> Self {
        OrderSummary {
            lines: cart
                .items
                .iter()
                .map(|item| SummaryLine {
                    label: format!("{} ({}g)", item.product, item.quantity),
                    amount: item.line_total(),
                })
                .collect(),
            subtotal: cart.subtotal(),
            delivery: cart.delivery_fee(),
            total: cart.order_total(),
        }
    }
}

// =============================================================================
// The View Trait
// =============================================================================

/// Everything the presentation layer must provide.
pub trait StorefrontView: Send + Sync {
    /// Redraws the cart drawer (count, items, totals).
    fn render_cart(&self, cart: &Cart, totals: &CartTotals);

    /// Shows a checkout step with a freshly computed summary.
    fn render_checkout_step(&self, step: CheckoutStep, summary: &OrderSummary);

    /// Encodes the payment URI as a scannable code.
    ///
    /// Returns `false` when no QR capability is available, in which case
    /// [`Self::render_payment_fallback`] follows with the text version.
    fn render_payment_code(&self, request: &PaymentRequest) -> bool;

    /// Text fallback: raw payee id + amount + a manual "open payment app"
    /// action launching `request.uri`.
    fn render_payment_fallback(&self, request: &PaymentRequest);

    /// Shows the confirmation step with the validated receipt.
    fn render_confirmation(&self, receipt: &OrderReceipt);

    /// Closes the checkout flow (modal) entirely.
    fn close_checkout(&self);

    /// Disables/enables the place-order control around a submission.
    fn set_submit_enabled(&self, enabled: bool);

    /// Shows a toast.
    fn notify(&self, notification: &Notification);
}

// =============================================================================
// Log View
// =============================================================================

/// Headless view that narrates renders into the log. Useful for smoke
/// runs and as the default when no frontend is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogView;

impl StorefrontView for LogView {
    fn render_cart(&self, _cart: &Cart, totals: &CartTotals) {
        debug!(items = totals.item_count, total = %totals.total, "render cart");
    }

    fn render_checkout_step(&self, step: CheckoutStep, summary: &OrderSummary) {
        debug!(step = step.number(), total = %summary.total, "render checkout step");
    }

    fn render_payment_code(&self, _request: &PaymentRequest) -> bool {
        // No QR capability attached; callers fall back to text.
        false
    }

    fn render_payment_fallback(&self, request: &PaymentRequest) {
        info!(payee = %request.payee_id, amount = %request.amount, "payment fallback");
    }

    fn render_confirmation(&self, receipt: &OrderReceipt) {
        info!(order_id = %receipt.order_id, amount = %receipt.amount, "order confirmed");
    }

    fn close_checkout(&self) {
        debug!("close checkout");
    }

    fn set_submit_enabled(&self, enabled: bool) {
        debug!(enabled, "submit control");
    }

    fn notify(&self, notification: &Notification) {
        info!(kind = ?notification.kind, title = %notification.title, "{}", notification.message);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
