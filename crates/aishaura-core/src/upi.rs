//! # UPI Payment Links
//!
//! Builds the UPI deep link the payment step encodes as a QR code.
//!
//! ## Link Anatomy
//! ```text
//! upi://pay?pa=<payee id>&pn=<payee name>&am=<amount 2dp>&cu=INR&tn=<note>
//!           │             │               │               │       │
//!           │             │               │               │       └ order note
//!           │             │               │               └ currency, fixed
//!           │             │               └ total, regenerated on every
//!           │             │                 entry to the payment step
//!           │             └ business display name
//!           └ VPA the customer pays into
//! ```
//!
//! All dynamic fields are percent-encoded. The same URI backs three
//! affordances: the QR code, the "open payment app" button, and the
//! text fallback shown when no QR capability is available.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// UPI Details
// =============================================================================

/// The vendor's UPI collection details (configured, not user input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiDetails {
    /// Virtual payment address, e.g. `9738560719-0@airtel`.
    pub payee_id: String,
    /// Display name shown by the customer's payment app.
    pub payee_name: String,
    /// Transaction note attached to the payment.
    pub note: String,
}

impl UpiDetails {
    /// Builds the `upi://pay` deep link for the given total.
    pub fn payment_uri(&self, amount: Money) -> String {
        format!(
            "upi://pay?pa={}&pn={}&am={}&cu=INR&tn={}",
            urlencoding::encode(&self.payee_id),
            urlencoding::encode(&self.payee_name),
            amount.to_decimal_string(),
            urlencoding::encode(&self.note),
        )
    }

    /// Packages everything the payment step needs to render.
    pub fn payment_request(&self, amount: Money) -> PaymentRequest {
        PaymentRequest {
            uri: self.payment_uri(amount),
            payee_id: self.payee_id.clone(),
            amount,
        }
    }
}

// =============================================================================
// Payment Request
// =============================================================================

/// What the view receives when the payment step renders.
///
/// If the view has a QR capability it encodes `uri`; otherwise it shows
/// `payee_id` and `amount` as text with a manual "open payment app"
/// action launching the same `uri`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentRequest {
    pub uri: String,
    pub payee_id: String,
    pub amount: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
