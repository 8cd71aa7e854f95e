//! # Order Submission
//!
//! Serializes the confirmed cart + customer details into the flat
//! form-encoded payload the order script expects, POSTs it, and validates
//! the receipt before anyone treats the order as placed.
//!
//! ## Receipt Validation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST ──► HTTP error / non-2xx ──────────► hard failure                │
//! │       ──► 200 + unparsable body ─────────► hard failure                │
//! │       ──► 200 + missing/empty orderId ───► hard failure                │
//! │       ──► 200 + orderId without "AM-" ───► hard failure                │
//! │       ──► 200 + "AM-123" ────────────────► OrderAck                    │
//! │                                                                         │
//! │  A misconfigured Apps Script deployment returns 200 while recording    │
//! │  nothing; the orderId convention is the only signal we get that the    │
//! │  order actually landed in the sheet.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use aishaura_core::cart::Cart;
use aishaura_core::money::Money;
use aishaura_core::types::{CustomerInfo, PaymentMethod};

use crate::client::SheetsClient;
use crate::error::{SheetsError, SheetsResult};

// =============================================================================
// Order Payload
// =============================================================================

/// The flat form-encoded body the order script ingests.
///
/// One row in the vendor's order sheet; the cart is flattened into
/// human-readable `product` / `quantity` strings because that's what the
/// vendor reads when packing.
#[derive(Debug, Clone, Serialize)]
pub struct OrderPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub notes: String,
    /// Serializes as `upi` / `cod`.
    pub payment_method: PaymentMethod,
    /// Order total, exactly two decimals: `"199.50"`.
    pub amount: String,
    /// `"Sunflower (100g), Radish (50g)"`.
    pub product: String,
    /// Total grams with the unit suffix: `"150g"`.
    pub quantity: String,
}

impl OrderPayload {
    /// Assembles the payload from validated customer info and a non-empty
    /// cart. The total is computed from the live cart here, not from any
    /// previously rendered figure.
    pub fn new(customer: &CustomerInfo, cart: &Cart, payment_method: PaymentMethod) -> Self {
        let product = cart
            .items
            .iter()
            .map(|item| format!("{} ({}g)", item.product, item.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        OrderPayload {
            name: customer.name.trim().to_string(),
            phone: customer.phone.trim().to_string(),
            email: customer.email.trim().to_string(),
            address: customer.address.trim().to_string(),
            notes: customer.notes.trim().to_string(),
            payment_method,
            amount: cart.order_total().to_decimal_string(),
            product,
            quantity: format!("{}g", cart.total_grams()),
        }
    }
}

// =============================================================================
// Order Acknowledgement
// =============================================================================

/// Wire shape of the order script's reply.
#[derive(Debug, Deserialize)]
struct OrderResponse {
    #[serde(default, rename = "orderId")]
    order_id: Option<String>,
    #[serde(default)]
    amount: Option<Value>,
}

/// A validated submission receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderAck {
    /// Vendor order id; guaranteed to carry the configured prefix.
    pub order_id: String,
    /// Server-echoed amount, when the script sent a usable one. The
    /// server is the source of truth once it has accepted the order.
    pub amount: Option<Money>,
}

/// Applies the receipt rules to a parsed response.
fn validate_response(response: OrderResponse, prefix: &str) -> SheetsResult<OrderAck> {
    let order_id = response
        .order_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or(SheetsError::MissingOrderId)?;

    if !order_id.starts_with(prefix) {
        return Err(SheetsError::InvalidOrderId { order_id });
    }

    let amount = response.amount.as_ref().and_then(|v| match v {
        Value::Number(n) => n.as_f64().map(Money::from_rupee_value),
        Value::String(s) => Money::parse_rupees(s),
        _ => None,
    });

    Ok(OrderAck { order_id, amount })
}

// =============================================================================
// Submission
// =============================================================================

impl SheetsClient {
    /// Submits the order and validates the receipt.
    ///
    /// The single in-flight submission is gated upstream by the disabled
    /// submit control; this call is simply awaited to completion or
    /// failure - there is no cancellation.
    pub async fn submit_order(&self, payload: &OrderPayload) -> SheetsResult<OrderAck> {
        let response = self
            .http()
            .post(self.config().orders_url.as_str())
            .form(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status {
                status: status.as_u16(),
            });
        }

        let parsed: OrderResponse = response
            .json()
            .await
            .map_err(|e| SheetsError::Parse(e.to_string()))?;

        let ack = validate_response(parsed, &self.config().order_id_prefix)?;
        debug!(order_id = %ack.order_id, "order accepted");
        Ok(ack)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
