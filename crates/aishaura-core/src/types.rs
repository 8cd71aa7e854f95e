//! # Domain Types
//!
//! Core domain types for the storefront client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ProductRecord  │   │  CustomerInfo   │   │  OrderReceipt   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  name           │   │  order_id       │       │
//! │  │  price (50 g)   │   │  phone          │   │  amount         │       │
//! │  │  stock units    │   │  email/address  │   │  phone (echo)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  StockStatus    │   │ PaymentMethod   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Available      │   │  Upi (default)  │                             │
//! │  │  LowStock (≤15) │   │  Cod            │                             │
//! │  │  OutOfStock     │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Products are keyed by their display name - the sheet has no other
//! identifier, and the cart references products by the same name.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::LOW_STOCK_UNITS;

// =============================================================================
// Product Record
// =============================================================================

/// A product as mirrored from the remote sheet.
///
/// Replaced wholesale on every catalog fetch; read-only from the cart's
/// perspective. Prices are per 50 g unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductRecord {
    /// Display name - the unique key for catalog and cart lookups.
    pub name: String,

    /// Marketing description shown in the product modal.
    #[serde(default)]
    pub description: Option<String>,

    /// Image path/URL for the gallery card.
    #[serde(default)]
    pub image: Option<String>,

    /// Price in paise per 50 g unit. Always > 0 for sellable products;
    /// unparsable sheet values arrive here as zero.
    pub price: Money,

    /// Pre-discount price, when the sheet advertises an offer.
    #[serde(default)]
    pub original_price: Option<Money>,

    /// Stock on hand, in 50 g units. Never negative; invalid sheet values
    /// arrive as zero (which renders as out of stock).
    #[serde(default)]
    pub quantity_available: i64,

    /// Average rating, 0-5. Recomputed from `customer_reviews` when the
    /// sheet value is missing or invalid.
    #[serde(default)]
    pub rating: f32,

    /// Review count. Falls back to `customer_reviews.len()` when the sheet
    /// value is missing or invalid.
    #[serde(default)]
    pub reviews: i64,

    /// Individual customer reviews, newest first as the sheet orders them.
    #[serde(default)]
    pub customer_reviews: Vec<CustomerReview>,

    /// Storage guidance ("Refrigerate in an airtight box").
    #[serde(default)]
    pub storage: Option<String>,

    /// Shelf-life text ("Best consumed within 7 days").
    #[serde(default)]
    pub shelf_life: Option<String>,

    /// Harvest-date text; "today"/"new" flags a fresh batch.
    #[serde(default)]
    pub harvest_date: Option<String>,
}

impl ProductRecord {
    /// Classifies the stock level for badges and add-to-cart gating.
    pub fn stock_status(&self) -> StockStatus {
        if self.quantity_available <= 0 {
            StockStatus::OutOfStock
        } else if self.quantity_available <= LOW_STOCK_UNITS {
            StockStatus::LowStock
        } else {
            StockStatus::Available
        }
    }

    /// Checks whether the product can be added to the cart at all.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity_available <= 0
    }

    /// True when an original price higher than the current price exists.
    pub fn has_offer(&self) -> bool {
        self.original_price.map_or(false, |orig| orig > self.price)
    }

    /// Discount percentage for the savings badge, when an offer applies.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || !original.is_positive() {
            return None;
        }
        let saved = (original - self.price).paise() as f64;
        Some((saved / original.paise() as f64 * 100.0).round() as u32)
    }
}

// =============================================================================
// Customer Review
// =============================================================================

/// A single customer review attached to a product.
///
/// Reviews arrive from a separate, loosely structured endpoint; the
/// normalization layer guarantees these defaults before they reach here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CustomerReview {
    /// Reviewer display name; "Anonymous" when the sheet row has none.
    pub name: String,

    /// Star rating, 0-5.
    pub rating: f32,

    /// Review text; empty when the row only carried a rating.
    pub text: String,

    /// Free-form date text; "Recently" when the sheet row has none.
    pub date: String,
}

// =============================================================================
// Stock Status
// =============================================================================

/// Stock classification driving badges and the add-to-cart gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum StockStatus {
    /// Plenty on hand.
    Available,
    /// 15 units or fewer left - shows the "Low Stock" badge.
    LowStock,
    /// Nothing left - add-to-cart is disabled.
    OutOfStock,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer intends to pay.
///
/// Payment confirmation is out-of-band (UPI deep link / cash at the door);
/// this is recorded on the order so the vendor knows what to expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PaymentMethod {
    /// UPI deep link / QR scan.
    #[default]
    Upi,
    /// Cash on delivery.
    Cod,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Upi => write!(f, "UPI"),
            PaymentMethod::Cod => write!(f, "Cash on Delivery"),
        }
    }
}

// =============================================================================
// Customer Info
// =============================================================================

/// Customer details collected at checkout step 2.
///
/// Validated by [`crate::validation::validate_customer_info`] before the
/// checkout may advance to payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Delivery notes; optional, passed through to the order verbatim.
    #[serde(default)]
    pub notes: String,
}

// =============================================================================
// Order Receipt
// =============================================================================

/// The confirmed result of a successful order submission.
///
/// `amount` prefers the server-echoed value over the locally computed
/// total - once the server has accepted the order it is the source of
/// truth for what the customer owes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderReceipt {
    /// Vendor order id, e.g. "AM-123". Always matches the vendor prefix;
    /// responses that don't are rejected before a receipt exists.
    pub order_id: String,

    /// Confirmed order amount.
    pub amount: Money,

    /// Customer phone, echoed for the receipt-share affordance.
    pub phone: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(stock: i64) -> ProductRecord {
        ProductRecord {
            name: "Sunflower".to_string(),
            description: None,
            image: None,
            price: Money::from_rupees(100),
            original_price: None,
            quantity_available: stock,
            rating: 4.5,
            reviews: 3,
            customer_reviews: Vec::new(),
            storage: None,
            shelf_life: None,
            harvest_date: None,
        }
    }

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(record(0).stock_status(), StockStatus::OutOfStock);
        assert_eq!(record(-2).stock_status(), StockStatus::OutOfStock);
        assert_eq!(record(1).stock_status(), StockStatus::LowStock);
        assert_eq!(record(15).stock_status(), StockStatus::LowStock);
        assert_eq!(record(16).stock_status(), StockStatus::Available);
    }

    #[test]
    fn test_discount_percent() {
        let mut p = record(20);
        assert_eq!(p.discount_percent(), None);
        assert!(!p.has_offer());

        p.original_price = Some(Money::from_rupees(125));
        assert!(p.has_offer());
        // (125 - 100) / 125 = 20%
        assert_eq!(p.discount_percent(), Some(20));

        // An "offer" at or below the current price is no offer at all
        p.original_price = Some(Money::from_rupees(100));
        assert_eq!(p.discount_percent(), None);
        assert!(!p.has_offer());
    }

    #[test]
    fn test_payment_method_serde_names() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Upi).unwrap(), "\"upi\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::Cod).unwrap(), "\"cod\"");
        assert_eq!(PaymentMethod::default(), PaymentMethod::Upi);
    }

    #[test]
    fn test_payment_method_display() {
        assert_eq!(PaymentMethod::Upi.to_string(), "UPI");
        assert_eq!(PaymentMethod::Cod.to_string(), "Cash on Delivery");
    }
}
