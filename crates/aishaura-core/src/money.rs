//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The sheet stores prices like 87.5 per 50 g. Summing a cart of          │
//! │  floats drifts; the UPI link then asks the customer for the wrong       │
//! │  amount by a paisa.                                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹87.50 = 8750 paise. All arithmetic is exact; only the display       │
//! │    layer ever sees a decimal point.                                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aishaura_core::money::Money;
//!
//! // Create from paise (preferred) or whole rupees
//! let price = Money::from_paise(8750); // ₹87.50
//! let round = Money::from_rupees(100); // ₹100.00
//!
//! // Arithmetic operations
//! let total = price + round;           // ₹187.50
//! assert_eq!(total.to_decimal_string(), "187.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paise (the smallest INR unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: headroom for any realistic order total
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a plain integer
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  ProductRecord.price ──► CartLineItem.price ──► line_total             │
/// │                                                      │                  │
/// │  order_total ──► UPI link "am=" ──► order payload "amount"             │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use aishaura_core::money::Money;
    ///
    /// let price = Money::from_paise(8750); // Represents ₹87.50
    /// assert_eq!(price.paise(), 8750);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use aishaura_core::money::Money;
    ///
    /// let price = Money::from_rupees(100);
    /// assert_eq!(price.paise(), 10_000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Converts a decimal rupee amount (as the sheet API sends it) to Money,
    /// rounding to the nearest paisa.
    ///
    /// Non-finite input maps to zero - the catalog treats invalid numeric
    /// fields as 0 rather than failing the whole fetch.
    pub fn from_rupee_value(rupees: f64) -> Self {
        if !rupees.is_finite() {
            return Money::zero();
        }
        Money((rupees * 100.0).round() as i64)
    }

    /// Parses a rupee amount from a string field.
    ///
    /// Accepts the forms the sheet has been seen to hold: `"100"`,
    /// `"87.5"`, `"₹100"`, `"1,250"`. Returns `None` when nothing numeric
    /// can be extracted.
    pub fn parse_rupees(text: &str) -> Option<Self> {
        let cleaned = text
            .trim()
            .trim_start_matches("INR")
            .trim_start_matches('₹')
            .replace(',', "");
        cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite()).map(Money::from_rupee_value)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value represents whole rupees with no paise part.
    #[inline]
    pub const fn is_whole_rupees(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Multiplies a per-unit price by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use aishaura_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(100); // ₹100 per 50 g
    /// let line_total = unit_price.multiply_units(2); // 100 g
    /// assert_eq!(line_total, Money::from_rupees(200));
    /// ```
    #[inline]
    pub const fn multiply_units(&self, units: i64) -> Self {
        Money(self.0 * units)
    }

    /// Renders the amount as a plain two-decimal string: `"199.50"`.
    ///
    /// This is the wire format: the UPI `am=` parameter and the order
    /// payload `amount` field both require exactly two decimal places.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }

    /// Renders the amount in the storefront's catalog format:
    /// `INR 1,23,456` for whole-rupee values, `INR 1,23,456.50` otherwise.
    ///
    /// ## Formatting Rules
    /// - Indian digit grouping: last three digits, then groups of two
    /// - Whole-rupee amounts drop the decimals entirely
    /// - Fractional amounts always show exactly two decimals
    ///
    /// This is a presentation contract, not a pricing one, but it must be
    /// applied consistently across cart, checkout, and confirmation views.
    pub fn format_inr(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let grouped = group_indian(self.rupees().unsigned_abs());
        if self.is_whole_rupees() {
            format!("INR {}{}", sign, grouped)
        } else {
            format!("INR {}{}.{:02}", sign, grouped, self.paise_part())
        }
    }
}

/// Applies Indian digit grouping: `1234567` becomes `12,34,567`.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money the way the cart drawer does:
/// a rupee sign and a fixed two-decimal amount, e.g. `₹199.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for unit-count calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, units: i64) -> Self {
        Money(self.0 * units)
    }
}

/// Sums an iterator of Money values (used by cart totals).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Serde Adapters for Sheet Values
// =============================================================================

/// Serde adapter for fields the sheet stores as decimal rupees.
///
/// The Apps Script endpoint is backed by hand-edited spreadsheet cells, so
/// a price may arrive as a JSON number (`87.5`), a numeric string
/// (`"87.5"`, `"₹87.50"`), or junk. Deserialization is tolerant: anything
/// unparsable becomes zero rather than failing the whole catalog fetch.
///
/// ## Usage
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct ProductRow {
///     #[serde(default, with = "money::rupees")]
///     price: Money,
///     #[serde(default, with = "money::rupees::option")]
///     original_price: Option<Money>,
/// }
/// ```
pub mod rupees {
    use serde::de::Deserializer;
    use serde::ser::Serializer;
    use serde::Deserialize;
    use serde_json::Value;

    use super::Money;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.paise() as f64 / 100.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(from_value(&value).unwrap_or_else(Money::zero))
    }

    /// Best-effort conversion from a raw JSON value to Money.
    pub(crate) fn from_value(value: &Value) -> Option<Money> {
        match value {
            Value::Number(n) => n.as_f64().map(Money::from_rupee_value),
            Value::String(s) => Money::parse_rupees(s),
            _ => None,
        }
    }

    /// Variant for optional fields: invalid or absent values become `None`
    /// instead of zero (used for `originalPrice`, where zero would read as
    /// a 100% discount).
    pub mod option {
        use serde::de::Deserializer;
        use serde::ser::Serializer;
        use serde::Deserialize;
        use serde_json::Value;

        use super::Money;

        pub fn serialize<S: Serializer>(
            money: &Option<Money>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match money {
                Some(m) => serializer.serialize_f64(m.paise() as f64 / 100.0),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Money>, D::Error> {
            let value = Value::deserialize(deserializer)?;
            Ok(super::from_value(&value))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
