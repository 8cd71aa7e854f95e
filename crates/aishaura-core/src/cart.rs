//! # Cart Module
//!
//! The shopping cart model and its pricing rules.
//!
//! ## Cart Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Invariants                                 │
//! │                                                                         │
//! │  • At most ONE line item per product name                              │
//! │    (re-adding a product REPLACES its quantity, it does not stack)      │
//! │                                                                         │
//! │  • Quantities are grams; minimum 50 g, stepped in 50 g units           │
//! │    (anything lower or unparsable clamps to exactly 50)                 │
//! │                                                                         │
//! │  • Prices are snapshots: the per-50 g price is frozen into the         │
//! │    line item at add/update time                                        │
//! │                                                                         │
//! │  • Insertion order is add order and survives removal of other items    │
//! │                                                                         │
//! │  • Totals are NEVER cached - every call recomputes from live items,    │
//! │    so a cart edit mid-checkout can't leave a stale total behind        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing
//! `line_total = price × quantity / 50` - a 100 g line at ₹100/50 g costs
//! ₹200. Delivery is always free (fixed business rule, not computed).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{GRAMS_PER_UNIT, MIN_LINE_GRAMS};

// =============================================================================
// Cart Line Item
// =============================================================================

/// One product entry in the cart.
///
/// This triple is exactly the persisted shape - the durable cart key holds
/// a JSON array of these and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    /// Product name - references a catalog entry known at add time.
    pub product: String,

    /// Quantity in grams. At least 50; normally a multiple of 50.
    pub quantity: i64,

    /// Snapshot of the per-50 g price at add/update time.
    pub price: Money,
}

impl CartLineItem {
    /// Calculates this line's total: `price × quantity / 50`.
    ///
    /// Integer paise math throughout; off-grid quantities round to the
    /// nearest paisa.
    pub fn line_total(&self) -> Money {
        let paise = (self.price.paise() as i128 * self.quantity as i128
            + (GRAMS_PER_UNIT as i128 / 2))
            / GRAMS_PER_UNIT as i128;
        Money::from_paise(paise as i64)
    }

    /// Number of whole 50 g packs this line represents, rounded up.
    ///
    /// Used by the inventory-decrement call after a confirmed order.
    pub fn packs(&self) -> i64 {
        (self.quantity + GRAMS_PER_UNIT - 1) / GRAMS_PER_UNIT
    }
}

// =============================================================================
// Quantity Clamping
// =============================================================================

/// Normalizes a requested quantity to the cart's rules.
///
/// `None` models unparsable input from the quantity stepper; it and
/// anything below the minimum clamp to exactly [`MIN_LINE_GRAMS`].
///
/// ## Example
/// ```rust
/// use aishaura_core::cart::clamp_quantity;
///
/// assert_eq!(clamp_quantity(Some(100)), 100);
/// assert_eq!(clamp_quantity(Some(20)), 50);
/// assert_eq!(clamp_quantity(Some(-5)), 50);
/// assert_eq!(clamp_quantity(None), 50);
/// ```
pub fn clamp_quantity(grams: Option<i64>) -> i64 {
    grams.unwrap_or(MIN_LINE_GRAMS).max(MIN_LINE_GRAMS)
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of line items, insertion order
/// = add order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from persisted line items (rehydration path).
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        Cart { items }
    }

    /// Adds a product or replaces its existing line item.
    ///
    /// ## Behavior
    /// - Quantity is clamped to the 50 g minimum first
    /// - If the product is already in the cart, its quantity AND price
    ///   snapshot are replaced (the last add wins - quantities do not stack)
    /// - Otherwise a new line item is appended
    ///
    /// Catalog membership is the caller's concern; the cart itself accepts
    /// any name.
    pub fn upsert(&mut self, product: &str, quantity: i64, price: Money) {
        let quantity = clamp_quantity(Some(quantity));

        if let Some(item) = self.items.iter_mut().find(|i| i.product == product) {
            item.quantity = quantity;
            item.price = price;
            return;
        }

        self.items.push(CartLineItem {
            product: product.to_string(),
            quantity,
            price,
        });
    }

    /// Updates the quantity of the line item at `index`.
    ///
    /// Quantities below the 50 g minimum are ignored (the stepper cannot
    /// go lower; removal is an explicit separate action).
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> bool {
        if quantity < MIN_LINE_GRAMS {
            return false;
        }
        match self.items.get_mut(index) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes the line item at `index`.
    ///
    /// An out-of-range index is a no-op returning `None` - remaining items
    /// keep their order either way.
    pub fn remove(&mut self, index: usize) -> Option<CartLineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of line items (distinct products).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all items, in grams.
    pub fn total_grams(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the order subtotal.
    ///
    /// Recomputed from live items on every call - no caching.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Delivery fee. Always free - a business rule, not a computation.
    pub fn delivery_fee(&self) -> Money {
        Money::zero()
    }

    /// Calculates the order total (subtotal + delivery).
    pub fn order_total(&self) -> Money {
        self.subtotal() + self.delivery_fee()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_appends_new_items_in_order() {
        let mut cart = Cart::new();
        cart.upsert("Sunflower", 100, Money::from_rupees(100));
        cart.upsert("Radish", 50, Money::from_rupees(80));

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.items[0].product, "Sunflower");
        assert_eq!(cart.items[1].product, "Radish");
    }

    #[test]
    fn test_upsert_same_product_replaces_quantity_and_price() {
        let mut cart = Cart::new();
        cart.upsert("Sunflower", 100, Money::from_rupees(100));
        cart.upsert("Sunflower", 150, Money::from_rupees(90));
        cart.upsert("Sunflower", 50, Money::from_rupees(90));

        // Exactly one line item for the name, holding the LAST call's values
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 50);
        assert_eq!(cart.items[0].price, Money::from_rupees(90));
    }

    #[test]
    fn test_quantity_clamps_to_minimum() {
        let mut cart = Cart::new();
        cart.upsert("Sunflower", 20, Money::from_rupees(100));
        assert_eq!(cart.items[0].quantity, 50);

        cart.upsert("Radish", -10, Money::from_rupees(80));
        assert_eq!(cart.items[1].quantity, 50);

        assert_eq!(clamp_quantity(None), 50);
        assert_eq!(clamp_quantity(Some(0)), 50);
        assert_eq!(clamp_quantity(Some(250)), 250);
    }

    #[test]
    fn test_line_total_math() {
        // 100 g at ₹100 per 50 g = ₹200
        let item = CartLineItem {
            product: "Sunflower".to_string(),
            quantity: 100,
            price: Money::from_rupees(100),
        };
        assert_eq!(item.line_total(), Money::from_rupees(200));
        assert_eq!(item.line_total().format_inr(), "INR 200");

        // 50 g at ₹87.50 per 50 g = ₹87.50
        let item = CartLineItem {
            product: "Pea Shoot".to_string(),
            quantity: 50,
            price: Money::from_paise(8750),
        };
        assert_eq!(item.line_total(), Money::from_paise(8750));
    }

    #[test]
    fn test_order_total_is_additive() {
        let mut cart = Cart::new();
        assert_eq!(cart.order_total(), Money::zero());

        cart.upsert("Sunflower", 100, Money::from_rupees(100));
        cart.upsert("Radish", 150, Money::from_rupees(80));

        let expected: Money = cart.items.iter().map(CartLineItem::line_total).sum();
        assert_eq!(cart.order_total(), expected);
        assert_eq!(cart.order_total(), Money::from_rupees(200 + 240));

        // Delivery never adds anything
        assert_eq!(cart.delivery_fee(), Money::zero());
        assert_eq!(cart.order_total(), cart.subtotal());
    }

    #[test]
    fn test_remove_preserves_order_and_tolerates_bad_index() {
        let mut cart = Cart::new();
        cart.upsert("A", 50, Money::from_rupees(10));
        cart.upsert("B", 50, Money::from_rupees(20));
        cart.upsert("C", 50, Money::from_rupees(30));

        let removed = cart.remove(1);
        assert_eq!(removed.unwrap().product, "B");
        assert_eq!(cart.items[0].product, "A");
        assert_eq!(cart.items[1].product, "C");

        // Out-of-range removal is a no-op, not a panic
        assert!(cart.remove(7).is_none());
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_update_quantity_rules() {
        let mut cart = Cart::new();
        cart.upsert("A", 50, Money::from_rupees(10));

        assert!(cart.update_quantity(0, 150));
        assert_eq!(cart.items[0].quantity, 150);

        // Below the minimum: rejected, quantity unchanged
        assert!(!cart.update_quantity(0, 20));
        assert_eq!(cart.items[0].quantity, 150);

        // Unknown index: rejected
        assert!(!cart.update_quantity(5, 100));
    }

    #[test]
    fn test_total_grams_and_packs() {
        let mut cart = Cart::new();
        cart.upsert("A", 100, Money::from_rupees(10));
        cart.upsert("B", 50, Money::from_rupees(20));

        assert_eq!(cart.total_grams(), 150);
        assert_eq!(cart.items[0].packs(), 2);
        assert_eq!(cart.items[1].packs(), 1);

        // Off-grid quantities round packs up
        let item = CartLineItem {
            product: "C".to_string(),
            quantity: 120,
            price: Money::from_rupees(10),
        };
        assert_eq!(item.packs(), 3);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.upsert("A", 50, Money::from_rupees(10));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.order_total(), Money::zero());
    }

    #[test]
    fn test_persisted_shape_is_the_bare_triple() {
        let item = CartLineItem {
            product: "Sunflower".to_string(),
            quantity: 100,
            price: Money::from_rupees(100),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"product": "Sunflower", "quantity": 100, "price": 10000})
        );
    }
}
