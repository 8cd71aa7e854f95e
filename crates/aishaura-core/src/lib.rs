//! # aishaura-core: Pure Business Logic for the Aishaura Storefront
//!
//! This crate is the **heart** of the storefront client. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Aishaura Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Web Frontend                               │   │
//! │  │    Gallery ──► Cart Drawer ──► Checkout Modal ──► Confirmation │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ StorefrontView trait                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    aishaura-store commands                      │   │
//! │  │    add_to_cart, open_checkout, place_order, etc.               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aishaura-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │ checkout  │  │ validation│  │   │
//! │  │   │   Money   │  │   Cart    │  │  Session  │  │   rules   │  │   │
//! │  │   │  (paise)  │  │ LineItem  │  │   steps   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                aishaura-sheets (Remote API Client)              │   │
//! │  │        products fetch, reviews fetch, order submission          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer paise arithmetic (no floating point!)
//! - [`types`] - Domain types (ProductRecord, CustomerInfo, OrderReceipt, ...)
//! - [`catalog`] - In-memory mirror of the remote product sheet
//! - [`cart`] - Cart and line-item rules (50 g units, snapshot pricing)
//! - [`checkout`] - The 4-step checkout state machine
//! - [`validation`] - Customer-info validation rules
//! - [`upi`] - UPI payment deep-link builder
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, storage, and rendering access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use aishaura_core::cart::Cart;
//! use aishaura_core::money::Money;
//!
//! let mut cart = Cart::new();
//!
//! // 100 g of sunflower microgreens at ₹100 per 50 g
//! cart.upsert("Sunflower", 100, Money::from_rupees(100));
//!
//! assert_eq!(cart.order_total(), Money::from_rupees(200));
//! assert_eq!(cart.order_total().format_inr(), "INR 200");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod upi;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use aishaura_core::Money` instead of
// `use aishaura_core::money::Money`

pub use cart::{Cart, CartLineItem};
pub use catalog::Catalog;
pub use checkout::{CheckoutSession, CheckoutStep};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Grams in one stock unit. Catalog stock and pricing are denominated
/// per unit; cart quantities are grams in multiples of this.
pub const GRAMS_PER_UNIT: i64 = 50;

/// Minimum order quantity in grams for a single line item.
///
/// ## Business Reason
/// The farm packs microgreens in 50 g punnets; nothing smaller ships.
/// Any lower or unparsable quantity is clamped up to this value.
pub const MIN_LINE_GRAMS: i64 = 50;

/// Stock level at or below which a product is flagged as low stock.
pub const LOW_STOCK_UNITS: i64 = 15;
