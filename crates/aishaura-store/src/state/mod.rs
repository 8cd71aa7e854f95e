//! # State Types
//!
//! Multiple focused state types instead of one god-object:
//!
//! ```text
//! ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐
//! │   CatalogState   │ │    CartState     │ │    StoreConfig       │
//! │                  │ │                  │ │                      │
//! │  • product mirror│ │  • current cart  │ │  • UPI details       │
//! │  • replaced      │ │  • totals        │ │  • WhatsApp number   │
//! │    wholesale     │ │                  │ │  • endpoints, delays │
//! └──────────────────┘ └──────────────────┘ └──────────────────────┘
//! ```
//!
//! Each command touches only the state it needs.

mod cart;
mod catalog;
mod config;

pub use cart::{CartResponse, CartState, CartTotals};
pub use catalog::CatalogState;
pub use config::StoreConfig;
