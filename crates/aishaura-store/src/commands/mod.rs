//! # Command Surface
//!
//! Named operations the frontend drives, grouped by concern. All of them
//! are methods on [`crate::Storefront`]:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart.rs      add_to_cart, update_quantity, remove_from_cart,          │
//! │               clear_cart                                                │
//! │  checkout.rs  open_checkout, continue_to_customer_info,                 │
//! │               submit_customer_info, select_payment, go_back,            │
//! │               close_checkout                                            │
//! │  order.rs     place_order (the submission protocol)                     │
//! │  catalog.rs   load_catalog, refresh_after_order                         │
//! │  contact.rs   share links, badge counter, dismissal flag                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands are synchronous with respect to user events: the frontend
//! awaits one before issuing the next, so no two cart mutations ever
//! interleave mid-update.

mod cart;
mod catalog;
mod checkout;
mod contact;
mod order;
