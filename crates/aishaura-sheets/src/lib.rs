//! # aishaura-sheets: Remote Spreadsheet API Client
//!
//! The storefront's data lives in vendor-maintained spreadsheets exposed
//! through Apps Script web endpoints. This crate owns every call to them;
//! nothing else in the workspace touches the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Remote Data Flow                                 │
//! │                                                                         │
//! │   aishaura-store commands                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────── SheetsClient ──────────────────────────┐    │
//! │  │                                                                │    │
//! │  │  fetch_catalog ──► products + reviews, issued CONCURRENTLY    │    │
//! │  │                    and joined; 15 s client timeout bounds      │    │
//! │  │                    both                                        │    │
//! │  │                                                                │    │
//! │  │  submit_order  ──► form POST, receipt validated (orderId       │    │
//! │  │                    prefix) before anyone calls it a success    │    │
//! │  │                                                                │    │
//! │  │  reduce_quantity ─► best-effort stock decrement per product    │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │   Google Apps Script endpoints (spreadsheet-backed)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tolerant Wire Parsing
//! The sheets are hand-edited. Numbers arrive as numbers, numeric strings,
//! or junk; review payloads come in four known shapes. Wire types here
//! absorb that mess and hand clean [`aishaura_core`] domain types upward.

pub mod client;
pub mod config;
pub mod error;
pub mod orders;
pub mod products;
pub mod reviews;

pub(crate) mod coerce;

pub use client::SheetsClient;
pub use config::SheetsConfig;
pub use error::{SheetsError, SheetsResult};
pub use orders::{OrderAck, OrderPayload};
pub use products::QuantityUpdate;
