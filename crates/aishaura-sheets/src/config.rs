//! # Endpoint Configuration
//!
//! Where the spreadsheet endpoints live and how long we wait for them.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`AISHAURA_*`)
//! 2. Defaults (the vendor's deployed Apps Script URLs)
//!
//! Configuration is read-only after startup, so no locking is needed.

use std::time::Duration;

/// How long a remote read may take before it is abandoned and the caller
/// falls back. The original storefront aborted its fetches at 15 s.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Vendor order ids look like `AM-123`; anything else means the endpoint
/// accepted the POST without actually recording an order.
pub const DEFAULT_ORDER_ID_PREFIX: &str = "AM-";

/// Spreadsheet endpoint configuration.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Products Apps Script base URL. `?action=products` reads the
    /// catalog, `?action=updateQuantity&...` decrements stock.
    pub products_api_base: String,

    /// Reviews Apps Script URL (read-only, separate deployment).
    pub reviews_url: String,

    /// Order-submission Apps Script URL (form-encoded POST).
    pub orders_url: String,

    /// Required order-id prefix on submission receipts.
    pub order_id_prefix: String,

    /// Per-request timeout applied to every call.
    pub timeout: Duration,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        SheetsConfig {
            products_api_base:
                "https://script.google.com/macros/s/AKfycbzwV0e_Ygbg25D1u9-3aDIOa_eKbGpDxKnIrKKRHs_kiyylp4FYDON_0eUofu0RtOha9w/exec"
                    .to_string(),
            reviews_url:
                "https://script.google.com/macros/s/AKfycbzAI6b3XPOlXSW46pJPD-VFsJS5GogesuOb6ftgAPYPHTpzG5X23GdrfmDR-OnDnzN1/exec"
                    .to_string(),
            orders_url:
                "https://script.google.com/macros/s/AKfycbyaXzkzgg7-02Pr3uP57ComlaPPRsT4VBYDvSkGrc8qDQwchMuiJQeCRN6Amc9VLLKb/exec"
                    .to_string(),
            order_id_prefix: DEFAULT_ORDER_ID_PREFIX.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl SheetsConfig {
    /// Creates a SheetsConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `AISHAURA_PRODUCTS_API`: Override products base URL
    /// - `AISHAURA_REVIEWS_API`: Override reviews URL
    /// - `AISHAURA_ORDERS_API`: Override orders URL
    /// - `AISHAURA_FETCH_TIMEOUT_SECS`: Override timeout (seconds)
    pub fn from_env() -> Self {
        let mut config = SheetsConfig::default();

        if let Ok(url) = std::env::var("AISHAURA_PRODUCTS_API") {
            config.products_api_base = url;
        }

        if let Ok(url) = std::env::var("AISHAURA_REVIEWS_API") {
            config.reviews_url = url;
        }

        if let Ok(url) = std::env::var("AISHAURA_ORDERS_API") {
            config.orders_url = url;
        }

        if let Ok(secs) = std::env::var("AISHAURA_FETCH_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                config.timeout = Duration::from_secs(secs);
            }
        }

        config
    }
}
