//! # Catalog Commands
//!
//! Startup and post-order catalog loads. The fetch itself (concurrent
//! products + reviews, joined) lives in `aishaura-sheets`; this layer
//! owns the fallback rule: a failed product fetch means an EMPTY catalog,
//! never stale or invented data.

use tracing::{info, warn};

use crate::view::Notification;
use crate::Storefront;

impl Storefront {
    /// Fetches the catalog and installs it wholesale.
    ///
    /// ## Fallback
    /// - product fetch failed → empty catalog (logged)
    /// - review fetch failed → catalog without merged reviews (logged
    ///   inside the client)
    ///
    /// Returns the number of products now available.
    pub async fn load_catalog(&self) -> usize {
        match self.sheets.fetch_catalog().await {
            Ok(catalog) => {
                let count = catalog.len();
                info!(products = count, "catalog loaded");
                self.catalog.replace(catalog);
                count
            }
            Err(err) => {
                warn!(error = %err, "product fetch failed; falling back to empty catalog");
                self.catalog
                    .replace(aishaura_core::catalog::Catalog::empty());
                0
            }
        }
    }

    /// "Continue shopping" after a confirmed order: closes the checkout
    /// and re-fetches so the gallery shows the decremented stock.
    pub async fn refresh_after_order(&self) -> usize {
        self.close_checkout();

        self.view.notify(&Notification::info(
            "Syncing inventory",
            "Fetching the latest stock from farm sheets...",
        ));

        let count = self.load_catalog().await;

        if count > 0 {
            self.view.notify(&Notification::success(
                "Inventory updated",
                "Latest stock levels are now live on your product list.",
            ));
        } else {
            self.view.notify(&Notification::error(
                "Inventory refresh failed",
                "Could not refresh inventory, but your order was placed successfully.",
            ));
        }

        count
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
