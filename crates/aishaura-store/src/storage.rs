//! # Durable Local Storage
//!
//! The desktop/web storefront persisted client state in `localStorage`;
//! this shell keeps the same contract with one file per key under the
//! platform app-data directory.
//!
//! ## Keys
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart          JSON array of {product, quantity, price}                │
//! │                rehydrated at startup; malformed ──► empty cart,        │
//! │                NEVER an error                                          │
//! │  wa-badge      notification-badge counter for the contact button       │
//! │  wa-dismissed  "1" when the floating contact button was dismissed      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Reads that fail yield the documented default; writes that fail are
//! logged and swallowed, matching the original's try/catch around
//! `localStorage.setItem`. Two clients sharing a data dir race on the
//! last write - an accepted limitation, not a bug to fix.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::warn;

use aishaura_core::cart::{Cart, CartLineItem};

use crate::error::StoreError;

/// Durable key for the serialized cart.
const CART_KEY: &str = "cart";
/// Durable key for the WhatsApp badge counter.
const BADGE_KEY: &str = "wa-badge";
/// Durable key for the contact-button dismissal flag.
const DISMISS_KEY: &str = "wa-dismissed";

/// File-per-key durable storage for client state.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens the store at the platform app-data directory, or at the
    /// given override (used by tests and the `AISHAURA_DATA_DIR`
    /// environment variable).
    pub fn open(override_dir: Option<&Path>) -> Result<Self, StoreError> {
        let dir = match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => ProjectDirs::from("in", "aishaura", "storefront")
                .ok_or_else(|| StoreError::storage("Could not determine app data directory"))?
                .data_dir()
                .to_path_buf(),
        };

        fs::create_dir_all(&dir)
            .map_err(|e| StoreError::storage(format!("Could not create data directory: {e}")))?;

        Ok(LocalStore { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Raw read. Missing or unreadable keys are `None`.
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    /// Raw write. Failures are logged and swallowed.
    fn write(&self, key: &str, value: &str) {
        if let Err(e) = fs::write(self.path(key), value) {
            warn!(key, error = %e, "could not persist client state");
        }
    }

    /// Raw removal. Failures are logged and swallowed.
    fn remove(&self, key: &str) {
        let path = self.path(key);
        if path.exists() {
            if let Err(e) = fs::remove_file(&path) {
                warn!(key, error = %e, "could not remove client state");
            }
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Rehydrates the persisted cart.
    ///
    /// Any malformed value - truncated JSON, the wrong shape, a stray
    /// string - yields an empty cart. Corrupt storage must never take the
    /// storefront down.
    pub fn load_cart(&self) -> Cart {
        let Some(raw) = self.read(CART_KEY) else {
            return Cart::new();
        };

        match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
            Ok(items) => Cart::from_items(items),
            Err(e) => {
                warn!(error = %e, "persisted cart was malformed; starting empty");
                Cart::new()
            }
        }
    }

    /// Persists the full cart (called after every mutation).
    pub fn save_cart(&self, cart: &Cart) {
        match serde_json::to_string(&cart.items) {
            Ok(json) => self.write(CART_KEY, &json),
            Err(e) => warn!(error = %e, "could not serialize cart"),
        }
    }

    /// Removes the persisted cart (explicit clear / after confirmation).
    pub fn clear_cart(&self) {
        self.remove(CART_KEY);
    }

    // =========================================================================
    // Contact affordance state
    // =========================================================================

    /// Current WhatsApp badge count (0 when unset or unparsable).
    pub fn badge_count(&self) -> u32 {
        self.read(BADGE_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Persists the WhatsApp badge count.
    pub fn set_badge_count(&self, count: u32) {
        self.write(BADGE_KEY, &count.to_string());
    }

    /// Whether the floating contact button was explicitly dismissed.
    pub fn contact_dismissed(&self) -> bool {
        self.read(DISMISS_KEY).map(|raw| raw == "1").unwrap_or(false)
    }

    /// Persists (or clears) the dismissal flag.
    pub fn set_contact_dismissed(&self, dismissed: bool) {
        if dismissed {
            self.write(DISMISS_KEY, "1");
        } else {
            self.remove(DISMISS_KEY);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
