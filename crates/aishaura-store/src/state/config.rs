//! # Store Configuration
//!
//! Vendor identity and behavior knobs, loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`AISHAURA_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no locking is needed.

use std::path::PathBuf;
use std::time::Duration;

use aishaura_core::upi::UpiDetails;
use aishaura_sheets::SheetsConfig;

/// Delay between rendering the confirmation and clearing the cart, so the
/// confirmation paints before the drawer empties under it.
pub const DEFAULT_CART_CLEAR_DELAY: Duration = Duration::from_secs(1);

/// Application configuration for the storefront shell.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Remote endpoint configuration.
    pub sheets: SheetsConfig,

    /// UPI collection details used by the payment step.
    pub upi: UpiDetails,

    /// Business WhatsApp number, international format without `+`.
    pub whatsapp_number: String,

    /// Override for the durable-storage directory. `None` uses the
    /// platform app-data dir.
    pub data_dir: Option<PathBuf>,

    /// Pause between confirmation render and cart clear.
    pub cart_clear_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            sheets: SheetsConfig::default(),
            upi: UpiDetails {
                payee_id: "9738560719-0@airtel".to_string(),
                payee_name: "Aishaura Microgreens".to_string(),
                note: "Microgreens Order".to_string(),
            },
            whatsapp_number: "918073047946".to_string(),
            data_dir: None,
            cart_clear_delay: DEFAULT_CART_CLEAR_DELAY,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `AISHAURA_UPI_ID`: Override the UPI payee id
    /// - `AISHAURA_UPI_PAYEE`: Override the payee display name
    /// - `AISHAURA_WHATSAPP`: Override the business WhatsApp number
    /// - `AISHAURA_DATA_DIR`: Override the durable-storage directory
    /// - plus the `AISHAURA_*` endpoint variables read by
    ///   [`SheetsConfig::from_env`]
    pub fn from_env() -> Self {
        let mut config = StoreConfig {
            sheets: SheetsConfig::from_env(),
            ..StoreConfig::default()
        };

        if let Ok(id) = std::env::var("AISHAURA_UPI_ID") {
            config.upi.payee_id = id;
        }

        if let Ok(name) = std::env::var("AISHAURA_UPI_PAYEE") {
            config.upi.payee_name = name;
        }

        if let Ok(number) = std::env::var("AISHAURA_WHATSAPP") {
            config.whatsapp_number = number;
        }

        if let Ok(dir) = std::env::var("AISHAURA_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.upi.payee_name, "Aishaura Microgreens");
        assert_eq!(config.cart_clear_delay, Duration::from_secs(1));
        assert!(config.data_dir.is_none());
    }
}
