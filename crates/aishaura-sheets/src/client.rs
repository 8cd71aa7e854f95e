//! # Sheets Client
//!
//! One HTTP client for every spreadsheet endpoint, with the bounded
//! timeout applied uniformly (15 s: a hung Apps Script deployment must
//! degrade to the empty-catalog fallback, not a spinner forever).
//!
//! ## Startup Fetch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    fetch_catalog                                        │
//! │                                                                         │
//! │   fetch_products ──┐                                                   │
//! │                    ├── issued concurrently, joined ──► Catalog         │
//! │   fetch_reviews ───┘                                                   │
//! │                                                                         │
//! │   products Err ──► the WHOLE fetch fails (shell falls back to an       │
//! │                    empty catalog)                                      │
//! │   reviews Err ───► logged; catalog served without merged reviews       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::warn;

use aishaura_core::catalog::Catalog;

use crate::config::SheetsConfig;
use crate::error::SheetsResult;

/// Client for the vendor's spreadsheet endpoints.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    config: SheetsConfig,
}

impl SheetsClient {
    /// Builds the client with JSON accept headers and the configured
    /// per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: SheetsConfig) -> SheetsResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(SheetsClient { http, config })
    }

    /// The shared HTTP client.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The endpoint configuration.
    pub(crate) fn config(&self) -> &SheetsConfig {
        &self.config
    }

    /// Fetches products and reviews concurrently and joins them into a
    /// catalog.
    ///
    /// The product fetch gates the whole call; the review fetch degrades
    /// softly. Both are bounded by the client timeout.
    pub async fn fetch_catalog(&self) -> SheetsResult<Catalog> {
        let (products, reviews) = tokio::join!(self.fetch_products(), self.fetch_reviews());

        let mut catalog = Catalog::new(products?);

        match reviews {
            Ok(by_product) => catalog.merge_reviews(by_product),
            Err(err) => warn!(error = %err, "reviews fetch failed; serving catalog without merged reviews"),
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_builds_with_defaults() {
        let client = SheetsClient::new(SheetsConfig::default()).unwrap();
        assert_eq!(client.config().timeout, Duration::from_secs(15));
    }
}
