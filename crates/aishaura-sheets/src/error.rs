//! # Error Types
//!
//! Failures talking to the spreadsheet endpoints.
//!
//! ## Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Http / Timeout / Status   transport failed or non-2xx                 │
//! │  Parse                     body was not the JSON we expected           │
//! │  Api                       endpoint answered success: false            │
//! │  MissingOrderId            HTTP 200 but no order id in the receipt    │
//! │  InvalidOrderId            HTTP 200 but the id fails the vendor       │
//! │                            prefix convention                           │
//! │                                                                         │
//! │  The last two exist because a misconfigured Apps Script deployment     │
//! │  happily returns 200 without recording anything. The shell treats      │
//! │  them exactly like transport failures: abort, keep the cart.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors from the spreadsheet API client.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// HTTP request failed (connect error, timeout, redirect loop, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("Server returned {status} status")]
    Status { status: u16 },

    /// Endpoint answered 200 but reported failure or an unusable shape.
    #[error("API error: {message}")]
    Api { message: String },

    /// Response body could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Order receipt carried no order id.
    #[error("Missing order ID in response")]
    MissingOrderId,

    /// Order receipt carried an id outside the vendor convention.
    #[error("Received invalid order ID from server: {order_id}")]
    InvalidOrderId { order_id: String },
}

/// Convenience type alias for Results with SheetsError.
pub type SheetsResult<T> = Result<T, SheetsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SheetsError::Status { status: 503 }.to_string(),
            "Server returned 503 status"
        );
        assert_eq!(
            SheetsError::InvalidOrderId {
                order_id: "XYZ-1".to_string()
            }
            .to_string(),
            "Received invalid order ID from server: XYZ-1"
        );
    }
}
