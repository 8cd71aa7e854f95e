//! # Store Error Type
//!
//! Unified user-facing error for the command surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Frontend                         Rust Shell                            │
//! │  ────────                         ──────────                            │
//! │                                                                         │
//! │  place_order()                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function: Result<T, StoreError>                         │  │
//! │  │                                                                  │  │
//! │  │  SheetsError::Status{503} ──► log detail ──► short message ─────►│  │
//! │  │  CoreError::EmptyCart ──────────────────────► short message ────►│  │
//! │  │  ValidationError ───────────────────────────► field message ────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  User sees the short human-readable message; status codes and raw      │
//! │  errors go to the log, never to the screen.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use aishaura_core::CoreError;
use aishaura_sheets::SheetsError;

/// User-facing error returned from storefront commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "SUBMISSION_ERROR",
///   "message": "Server returned 503 status"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or resource not found
    NotFound,

    /// Customer input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Checkout transition rejected
    CheckoutError,

    /// Order submission failed (transport or receipt validation)
    SubmissionError,

    /// Durable storage could not be opened
    StorageError,

    /// Anything unexpected
    Internal,
}

impl StoreError {
    /// Creates a new store error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StoreError {
            code,
            message: message.into(),
        }
    }

    /// Creates a checkout error.
    pub fn checkout(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::CheckoutError, message)
    }

    /// Creates a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::StorageError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to user-facing errors.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(name) => StoreError::new(
                ErrorCode::NotFound,
                format!("Product not found: {name}"),
            ),
            CoreError::EmptyCart => StoreError::new(ErrorCode::CheckoutError, err.to_string()),
            CoreError::InvalidTransition { .. } => {
                StoreError::new(ErrorCode::CheckoutError, err.to_string())
            }
            CoreError::Validation(e) => StoreError::new(ErrorCode::ValidationError, e.to_string()),
        }
    }
}

/// Converts remote-endpoint errors to user-facing errors.
///
/// The full error is logged here; the user only ever sees the short
/// message.
impl From<SheetsError> for StoreError {
    fn from(err: SheetsError) -> Self {
        tracing::error!(error = ?err, "sheets request failed");
        StoreError::new(ErrorCode::SubmissionError, err.to_string())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}
