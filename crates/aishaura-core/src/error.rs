//! # Error Types
//!
//! Domain-specific error types for aishaura-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aishaura-core errors (this file)                                      │
//! │  ├── CoreError        - Cart/checkout rule violations                  │
//! │  └── ValidationError  - Customer-input validation failures             │
//! │                                                                         │
//! │  aishaura-sheets errors (separate crate)                               │
//! │  └── SheetsError      - Remote endpoint failures                       │
//! │                                                                         │
//! │  aishaura-store errors (shell)                                         │
//! │  └── StoreError       - What the UI sees (short message + code)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → Frontend             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, step, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::checkout::CheckoutStep;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They should be caught
/// by the shell and translated to user-friendly notifications.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// - Add-to-cart for a name the last fetch did not return
    /// - The product was removed from the sheet between fetch and click
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Checkout cannot advance past the review step with nothing in the cart.
    #[error("Your cart is empty. Please add items before placing an order.")]
    EmptyCart,

    /// A transition the state machine does not permit.
    ///
    /// ## When This Occurs
    /// - Confirming an order while still on the review step
    /// - Submitting customer info from the payment step
    #[error("Checkout cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        from: CheckoutStep,
        to: CheckoutStep,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when customer input doesn't meet requirements.
/// Used for early validation before the checkout may advance.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Several required fields are missing at once.
    #[error("Please fill all required fields.")]
    MissingFields,

    /// Invalid format (e.g., malformed phone or email).
    #[error("{message}")]
    InvalidFormat { field: String, message: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("Sunflower".to_string());
        assert_eq!(err.to_string(), "Product not found: Sunflower");

        let err = CoreError::EmptyCart;
        assert!(err.to_string().contains("cart is empty"));
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "phone".to_string(),
        };
        assert_eq!(err.to_string(), "phone is required");

        let err = ValidationError::InvalidFormat {
            field: "email".to_string(),
            message: "Please enter a valid email address.".to_string(),
        };
        assert_eq!(err.to_string(), "Please enter a valid email address.");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MissingFields;
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
