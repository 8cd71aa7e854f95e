//! # Validation Module
//!
//! Customer-input validation for the checkout flow.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form hints                                          │
//! │  ├── required attributes, input types                                  │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (the transition guard)                           │
//! │  ├── CustomerInfo → Payment cannot happen until these pass             │
//! │  └── Messages are returned to the caller, never thrown                 │
//! │                                                                         │
//! │  The order endpoint itself validates nothing - this guard is the       │
//! │  last line before submission.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::CustomerInfo;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a customer phone number.
///
/// ## Rules
/// - Digits only (no separators, no country prefix)
/// - At least 10 digits
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.len() < 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            message: "Please enter a valid 10-digit phone number.".to_string(),
        });
    }

    Ok(())
}

/// Validates a customer email address.
///
/// ## Rules
/// Deliberately loose - we need a deliverable-looking address, not RFC
/// 5322 compliance:
/// - no whitespace anywhere
/// - exactly one `@`, with a non-empty local part
/// - domain contains a `.` with non-empty text on both sides
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        message: "Please enter a valid email address.".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    // A dot somewhere strictly inside the domain
    match domain.rfind('.') {
        Some(dot) if dot > 0 && dot < domain.len() - 1 => Ok(()),
        _ => Err(invalid()),
    }
}

// =============================================================================
// Customer Info Validation
// =============================================================================

/// Validates the whole customer-info form.
///
/// ## Order of checks
/// 1. All required fields present (name, phone, email, address)
/// 2. Phone format
/// 3. Email format
///
/// Notes are optional and pass through untouched.
///
/// ## Example
/// ```rust
/// use aishaura_core::types::CustomerInfo;
/// use aishaura_core::validation::validate_customer_info;
///
/// let info = CustomerInfo {
///     name: "A".into(),
///     phone: "9876543210".into(),
///     email: "a@b.com".into(),
///     address: "X".into(),
///     notes: String::new(),
/// };
/// assert!(validate_customer_info(&info).is_ok());
/// ```
pub fn validate_customer_info(info: &CustomerInfo) -> ValidationResult<()> {
    let required = [&info.name, &info.phone, &info.email, &info.address];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }

    validate_phone(&info.phone)?;
    validate_email(&info.email)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, phone: &str, email: &str, address: &str) -> CustomerInfo {
        CustomerInfo {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            address: address.to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("919876543210").is_ok());

        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("987654321").is_err()); // 9 digits
        assert!(validate_phone("98765x3210").is_err());
        assert!(validate_phone("98765 43210").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("name.surname@mail.example.in").is_ok());

        assert!(validate_email("bad").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("@b.com").is_err());
        assert!(validate_email("a@.com").is_err());
        assert!(validate_email("a@b.").is_err());
        assert!(validate_email("a b@c.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn test_validate_customer_info_passes() {
        assert!(validate_customer_info(&info("A", "9876543210", "a@b.com", "X")).is_ok());
    }

    #[test]
    fn test_validate_customer_info_required_fields() {
        assert!(matches!(
            validate_customer_info(&info("", "9876543210", "a@b.com", "X")),
            Err(ValidationError::MissingFields)
        ));
        assert!(validate_customer_info(&info("A", "", "a@b.com", "X")).is_err());
        assert!(validate_customer_info(&info("A", "9876543210", "", "X")).is_err());
        assert!(validate_customer_info(&info("A", "9876543210", "a@b.com", "   ")).is_err());
    }

    #[test]
    fn test_validate_customer_info_rejects_bad_formats() {
        assert!(validate_customer_info(&info("A", "12345", "a@b.com", "X")).is_err());
        assert!(validate_customer_info(&info("A", "9876543210", "bad", "X")).is_err());
    }
}
