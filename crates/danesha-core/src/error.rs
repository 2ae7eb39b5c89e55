//! # Error Types
//!
//! Domain-specific error types for danesha-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  danesha-core errors (this file)                                        │
//! │  ├── CoreError        - Checkout / arithmetic failures                  │
//! │  └── ValidationError  - Caller-supplied input out of domain             │
//! │                                                                         │
//! │  quote app errors (separate crate)                                      │
//! │  └── QuoteError       - Config, file and JSON failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → QuoteError → exit code            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, amounts)
//! 3. Errors are values; nothing in the core panics for control flow

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// An intermediate product left the 96-bit decimal range.
    ///
    /// ## When This Occurs
    /// Only for inputs far outside any real price list (around 10^26 and
    /// up). The line engine reports it instead of panicking.
    #[error("Arithmetic overflow while computing {operation}")]
    Overflow { operation: &'static str },

    /// Checkout was attempted with no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// A treatment line has no therapist to credit.
    #[error("Therapist required for treatment {item_id}")]
    TherapistRequired { item_id: String },

    /// The cashier discount swallows the whole line.
    ///
    /// ## User Workflow
    /// ```text
    /// Treatment 50.00, cashier types NOMINAL 80.00
    ///      │
    ///      ▼
    /// calculate() clamps: lineDiscount = 50.00
    ///      │
    ///      ▼
    /// Checkout guard: lineDiscount >= subtotal
    ///      │
    ///      ▼
    /// DiscountTooLarge → "Invalid discount: exceeds or equals item price"
    /// ```
    #[error("Invalid discount on {item_id}: {discount} exceeds or equals item price {subtotal}")]
    DiscountTooLarge {
        item_id: String,
        discount: Money,
        subtotal: Money,
    },

    /// A line would be sold for nothing (or less).
    #[error("Invalid final price on {item_id}: line total {line_total} must be greater than 0")]
    NonPositiveLineTotal { item_id: String, line_total: Money },

    /// The transaction as a whole is worth nothing.
    #[error("Invalid transaction: total {total} must be greater than 0")]
    NonPositiveTotal { total: Money },

    /// A commission rate produced a negative amount.
    #[error("Invalid commission for {staff_id}: {percent}% of {base} is negative")]
    NegativeCommission {
        staff_id: String,
        percent: Decimal,
        base: Money,
    },

    /// Insufficient stock to complete sale.
    #[error("Insufficient stock for {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: String,
        available: Decimal,
        requested: Decimal,
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
/// These describe the violated precondition. They are produced by the
/// [`validation`](crate::validation) module before any arithmetic runs.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: Decimal,
        max: Decimal,
    },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: "SERUM-30".to_string(),
            available: dec!(3),
            requested: dec!(5),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for SERUM-30: available 3, requested 5"
        );

        let err = CoreError::DiscountTooLarge {
            item_id: "FACIAL".to_string(),
            discount: Money::from_cents(5000),
            subtotal: Money::from_cents(5000),
        };
        assert_eq!(
            err.to_string(),
            "Invalid discount on FACIAL: 50.00 exceeds or equals item price 50.00"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "therapistId".to_string(),
        };
        assert_eq!(err.to_string(), "therapistId is required");

        let err = ValidationError::OutOfRange {
            field: "discountValue".to_string(),
            min: dec!(0),
            max: dec!(100),
        };
        assert_eq!(err.to_string(), "discountValue must be between 0 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "qty".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
