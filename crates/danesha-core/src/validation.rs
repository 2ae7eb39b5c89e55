//! # Validation Module
//!
//! Input validation for the values that reach the line engine and checkout.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Web checkout form                                            │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Prices, quantities, discounts within the engine's domain          │
//! │  └── Returns a ValidationError naming the field, never panics          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: calculate()                                                  │
//! │  └── Trusts its inputs; total over the validated domain                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use danesha_core::discount::DiscountSpec;
//! use danesha_core::validation::validate_discount;
//! use rust_decimal::Decimal;
//!
//! assert!(validate_discount(&DiscountSpec::Percent(Decimal::from(15))).is_ok());
//! assert!(validate_discount(&DiscountSpec::Percent(Decimal::from(120))).is_err());
//! ```

use rust_decimal::Decimal;

use crate::discount::DiscountSpec;
use crate::error::ValidationError;
use crate::types::Quantity;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_PERCENT: Decimal = Decimal::ONE_HUNDRED;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that an identifier is present.
///
/// ## Rules
/// - Must not be empty or whitespace
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit or cost price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free samples)
pub fn validate_price(field: &str, price: Decimal) -> ValidationResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity against the line engine's domain (>= 0).
pub fn validate_quantity_in_domain(qty: Quantity) -> ValidationResult<()> {
    if qty.value().is_sign_negative() && !qty.value().is_zero() {
        return Err(ValidationError::MustNotBeNegative {
            field: "qty".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity being sold at checkout.
///
/// ## Rules
/// - Must be positive (> 0). The engine accepts zero, checkout does not.
pub fn validate_checkout_quantity(qty: Quantity) -> ValidationResult<()> {
    if qty.value() <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "qty".to_string(),
        });
    }

    Ok(())
}

/// Validates a cashier discount.
///
/// ## Rules
/// - Value must be non-negative for every variant
/// - A percentage must not exceed 100
///
/// Nominal discounts above the line subtotal are NOT rejected here; the
/// engine clamps them and checkout decides what to do with the result.
pub fn validate_discount(discount: &DiscountSpec) -> ValidationResult<()> {
    let value = discount.value();

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::MustNotBeNegative {
            field: "discountValue".to_string(),
        });
    }

    if let DiscountSpec::Percent(percent) = discount {
        if *percent > MAX_PERCENT {
            return Err(ValidationError::OutOfRange {
                field: "discountValue".to_string(),
                min: Decimal::ZERO,
                max: MAX_PERCENT,
            });
        }
    }

    Ok(())
}

/// Validates a commission percentage.
///
/// ## Rules
/// - Must be between 0 and 100
pub fn validate_commission_percent(percent: Decimal) -> ValidationResult<()> {
    if percent < Decimal::ZERO || percent > MAX_PERCENT {
        return Err(ValidationError::OutOfRange {
            field: "commissionPercent".to_string(),
            min: Decimal::ZERO,
            max: MAX_PERCENT,
        });
    }

    Ok(())
}

/// Validates the amount tendered.
///
/// Zero is allowed (the change then comes out negative, which is what the
/// till shows as "still owed").
pub fn validate_paid_amount(amount: Decimal) -> ValidationResult<()> {
    validate_price("paidAmount", amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("therapistId", "th-01").is_ok());
        assert!(validate_required("therapistId", "").is_err());
        assert!(validate_required("therapistId", "   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("unitPrice", dec!(0)).is_ok());
        assert!(validate_price("unitPrice", dec!(150000)).is_ok());
        assert_eq!(
            validate_price("unitPrice", dec!(-0.01)),
            Err(ValidationError::MustNotBeNegative {
                field: "unitPrice".to_string()
            })
        );
    }

    #[test]
    fn test_validate_negative_zero_is_zero() {
        assert!(validate_price("unitPrice", -Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_validate_quantities() {
        assert!(validate_quantity_in_domain(Quantity::units(0)).is_ok());
        assert!(validate_quantity_in_domain(Quantity::new(dec!(-1))).is_err());

        assert!(validate_checkout_quantity(Quantity::units(1)).is_ok());
        assert!(validate_checkout_quantity(Quantity::new(dec!(0.5))).is_ok());
        assert!(validate_checkout_quantity(Quantity::units(0)).is_err());
        assert!(validate_checkout_quantity(Quantity::new(dec!(-2))).is_err());
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount(&DiscountSpec::None).is_ok());
        assert!(validate_discount(&DiscountSpec::Percent(dec!(0))).is_ok());
        assert!(validate_discount(&DiscountSpec::Percent(dec!(100))).is_ok());
        assert!(validate_discount(&DiscountSpec::Nominal(dec!(1000000))).is_ok());

        assert!(validate_discount(&DiscountSpec::Percent(dec!(100.01))).is_err());
        assert!(validate_discount(&DiscountSpec::Percent(dec!(-5))).is_err());
        assert!(validate_discount(&DiscountSpec::Nominal(dec!(-5))).is_err());
    }

    #[test]
    fn test_validate_commission_percent() {
        assert!(validate_commission_percent(dec!(0)).is_ok());
        assert!(validate_commission_percent(dec!(12.5)).is_ok());
        assert!(validate_commission_percent(dec!(100)).is_ok());
        assert!(validate_commission_percent(dec!(-1)).is_err());
        assert!(validate_commission_percent(dec!(101)).is_err());
    }
}
