//! # Domain Types
//!
//! Small value types shared by the line engine and the checkout layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Quantity     │   │    ItemType     │   │ TransactionStatus   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  Decimal        │   │  Product        │   │  Paid               │   │
//! │  │  2 or 1.5       │   │  Treatment      │   │                     │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │                                                                         │
//! │  Transaction number: 20250114-093005-7F3A                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Quantity
// =============================================================================

/// A count of units on a line.
///
/// Usually a whole number. Fractional quantities (e.g. `1.5` ml bottles
/// sold by volume) are carried as-is; the line engine multiplies exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quantity(#[ts(type = "string | number")] Decimal);

impl Quantity {
    #[inline]
    pub const fn new(qty: Decimal) -> Self {
        Quantity(qty)
    }

    /// Whole units.
    #[inline]
    pub fn units(qty: u32) -> Self {
        Quantity(Decimal::from(qty))
    }

    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }
}

impl From<u32> for Quantity {
    fn from(qty: u32) -> Self {
        Quantity::units(qty)
    }
}

impl From<Decimal> for Quantity {
    fn from(qty: Decimal) -> Self {
        Quantity(qty)
    }
}

// =============================================================================
// Item Type
// =============================================================================

/// What a transaction line sells.
///
/// Treatments are performed by a therapist (optionally with an assistant)
/// and pay commission; products move stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Product,
    Treatment,
}

// =============================================================================
// Transaction Status
// =============================================================================

/// Lifecycle status of a transaction.
///
/// Checkout only ever writes `Paid`; the enum keeps the stored value typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    #[default]
    Paid,
}

// =============================================================================
// Transaction Number
// =============================================================================

/// Formats a human-readable transaction number: `YYYYMMDD-HHMMSS-XXXX`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use danesha_core::types::format_transaction_number;
///
/// let at = NaiveDate::from_ymd_opt(2025, 1, 14)
///     .unwrap()
///     .and_hms_opt(9, 30, 5)
///     .unwrap();
/// assert_eq!(format_transaction_number(at, "7f3a"), "20250114-093005-7F3A");
/// ```
pub fn format_transaction_number(at: NaiveDateTime, suffix: &str) -> String {
    format!(
        "{}-{}",
        at.format("%Y%m%d-%H%M%S"),
        suffix.to_ascii_uppercase()
    )
}

/// Generates a transaction number for `at` with a random 4-digit hex suffix
/// (`0-9A-F`).
///
/// The clock is read by the caller; this only draws the random suffix.
pub fn new_transaction_number(at: NaiveDateTime) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format_transaction_number(at, &id[..4])
}
