//! # Money Module
//!
//! Provides the `Money` type and the one rounding rule every monetary value
//! in Danesha POS goes through.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    1.005 rounded to 2dp = 1.00      ❌ (1.005 is really 1.00499999...)  │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 fixed point (rust_decimal)                       │
//! │    1.005 rounded half-up to 2dp = 1.01  ✅                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Rounding Rule
//! Half-up to exactly two fractional digits: midpoints round away from zero.
//! [`round2`] is the only place that rule is written down. Everything else
//! (the line engine, commissions, transaction totals) calls it.
//!
//! ## Usage
//! ```rust
//! use danesha_core::money::{round2, Money};
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_decimal(Decimal::new(10005, 3)); // 10.005
//! assert_eq!(price.to_string(), "10.01");
//!
//! let x = Decimal::new(-125, 3); // -0.125
//! assert_eq!(round2(x).to_string(), "-0.13");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

/// Number of fractional digits every Money value carries.
pub const MONEY_SCALE: u32 = 2;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a decimal half-up to exactly two fractional digits.
///
/// The result has scale 2, so `round2(100)` prints as `100.00`. Values with
/// more than 26 integer digits cannot carry two fractional digits in 96 bits
/// and come back rounded but at their original scale.
/// Idempotent: `round2(round2(x)) == round2(x)`.
///
/// ## Example
/// ```rust
/// use danesha_core::money::round2;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round2(Decimal::new(149985, 4)).to_string(), "15.00"); // 14.9985
/// assert_eq!(round2(Decimal::new(2, 0)).to_string(), "2.00");
/// ```
pub fn round2(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount, always rounded to two decimal places.
///
/// ## Design Decisions
/// - **Decimal, not i64 cents**: callers hand us unrounded prices and
///   fractional quantities; intermediate products must stay exact until
///   the rounding point
/// - **Signed**: profit can legitimately be negative
/// - **Normalizing constructor**: there is no way to build an unrounded Money
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  pricing lookup ──► unit_price ──┐                                      │
/// │                                  ├──► calculate() ──► LineBreakdown     │
/// │  product/treatment ─► cost_price ┘         │                            │
/// │                                            ▼                            │
/// │                          commissions, net profit, transaction totals    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Creates Money from any decimal, rounding half-up to 2dp.
    #[inline]
    pub fn from_decimal(amount: Decimal) -> Self {
        Money(round2(amount))
    }

    /// Creates Money from minor units (cents, sen).
    ///
    /// ## Example
    /// ```rust
    /// use danesha_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, MONEY_SCALE))
    }

    /// Returns the amount in minor units.
    ///
    /// Exact because the scale is always 2.
    #[inline]
    pub fn cents(&self) -> i128 {
        self.0.mantissa()
    }

    /// Returns the underlying decimal (scale 2).
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value (`0.00`).
    #[inline]
    pub fn zero() -> Self {
        Money::from_cents(0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies by a quantity and rounds: `round2(self * qty)`.
    ///
    /// Returns `None` when the product leaves the decimal range.
    ///
    /// ## Example
    /// ```rust
    /// use danesha_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let unit_price = Money::from_cents(3333);
    /// let subtotal = unit_price.checked_mul_qty(Decimal::from(3)).unwrap();
    /// assert_eq!(subtotal.to_string(), "99.99");
    /// ```
    pub fn checked_mul_qty(&self, qty: Decimal) -> Option<Money> {
        self.0.checked_mul(qty).map(Money::from_decimal)
    }

    /// Takes a percentage of this amount: `round2(self * percent / 100)`.
    ///
    /// Multiplication happens before division so `99.99 * 15 / 100` is
    /// exactly `14.9985` before rounding.
    pub fn checked_percent(&self, percent: Decimal) -> Option<Money> {
        self.0
            .checked_mul(percent)
            .and_then(|scaled| scaled.checked_div(HUNDRED))
            .map(Money::from_decimal)
    }

    /// `round2(self + other)`, `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money::from_decimal)
    }

    /// `round2(self - other)`, `None` on overflow.
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money::from_decimal)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal with two digits, e.g. `-20.00`. Currency symbols are a
/// presentation concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::from_decimal(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

/// Addition of two Money values. Both sides have scale 2, so the sum is exact.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.0, serializer)
    }
}

/// Deserialization normalizes, so a stored `"10.005"` comes back as `10.01`.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer).map(Money::from_decimal)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
