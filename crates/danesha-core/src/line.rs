//! # Line Calculation Engine
//!
//! Turns one cart line into its financial snapshot.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  unit_price ──round2──┐                                                 │
//! │  qty ─────────────────┼──► subtotal = round2(price × qty)               │
//! │                       │                                                 │
//! │  discount ──round2────┼──► raw discount ──clamp ≤ subtotal──┐           │
//! │                       │                                     ▼           │
//! │                       │        line_total = round2(subtotal − discount) │
//! │  cost_price ─round2───┴──► cost_total = round2(cost × qty)  │           │
//! │                                                             ▼           │
//! │                               profit = round2(line_total − cost_total)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens at every arrow labelled `round2`, in this order.
//! Rounding once at the end gives different cents on edge cases and
//! would disagree with snapshots already stored.
//!
//! ## Snapshot Rule
//! The returned [`LineBreakdown`] is persisted verbatim. Reports and
//! commission read it back; nothing downstream recomputes a line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::discount::{DiscountSpec, DiscountType};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Quantity;
use crate::validation;

/// Financial snapshot of one line. Every field is rounded to 2dp.
///
/// - `line_total = subtotal - line_discount`, never negative
/// - `profit = line_total - cost_total`, may be negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineBreakdown {
    pub subtotal: Money,
    pub line_discount: Money,
    pub line_total: Money,
    pub cost_total: Money,
    pub profit: Money,
}

/// Calculates the financial breakdown of one line.
///
/// Pure and deterministic. Inputs are normalized (rounded half-up to 2dp)
/// before use, so callers may pass unrounded prices. No range checks are
/// made here; see [`LineInput::validate`] for the input-layer guard.
///
/// ## Errors
/// [`CoreError::Overflow`] if an intermediate product leaves the decimal
/// range. Never returned for real-world prices.
///
/// ## Example
/// ```rust
/// use danesha_core::discount::DiscountSpec;
/// use danesha_core::line::calculate;
/// use danesha_core::types::Quantity;
/// use rust_decimal::Decimal;
///
/// let line = calculate(
///     Decimal::new(10000, 2),           // 100.00
///     Quantity::units(1),
///     DiscountSpec::Percent(Decimal::from(10)),
///     Decimal::new(6000, 2),            // 60.00
/// )
/// .unwrap();
///
/// assert_eq!(line.line_discount.to_string(), "10.00");
/// assert_eq!(line.line_total.to_string(), "90.00");
/// assert_eq!(line.profit.to_string(), "30.00");
/// ```
pub fn calculate(
    unit_price: Decimal,
    qty: Quantity,
    discount: DiscountSpec,
    cost_price: Decimal,
) -> CoreResult<LineBreakdown> {
    let qty = qty.value();
    let unit_price = Money::from_decimal(unit_price);
    let cost_price = Money::from_decimal(cost_price);
    let discount = discount.rounded();

    let subtotal = unit_price
        .checked_mul_qty(qty)
        .ok_or(CoreError::Overflow { operation: "subtotal" })?;

    let raw_discount = match discount {
        DiscountSpec::None => Money::zero(),
        DiscountSpec::Percent(percent) => subtotal
            .checked_percent(percent)
            .ok_or(CoreError::Overflow { operation: "percent discount" })?,
        DiscountSpec::Nominal(amount) => Money::from_decimal(amount),
    };

    // A discount alone never takes a line below zero.
    let line_discount = raw_discount.min(subtotal);

    let line_total = subtotal
        .checked_sub(line_discount)
        .ok_or(CoreError::Overflow { operation: "line total" })?;
    let cost_total = cost_price
        .checked_mul_qty(qty)
        .ok_or(CoreError::Overflow { operation: "cost total" })?;
    let profit = line_total
        .checked_sub(cost_total)
        .ok_or(CoreError::Overflow { operation: "profit" })?;

    Ok(LineBreakdown {
        subtotal,
        line_discount,
        line_total,
        cost_total,
        profit,
    })
}

/// The five engine inputs in their wire shape.
///
/// ```json
/// { "unitPrice": "100", "qty": 2, "discountType": "PERCENT",
///   "discountValue": "10", "costPrice": "50" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineInput {
    #[ts(type = "string")]
    pub unit_price: Decimal,
    pub qty: Quantity,
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
    #[serde(default)]
    #[ts(type = "string")]
    pub discount_value: Decimal,
    #[ts(type = "string")]
    pub cost_price: Decimal,
}

impl LineInput {
    pub fn discount(&self) -> DiscountSpec {
        DiscountSpec::from_parts(self.discount_type, self.discount_value)
    }

    /// Checks the engine's documented domain: non-negative prices and
    /// quantity, non-negative discount, percent within 0..=100.
    pub fn validate(&self) -> CoreResult<()> {
        validation::validate_price("unitPrice", self.unit_price)?;
        validation::validate_price("costPrice", self.cost_price)?;
        validation::validate_quantity_in_domain(self.qty)?;
        validation::validate_discount(&self.discount())?;
        Ok(())
    }

    /// Runs the engine without validating first.
    pub fn calculate(&self) -> CoreResult<LineBreakdown> {
        calculate(self.unit_price, self.qty, self.discount(), self.cost_price)
    }

    /// Validates, then runs the engine.
    pub fn validate_and_calculate(&self) -> CoreResult<LineBreakdown> {
        self.validate()?;
        self.calculate()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
