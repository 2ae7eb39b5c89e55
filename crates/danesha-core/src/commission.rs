//! # Commission Module
//!
//! Staff commission on treatment lines.
//!
//! ## Rate Priority
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  staff.commission_percent   (set on the therapist)      ── wins ──┐    │
//! │  level.default_commission   (therapist's level)         ── else ──┤    │
//! │  settings default           (global, 10% out of the box) ─ else ──┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Base
//! Commission is paid on the line's discounted `line_total`, read from the
//! line snapshot. Commission counts as a cost, so the stored profit of a
//! treatment line is net of it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Global default used when neither staff nor level carry a rate.
pub const DEFAULT_COMMISSION_PERCENT: Decimal = Decimal::TEN;

/// Who performed the treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    Therapist,
    Assistant,
}

/// The rate inputs for one staff member, as looked up by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CommissionSource {
    pub staff_id: String,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub commission_percent: Option<Decimal>,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub level_default_percent: Option<Decimal>,
}

impl CommissionSource {
    /// A staff member with no rate of their own.
    pub fn new(staff_id: impl Into<String>) -> Self {
        CommissionSource {
            staff_id: staff_id.into(),
            commission_percent: None,
            level_default_percent: None,
        }
    }

    pub fn with_percent(mut self, percent: Decimal) -> Self {
        self.commission_percent = Some(percent);
        self
    }

    pub fn with_level_default(mut self, percent: Decimal) -> Self {
        self.level_default_percent = Some(percent);
        self
    }

    /// The effective rate, falling back to `global_default`.
    pub fn resolve_rate(&self, global_default: Decimal) -> Decimal {
        resolve_rate(
            self.commission_percent,
            self.level_default_percent,
            global_default,
        )
    }
}

/// Picks the first rate present: staff override, then level default, then
/// the global default.
pub fn resolve_rate(
    staff_override: Option<Decimal>,
    level_default: Option<Decimal>,
    global_default: Decimal,
) -> Decimal {
    staff_override.or(level_default).unwrap_or(global_default)
}

/// One commission record, stored with the transaction line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StaffCommission {
    pub staff_id: String,
    pub role: StaffRole,
    #[ts(type = "string")]
    pub percent: Decimal,
    pub base_amount: Money,
    pub amount: Money,
}

/// Computes `round2(line_total × percent / 100)` for one staff member.
///
/// ## Errors
/// - [`CoreError::NegativeCommission`] for a negative amount
/// - [`CoreError::Overflow`] if the product leaves the decimal range
///
/// ## Example
/// ```rust
/// use danesha_core::commission::{commission_for, CommissionSource, StaffRole};
/// use danesha_core::money::Money;
/// use rust_decimal::Decimal;
///
/// let therapist = CommissionSource::new("th-01").with_level_default(Decimal::from(15));
/// let c = commission_for(&therapist, StaffRole::Therapist, Money::from_cents(9000), Decimal::TEN)
///     .unwrap();
/// assert_eq!(c.amount.to_string(), "13.50");
/// ```
pub fn commission_for(
    source: &CommissionSource,
    role: StaffRole,
    line_total: Money,
    global_default: Decimal,
) -> CoreResult<StaffCommission> {
    let percent = source.resolve_rate(global_default);
    let amount = line_total
        .checked_percent(percent)
        .ok_or(CoreError::Overflow { operation: "commission" })?;

    if amount.is_negative() {
        return Err(CoreError::NegativeCommission {
            staff_id: source.staff_id.clone(),
            percent,
            base: line_total,
        });
    }

    Ok(StaffCommission {
        staff_id: source.staff_id.clone(),
        role,
        percent,
        base_amount: line_total,
        amount,
    })
}

/// Line profit after commissions: `round2(profit − Σ amounts)`.
pub fn net_profit(profit: Money, commissions: &[StaffCommission]) -> CoreResult<Money> {
    commissions.iter().try_fold(profit, |acc, c| {
        acc.checked_sub(c.amount)
            .ok_or(CoreError::Overflow { operation: "net profit" })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_priority() {
        assert_eq!(resolve_rate(Some(dec!(20)), Some(dec!(15)), dec!(10)), dec!(20));
        assert_eq!(resolve_rate(None, Some(dec!(15)), dec!(10)), dec!(15));
        assert_eq!(resolve_rate(None, None, dec!(10)), dec!(10));
    }

    #[test]
    fn test_zero_override_still_wins() {
        // A therapist explicitly set to 0% earns nothing, not the default.
        assert_eq!(resolve_rate(Some(dec!(0)), Some(dec!(15)), dec!(10)), dec!(0));
    }

    #[test]
    fn test_commission_rounds_half_up() {
        let source = CommissionSource::new("th-01").with_percent(dec!(12.5));
        // 84.99 × 12.5% = 10.62375 → 10.62
        let c = commission_for(&source, StaffRole::Therapist, Money::from_cents(8499), dec!(10))
            .unwrap();
        assert_eq!(c.amount, Money::from_cents(1062));
        assert_eq!(c.base_amount, Money::from_cents(8499));
        assert_eq!(c.percent, dec!(12.5));

        // 0.05 × 10% = 0.005 → 0.01
        let c = commission_for(&CommissionSource::new("a"), StaffRole::Assistant, Money::from_cents(5), dec!(10))
            .unwrap();
        assert_eq!(c.amount, Money::from_cents(1));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let source = CommissionSource::new("th-02").with_percent(dec!(-5));
        let err = commission_for(&source, StaffRole::Therapist, Money::from_cents(10000), dec!(10))
            .unwrap_err();
        assert!(matches!(err, CoreError::NegativeCommission { .. }));
    }

    #[test]
    fn test_net_profit_subtracts_all_commissions() {
        let therapist = commission_for(
            &CommissionSource::new("th"),
            StaffRole::Therapist,
            Money::from_cents(20000),
            dec!(10),
        )
        .unwrap();
        let assistant = commission_for(
            &CommissionSource::new("as").with_percent(dec!(5)),
            StaffRole::Assistant,
            Money::from_cents(20000),
            dec!(10),
        )
        .unwrap();

        let net = net_profit(Money::from_cents(12000), &[therapist, assistant]).unwrap();
        assert_eq!(net, Money::from_cents(12000 - 2000 - 1000));
    }

    #[test]
    fn test_net_profit_can_go_negative() {
        let c = commission_for(
            &CommissionSource::new("th"),
            StaffRole::Therapist,
            Money::from_cents(10000),
            dec!(10),
        )
        .unwrap();
        let net = net_profit(Money::from_cents(500), &[c]).unwrap();
        assert_eq!(net.to_string(), "-5.00");
    }
}
