//! # Discount Module
//!
//! Cashier-entered, per-line discounts.
//!
//! A discount in Danesha POS is typed in at the till for one line. It is
//! never looked up from a promotions table, and no variant below can refer
//! to one. The line engine matches on [`DiscountSpec`] exhaustively.
//!
//! ## Wire Shape
//! The web checkout sends two loose fields per line:
//! ```text
//! { "discountType": "PERCENT" | "NOMINAL" | "NONE" | null, "discountValue": "15" }
//! ```
//! [`DiscountSpec::from_parts`] folds them into the closed sum type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::round2;

/// The discount kind as stored on a transaction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    None,
    Percent,
    Nominal,
}

/// A manual line discount.
///
/// - `Percent(v)`: `v` percent of the line subtotal (normally 0..=100)
/// - `Nominal(v)`: a fixed amount off the line subtotal (not per unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountSpec {
    #[default]
    None,
    Percent(#[ts(type = "string")] Decimal),
    Nominal(#[ts(type = "string")] Decimal),
}

impl DiscountSpec {
    /// Builds a spec from the nullable wire pair.
    ///
    /// A missing type means no discount; the value is then ignored.
    ///
    /// ## Example
    /// ```rust
    /// use danesha_core::discount::{DiscountSpec, DiscountType};
    /// use rust_decimal::Decimal;
    ///
    /// let spec = DiscountSpec::from_parts(Some(DiscountType::Percent), Decimal::from(10));
    /// assert_eq!(spec, DiscountSpec::Percent(Decimal::from(10)));
    ///
    /// let none = DiscountSpec::from_parts(None, Decimal::from(99));
    /// assert_eq!(none, DiscountSpec::None);
    /// ```
    pub fn from_parts(kind: Option<DiscountType>, value: Decimal) -> Self {
        match kind {
            None | Some(DiscountType::None) => DiscountSpec::None,
            Some(DiscountType::Percent) => DiscountSpec::Percent(value),
            Some(DiscountType::Nominal) => DiscountSpec::Nominal(value),
        }
    }

    pub fn kind(&self) -> DiscountType {
        match self {
            DiscountSpec::None => DiscountType::None,
            DiscountSpec::Percent(_) => DiscountType::Percent,
            DiscountSpec::Nominal(_) => DiscountType::Nominal,
        }
    }

    /// The raw value as entered; zero for `None`.
    pub fn value(&self) -> Decimal {
        match self {
            DiscountSpec::None => Decimal::ZERO,
            DiscountSpec::Percent(v) | DiscountSpec::Nominal(v) => *v,
        }
    }

    /// The same spec with its value rounded half-up to 2dp.
    ///
    /// Percentages are rounded too (`12.345%` becomes `12.35%`). Stored
    /// transaction lines were produced this way, so it stays.
    pub fn rounded(&self) -> Self {
        match self {
            DiscountSpec::None => DiscountSpec::None,
            DiscountSpec::Percent(v) => DiscountSpec::Percent(round2(*v)),
            DiscountSpec::Nominal(v) => DiscountSpec::Nominal(round2(*v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_parts() {
        assert_eq!(
            DiscountSpec::from_parts(Some(DiscountType::Nominal), dec!(5000)),
            DiscountSpec::Nominal(dec!(5000))
        );
        assert_eq!(
            DiscountSpec::from_parts(Some(DiscountType::None), dec!(10)),
            DiscountSpec::None
        );
    }

    #[test]
    fn test_kind_and_value() {
        let spec = DiscountSpec::Percent(dec!(12.5));
        assert_eq!(spec.kind(), DiscountType::Percent);
        assert_eq!(spec.value(), dec!(12.5));
        assert_eq!(DiscountSpec::None.value(), Decimal::ZERO);
    }

    #[test]
    fn test_rounded_rounds_percent_too() {
        assert_eq!(
            DiscountSpec::Percent(dec!(12.345)).rounded(),
            DiscountSpec::Percent(dec!(12.35))
        );
        assert_eq!(
            DiscountSpec::Nominal(dec!(0.005)).rounded(),
            DiscountSpec::Nominal(dec!(0.01))
        );
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&DiscountType::Nominal).unwrap();
        assert_eq!(json, "\"NOMINAL\"");

        let spec: DiscountSpec =
            serde_json::from_str(r#"{"type":"PERCENT","value":"10"}"#).unwrap();
        assert_eq!(spec, DiscountSpec::Percent(dec!(10)));

        let none: DiscountSpec = serde_json::from_str(r#"{"type":"NONE"}"#).unwrap();
        assert_eq!(none, DiscountSpec::None);
    }
}
