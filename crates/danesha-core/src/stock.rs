//! # Stock Module
//!
//! Stock on hand is never stored; it is folded from the movement ledger:
//!
//! ```text
//! on_hand = (IN + ADJUST) − (OUT + SALE)
//! ```
//!
//! Checkout sums the quantity each product appears with across the whole
//! cart (the same product can be on several lines) and compares that total
//! with what is on hand.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Kind of stock movement in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementKind {
    In,
    Out,
    Adjust,
    Sale,
}

impl MovementKind {
    /// Whether the movement adds to stock on hand.
    pub fn is_inbound(&self) -> bool {
        matches!(self, MovementKind::In | MovementKind::Adjust)
    }
}

/// One ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub product_id: String,
    pub kind: MovementKind,
    #[ts(type = "string | number")]
    pub quantity: Decimal,
}

/// Folds movements into stock on hand per product.
pub fn stock_on_hand<'a, I>(movements: I) -> BTreeMap<String, Decimal>
where
    I: IntoIterator<Item = &'a StockMovement>,
{
    let mut levels = BTreeMap::new();
    for movement in movements {
        let level = levels
            .entry(movement.product_id.clone())
            .or_insert(Decimal::ZERO);
        if movement.kind.is_inbound() {
            *level += movement.quantity;
        } else {
            *level -= movement.quantity;
        }
    }
    levels
}

/// Checks that every requested product has enough stock.
///
/// `requested` pairs product ids with quantities and may repeat a product;
/// repeats are summed first. Products missing from `on_hand` have zero
/// stock. Shortfalls are reported in product id order.
///
/// ## Example
/// ```rust
/// use std::collections::BTreeMap;
/// use danesha_core::stock::check_availability;
/// use rust_decimal::Decimal;
///
/// let on_hand = BTreeMap::from([("serum".to_string(), Decimal::from(3))]);
/// let requested = [("serum", Decimal::from(2)), ("serum", Decimal::from(2))];
/// assert!(check_availability(requested, &on_hand).is_err());
/// ```
pub fn check_availability<'a, I>(requested: I, on_hand: &BTreeMap<String, Decimal>) -> CoreResult<()>
where
    I: IntoIterator<Item = (&'a str, Decimal)>,
{
    let mut required: BTreeMap<&str, Decimal> = BTreeMap::new();
    for (product_id, qty) in requested {
        *required.entry(product_id).or_insert(Decimal::ZERO) += qty;
    }

    for (product_id, requested) in required {
        let available = on_hand.get(product_id).copied().unwrap_or(Decimal::ZERO);
        if requested > available {
            return Err(CoreError::InsufficientStock {
                product_id: product_id.to_string(),
                available,
                requested,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn movement(product_id: &str, kind: MovementKind, quantity: Decimal) -> StockMovement {
        StockMovement {
            product_id: product_id.to_string(),
            kind,
            quantity,
        }
    }

    #[test]
    fn test_initial_stock_is_zero() {
        let levels = stock_on_hand(&[]);
        assert!(levels.is_empty());
    }

    #[test]
    fn test_stock_formula() {
        let ledger = vec![
            movement("serum", MovementKind::In, dec!(10)),
            movement("serum", MovementKind::Adjust, dec!(2)),
            movement("serum", MovementKind::Sale, dec!(3)),
            movement("serum", MovementKind::Out, dec!(1)),
            movement("toner", MovementKind::In, dec!(4)),
        ];

        let levels = stock_on_hand(&ledger);
        assert_eq!(levels["serum"], dec!(8));
        assert_eq!(levels["toner"], dec!(4));
    }

    #[test]
    fn test_availability_sums_repeated_products() {
        let on_hand = BTreeMap::from([("serum".to_string(), dec!(5))]);

        assert!(check_availability([("serum", dec!(2)), ("serum", dec!(3))], &on_hand).is_ok());

        let err = check_availability([("serum", dec!(2)), ("serum", dec!(4))], &on_hand)
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                product_id: "serum".to_string(),
                available: dec!(5),
                requested: dec!(6),
            }
        );
    }

    #[test]
    fn test_unknown_product_has_no_stock() {
        let err = check_availability([("mask", dec!(1))], &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));
    }
}
