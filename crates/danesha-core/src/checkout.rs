//! # Checkout Module
//!
//! Turns a priced cart into the transaction snapshot the caller persists.
//!
//! Prices arrive already looked up server-side (never from the client).
//! Discounts are whatever the cashier typed for each line.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         checkout()                                      │
//! │                                                                         │
//! │  1. Cart not empty                                                      │
//! │  2. Stock: Σ qty per product ≤ on hand          (products only)         │
//! │  3. For each line:                                                      │
//! │     ├── qty > 0, discount ≥ 0, therapist present (treatments)          │
//! │     ├── line::calculate()  ──► LineBreakdown snapshot                   │
//! │     ├── reject discount ≥ subtotal, reject line total ≤ 0               │
//! │     └── treatments: commissions on line total, net profit              │
//! │  4. Totals = Σ snapshots, paid, change                                 │
//! │  5. Reject total ≤ 0                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here reads a clock or a database. The transaction number is
//! passed in so the same request always produces the same summary.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use ts_rs::TS;

use crate::commission::{self, CommissionSource, StaffCommission, StaffRole};
use crate::discount::DiscountType;
use crate::error::{CoreError, CoreResult};
use crate::line::{LineBreakdown, LineInput};
use crate::money::Money;
use crate::stock;
use crate::types::{ItemType, Quantity, TransactionStatus};
use crate::validation;

// =============================================================================
// Request Types
// =============================================================================

/// Settings the checkout needs from the store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSettings {
    /// Commission rate for staff with no rate of their own.
    pub commission_default_percent: Decimal,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        CheckoutSettings {
            commission_default_percent: commission::DEFAULT_COMMISSION_PERCENT,
        }
    }
}

/// One cart line with its server-side prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLine {
    pub item_type: ItemType,
    /// Product or treatment id.
    pub item_id: String,
    #[serde(flatten)]
    pub pricing: LineInput,
    /// Required for treatments.
    #[serde(default)]
    pub therapist: Option<CommissionSource>,
    #[serde(default)]
    pub assistant: Option<CommissionSource>,
}

/// A cart ready to be paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutLine>,
    /// Free-form tender label (`CASH`, `QRIS`, ...), stored as given.
    pub payment_method: String,
    #[ts(type = "string")]
    pub paid_amount: Decimal,
}

// =============================================================================
// Snapshot Types
// =============================================================================

/// A transaction line as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    pub item_type: ItemType,
    pub item_id: String,
    pub qty: Quantity,
    pub unit_price: Money,
    pub cost_price: Money,
    pub discount_type: Option<DiscountType>,
    #[ts(type = "string")]
    pub discount_value: Decimal,
    pub breakdown: LineBreakdown,
    pub commissions: Vec<StaffCommission>,
    /// Gross profit minus commissions. Equals `breakdown.profit` for products.
    pub net_profit: Money,
}

impl PricedLine {
    pub fn commission_total(&self) -> Money {
        self.commissions
            .iter()
            .fold(Money::zero(), |acc, c| acc + c.amount)
    }
}

/// The whole transaction as persisted and shown on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub number: String,
    pub status: TransactionStatus,
    pub payment_method: String,
    pub subtotal: Money,
    pub discount_total: Money,
    pub total: Money,
    pub cost_total: Money,
    pub profit_total: Money,
    pub commission_total: Money,
    pub paid_amount: Money,
    pub change_amount: Money,
    pub lines: Vec<PricedLine>,
}

// =============================================================================
// Line Pricing
// =============================================================================

/// Prices one cart line and applies the checkout guards.
#[instrument(skip_all, fields(item_id = %line.item_id, item_type = ?line.item_type))]
pub fn price_line(line: &CheckoutLine, settings: &CheckoutSettings) -> CoreResult<PricedLine> {
    let input = &line.pricing;

    validation::validate_required("itemId", &line.item_id)?;
    validation::validate_checkout_quantity(input.qty)?;
    input.validate()?;

    let therapist = match (line.item_type, &line.therapist) {
        (ItemType::Treatment, None) => {
            return Err(CoreError::TherapistRequired {
                item_id: line.item_id.clone(),
            })
        }
        (ItemType::Treatment, Some(t)) => {
            validation::validate_required("therapistId", &t.staff_id)?;
            Some(t)
        }
        (ItemType::Product, _) => None,
    };

    let breakdown = input.calculate()?;

    if breakdown.line_discount >= breakdown.subtotal {
        return Err(CoreError::DiscountTooLarge {
            item_id: line.item_id.clone(),
            discount: breakdown.line_discount,
            subtotal: breakdown.subtotal,
        });
    }
    if !breakdown.line_total.is_positive() {
        return Err(CoreError::NonPositiveLineTotal {
            item_id: line.item_id.clone(),
            line_total: breakdown.line_total,
        });
    }

    let mut commissions = Vec::new();
    if let Some(therapist) = therapist {
        let default = settings.commission_default_percent;
        commissions.push(commission::commission_for(
            therapist,
            StaffRole::Therapist,
            breakdown.line_total,
            default,
        )?);
        if let Some(assistant) = &line.assistant {
            validation::validate_required("assistantId", &assistant.staff_id)?;
            commissions.push(commission::commission_for(
                assistant,
                StaffRole::Assistant,
                breakdown.line_total,
                default,
            )?);
        }
    }
    let net_profit = commission::net_profit(breakdown.profit, &commissions)?;

    debug!(
        subtotal = %breakdown.subtotal,
        discount = %breakdown.line_discount,
        line_total = %breakdown.line_total,
        net_profit = %net_profit,
        "Line priced"
    );

    Ok(PricedLine {
        item_type: line.item_type,
        item_id: line.item_id.clone(),
        qty: input.qty,
        unit_price: Money::from_decimal(input.unit_price),
        cost_price: Money::from_decimal(input.cost_price),
        discount_type: input.discount_type,
        discount_value: input.discount_value,
        breakdown,
        commissions,
        net_profit,
    })
}

// =============================================================================
// Checkout
// =============================================================================

/// Running sums over priced lines.
#[derive(Debug, Default)]
struct Totals {
    subtotal: Money,
    discount: Money,
    total: Money,
    cost: Money,
    profit: Money,
    commission: Money,
}

impl Totals {
    fn add(&mut self, line: &PricedLine) -> CoreResult<()> {
        let overflow = || CoreError::Overflow { operation: "transaction totals" };
        let b = &line.breakdown;
        self.subtotal = self.subtotal.checked_add(b.subtotal).ok_or_else(overflow)?;
        self.discount = self.discount.checked_add(b.line_discount).ok_or_else(overflow)?;
        self.total = self.total.checked_add(b.line_total).ok_or_else(overflow)?;
        self.cost = self.cost.checked_add(b.cost_total).ok_or_else(overflow)?;
        self.profit = self.profit.checked_add(line.net_profit).ok_or_else(overflow)?;
        self.commission = self
            .commission
            .checked_add(line.commission_total())
            .ok_or_else(overflow)?;
        Ok(())
    }
}

/// Prices a whole cart.
///
/// `on_hand` is the stock level per product id; pass `None` to skip the
/// availability check (e.g. a quote with no ledger at hand).
///
/// ## Errors
/// The first failing guard, in flow order. Nothing is partially returned.
#[instrument(skip_all, fields(number = %number, items = request.items.len()))]
pub fn checkout(
    request: &CheckoutRequest,
    settings: &CheckoutSettings,
    on_hand: Option<&BTreeMap<String, Decimal>>,
    number: String,
) -> CoreResult<CheckoutSummary> {
    if request.items.is_empty() {
        return Err(CoreError::EmptyCart);
    }
    validation::validate_required("paymentMethod", &request.payment_method)?;
    validation::validate_paid_amount(request.paid_amount)?;

    if let Some(on_hand) = on_hand {
        let requested = request
            .items
            .iter()
            .filter(|it| it.item_type == ItemType::Product)
            .map(|it| (it.item_id.as_str(), it.pricing.qty.value()));
        stock::check_availability(requested, on_hand)?;
    }

    let lines = request
        .items
        .iter()
        .map(|line| price_line(line, settings))
        .collect::<CoreResult<Vec<_>>>()?;

    let mut totals = Totals::default();
    for line in &lines {
        totals.add(line)?;
    }

    if !totals.total.is_positive() {
        return Err(CoreError::NonPositiveTotal {
            total: totals.total,
        });
    }

    let paid_amount = Money::from_decimal(request.paid_amount);
    let change_amount = paid_amount
        .checked_sub(totals.total)
        .ok_or(CoreError::Overflow { operation: "change" })?;

    debug!(
        total = %totals.total,
        profit = %totals.profit,
        commission = %totals.commission,
        change = %change_amount,
        "Checkout priced"
    );

    Ok(CheckoutSummary {
        number,
        status: TransactionStatus::Paid,
        payment_method: request.payment_method.clone(),
        subtotal: totals.subtotal,
        discount_total: totals.discount,
        total: totals.total,
        cost_total: totals.cost,
        profit_total: totals.profit,
        commission_total: totals.commission,
        paid_amount,
        change_amount,
        lines,
    })
}

/// Convenience for callers holding a raw ledger.
pub fn checkout_with_ledger(
    request: &CheckoutRequest,
    settings: &CheckoutSettings,
    ledger: &[stock::StockMovement],
    number: String,
) -> CoreResult<CheckoutSummary> {
    let on_hand = stock::stock_on_hand(ledger);
    checkout(request, settings, Some(&on_hand), number)
}

// =============================================================================
// Unit Tests
// =============================================================================
