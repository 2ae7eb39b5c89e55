//! # danesha-core: Pure Business Logic for Danesha POS
//!
//! The money math of a clinic point-of-sale: what a line costs, what it
//! earns, what the therapist is owed and what goes on the receipt.
//! Every function is pure, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Danesha POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Web checkout / pricing lookup / persistence            │   │
//! │  │     (session, price tables, transaction rows: NOT here)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ prices, qty, cashier discount          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ danesha-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌────────────┐  ┌──────────┐     │   │
//! │  │   │  money   │  │   line   │  │ commission │  │ checkout │     │   │
//! │  │   │  round2  │─►│calculate │─►│  rates     │─►│  totals  │     │   │
//! │  │   └──────────┘  └──────────┘  └────────────┘  └──────────┘     │   │
//! │  │        discount · types · stock · validation · error            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Money` and the single `round2` rounding rule
//! - [`discount`] - Cashier discount sum type
//! - [`line`] - Line calculation engine (`calculate`)
//! - [`commission`] - Staff commission rates and amounts
//! - [`stock`] - Stock on hand from the movement ledger
//! - [`checkout`] - Per-line guards and transaction totals
//! - [`types`] - Quantity, item type, transaction number
//! - [`validation`] - Input-layer checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, safe to call from any thread
//! 2. **Exact Decimals**: `rust_decimal`, never `f64`
//! 3. **Round Every Step**: half-up to 2dp at each rounding point, not once at the end
//! 4. **Snapshots**: line results are stored and read back, never recomputed
//!
//! ## Example Usage
//!
//! ```rust
//! use danesha_core::{calculate, DiscountSpec, Quantity};
//! use rust_decimal::Decimal;
//!
//! let line = calculate(
//!     Decimal::new(3333, 2),                 // 33.33
//!     Quantity::units(3),
//!     DiscountSpec::Percent(Decimal::from(15)),
//!     Decimal::new(1000, 2),                 // 10.00
//! )
//! .unwrap();
//!
//! assert_eq!(line.subtotal.to_string(), "99.99");
//! assert_eq!(line.line_discount.to_string(), "15.00");
//! assert_eq!(line.line_total.to_string(), "84.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod commission;
pub mod discount;
pub mod error;
pub mod line;
pub mod money;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{checkout, CheckoutLine, CheckoutRequest, CheckoutSettings, CheckoutSummary, PricedLine};
pub use discount::{DiscountSpec, DiscountType};
pub use error::{CoreError, CoreResult, ValidationError};
pub use line::{calculate, LineBreakdown, LineInput};
pub use money::{round2, Money};
pub use types::*;
