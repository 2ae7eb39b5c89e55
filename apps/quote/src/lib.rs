//! # Danesha Quote Library
//!
//! Prices a cart file the same way the till does and prints the
//! transaction snapshot as JSON. Nothing is persisted.
//!
//! ## Module Organization
//! ```text
//! danesha_quote/
//! ├── lib.rs          ◄─── You are here (run, tracing, cart file)
//! ├── config.rs       ◄─── DANESHA_* environment configuration
//! └── error.rs        ◄─── QuoteError
//! ```
//!
//! ## Cart File
//! ```json
//! {
//!   "paymentMethod": "CASH",
//!   "paidAmount": "250000",
//!   "items": [
//!     { "itemType": "TREATMENT", "itemId": "facial-basic", "qty": 1,
//!       "unitPrice": "200000", "costPrice": "50000",
//!       "discountType": "PERCENT", "discountValue": "10",
//!       "therapist": { "staffId": "th-01", "levelDefaultPercent": "15" } }
//!   ],
//!   "stock": [ { "productId": "serum-30", "kind": "IN", "quantity": 5 } ]
//! }
//! ```
//! `stock` is optional; without it the availability check is skipped.

pub mod config;
pub mod error;

use std::fs;
use std::path::Path;

use chrono::Local;
use danesha_core::checkout::{self, CheckoutRequest, CheckoutSummary};
use danesha_core::stock::StockMovement;
use danesha_core::types::new_transaction_number;
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::QuoteConfig;
use error::{QuoteError, QuoteResult};

/// A cart file: the checkout request plus an optional stock ledger.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartFile {
    #[serde(flatten)]
    pub request: CheckoutRequest,
    #[serde(default)]
    pub stock: Option<Vec<StockMovement>>,
}

/// Parses a cart file's JSON.
pub fn parse_cart(json: &str) -> QuoteResult<CartFile> {
    Ok(serde_json::from_str(json)?)
}

/// Prices a parsed cart under `config`, numbering it `number`.
pub fn quote(cart: &CartFile, config: &QuoteConfig, number: String) -> QuoteResult<CheckoutSummary> {
    let settings = config.checkout_settings();
    let summary = match &cart.stock {
        Some(ledger) => checkout::checkout_with_ledger(&cart.request, &settings, ledger, number)?,
        None => {
            warn!("No stock ledger in cart file, skipping availability check");
            checkout::checkout(&cart.request, &settings, None, number)?
        }
    };
    Ok(summary)
}

/// Reads, prices and prints the cart at `path`.
pub fn run(path: &Path) -> QuoteResult<()> {
    let config = QuoteConfig::from_env()?;
    info!(store = %config.store_name, commission = %config.commission_default_percent, "Configuration loaded");

    let json = fs::read_to_string(path).map_err(|source| QuoteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cart = parse_cart(&json)?;

    let number = new_transaction_number(Local::now().naive_local());
    let summary = quote(&cart, &config, number)?;

    info!(
        number = %summary.number,
        lines = summary.lines.len(),
        total = %config.format_currency(summary.total),
        change = %config.format_currency(summary.change_amount),
        "Cart priced"
    );

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show per-line pricing
/// - Default: INFO for the quote app, WARN for everything else
///
/// Logs go to stderr so stdout stays valid JSON.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,danesha_quote=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use danesha_core::CoreError;

    const CART: &str = r#"{
        "paymentMethod": "QRIS",
        "paidAmount": "250000",
        "items": [
            { "itemType": "TREATMENT", "itemId": "facial-basic", "qty": 1,
              "unitPrice": "200000", "costPrice": "50000",
              "discountType": "PERCENT", "discountValue": "10",
              "therapist": { "staffId": "th-01", "levelDefaultPercent": "15" } },
            { "itemType": "PRODUCT", "itemId": "serum-30", "qty": 2,
              "unitPrice": "25000.005", "costPrice": "12000" }
        ],
        "stock": [
            { "productId": "serum-30", "kind": "IN", "quantity": 5 },
            { "productId": "serum-30", "kind": "SALE", "quantity": 1 }
        ]
    }"#;

    #[test]
    fn test_quote_cart_file() {
        let cart = parse_cart(CART).unwrap();
        let summary = quote(&cart, &QuoteConfig::default(), "T-1".to_string()).unwrap();

        // facial: 200000 - 10% = 180000, commission 15% = 27000
        // serum: 25000.01 × 2 = 50000.02
        assert_eq!(summary.subtotal.to_string(), "250000.02");
        assert_eq!(summary.total.to_string(), "230000.02");
        assert_eq!(summary.commission_total.to_string(), "27000.00");
        // (180000 - 50000 - 27000) + (50000.02 - 24000)
        assert_eq!(summary.profit_total.to_string(), "129000.02");
        assert_eq!(summary.change_amount.to_string(), "19999.98");
        assert_eq!(summary.payment_method, "QRIS");
    }

    #[test]
    fn test_quote_without_ledger_skips_stock() {
        let mut cart = parse_cart(CART).unwrap();
        cart.stock = None;
        cart.request.items[1].pricing.qty = danesha_core::Quantity::units(50);

        assert!(quote(&cart, &QuoteConfig::default(), "T-2".to_string()).is_ok());
    }

    #[test]
    fn test_quote_reports_stock_shortfall() {
        let mut cart = parse_cart(CART).unwrap();
        cart.request.items[1].pricing.qty = danesha_core::Quantity::units(5);

        let err = quote(&cart, &QuoteConfig::default(), "T-3".to_string()).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::Checkout(CoreError::InsufficientStock { .. })
        ));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(parse_cart("{"), Err(QuoteError::Json(_))));
    }
}
