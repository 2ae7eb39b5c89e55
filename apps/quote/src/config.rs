//! # Quote Configuration
//!
//! Store settings the quote app needs, loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`DANESHA_*`)
//! 2. Defaults (this file)
//!
//! Read-only after loading, so it is passed around by reference.

use std::env;

use danesha_core::commission::DEFAULT_COMMISSION_PERCENT;
use danesha_core::validation::validate_commission_percent;
use danesha_core::{CheckoutSettings, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quote app configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteConfig {
    /// Store name (log lines, receipts)
    pub store_name: String,

    /// Currency symbol (for display only)
    pub currency_symbol: String,

    /// Commission for staff without their own or a level rate.
    /// Default: 10 (%)
    pub commission_default_percent: Decimal,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        QuoteConfig {
            store_name: "Danesha Clinic".to_string(),
            currency_symbol: "Rp".to_string(),
            commission_default_percent: DEFAULT_COMMISSION_PERCENT,
        }
    }
}

impl QuoteConfig {
    /// Loads configuration from environment variables over the defaults.
    ///
    /// ## Environment Variables
    /// - `DANESHA_STORE_NAME`: Override store name
    /// - `DANESHA_CURRENCY_SYMBOL`: Override currency symbol
    /// - `DANESHA_COMMISSION_PERCENT`: Default commission, e.g. "12.5"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = QuoteConfig::default();

        if let Some(store_name) = lookup("DANESHA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("DANESHA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("DANESHA_COMMISSION_PERCENT") {
            let percent: Decimal = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DANESHA_COMMISSION_PERCENT".to_string()))?;
            validate_commission_percent(percent)
                .map_err(|_| ConfigError::InvalidValue("DANESHA_COMMISSION_PERCENT".to_string()))?;
            config.commission_default_percent = percent;
        }

        Ok(config)
    }

    /// The subset the checkout needs.
    pub fn checkout_settings(&self) -> CheckoutSettings {
        CheckoutSettings {
            commission_default_percent: self.commission_default_percent,
        }
    }

    /// Formats an amount for display, e.g. `Rp150000.00` or `-Rp20.00`.
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, self.currency_symbol, amount.amount().abs())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = QuoteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, QuoteConfig::default());
        assert_eq!(config.commission_default_percent, dec!(10));
    }

    #[test]
    fn test_env_overrides() {
        let config = QuoteConfig::from_lookup(lookup(&[
            ("DANESHA_STORE_NAME", "Danesha Kemang"),
            ("DANESHA_COMMISSION_PERCENT", " 12.5 "),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Danesha Kemang");
        assert_eq!(config.checkout_settings().commission_default_percent, dec!(12.5));
    }

    #[test]
    fn test_invalid_commission_percent() {
        assert!(QuoteConfig::from_lookup(lookup(&[("DANESHA_COMMISSION_PERCENT", "ten")])).is_err());
        assert!(QuoteConfig::from_lookup(lookup(&[("DANESHA_COMMISSION_PERCENT", "150")])).is_err());
    }

    #[test]
    fn test_format_currency() {
        let config = QuoteConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(15000000)), "Rp150000.00");
        assert_eq!(config.format_currency(Money::from_cents(-2000)), "-Rp20.00");
        assert_eq!(config.format_currency(Money::zero()), "Rp0.00");
    }
}
