//! # Quote Errors
//!
//! Everything that can stop a quote, from a bad env var to a rejected line.

use std::path::PathBuf;

use danesha_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("usage: danesha-quote <cart.json>")]
    Usage,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid cart JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The cart was read fine but checkout refused it.
    #[error("Checkout rejected: {0}")]
    Checkout(#[from] CoreError),
}

pub type QuoteResult<T> = Result<T, QuoteError>;
