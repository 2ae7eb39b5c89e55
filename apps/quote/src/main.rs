//! # Danesha Quote Entry Point
//!
//! ```text
//! danesha-quote cart.json > summary.json
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Load configuration from `DANESHA_*`
//! 3. Read and price the cart
//! 4. Print the snapshot JSON to stdout

use std::path::PathBuf;
use std::process::ExitCode;

use danesha_quote::error::QuoteError;
use tracing::error;

fn main() -> ExitCode {
    danesha_quote::init_tracing();

    let result = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(QuoteError::Usage)
        .and_then(|path| danesha_quote::run(&path));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
