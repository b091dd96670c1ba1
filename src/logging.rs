//! Tracing setup for the `leadboard` binary.
//!
//! Logs go to stderr so stdout carries only the board and command output.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "leadboard=warn";
const VERBOSE_LOG_FILTER: &str = "leadboard=debug";

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
