//! Logging bootstrap for the salesgraph binary

use crate::{ReportError, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with the given level filter.
///
/// Falls back to `info` when the filter string does not parse.
pub fn init(level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(level).or_else(|_| EnvFilter::try_new("info")).unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| ReportError::config(format!("failed to initialize logging: {e}")))
}
