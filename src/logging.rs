//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.log_level` (a `RUST_LOG`-style directive
/// string); the output is human-readable text or JSON per `config.log_format`.
///
/// # Errors
///
/// Returns an error if the filter directives are invalid or a subscriber is
/// already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if config.log_format == "json" {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.with_target(false).try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
