//! Tracing subscriber setup

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter: `RUST_LOG` when set, the configured directive otherwise
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let from_env = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) => Some(value),
        Err(std::env::VarError::NotPresent) => None,
        Err(e) => return Err(e).context("unreadable RUST_LOG"),
    };
    resolve_filter(from_env.as_deref(), config)
}

/// A present but malformed override is an error, not a silent fallback
fn resolve_filter(from_env: Option<&str>, config: &LoggingConfig) -> Result<EnvFilter> {
    match from_env {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid RUST_LOG '{directives}'")),
        None => EnvFilter::try_new(&config.filter)
            .with_context(|| format!("invalid logging.filter '{}'", config.filter)),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}
