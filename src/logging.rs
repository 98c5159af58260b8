//! Opt-in file logging
//!
//! Stdout carries the hook response and stderr may be shown to the user, so
//! neither is ever used for logs. Without a log file nothing is installed and
//! every `tracing` event is dropped.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

/// Install the file subscriber. Returns `false` when logging is disabled.
pub fn init(config: &LogConfig) -> Result<bool> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level: {}", config.level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(log_file).with_ansi(false))
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(true)
}
