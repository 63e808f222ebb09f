//! Tracing setup: filtered console output plus a daily rolling log file.

use crate::config::runtime::RuntimeConfig;
use crate::constants::LOG_FILE_NAME;
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process so buffered file output is flushed on exit.
pub fn init_logging(runtime: &RuntimeConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&runtime.log_dir)
        .with_context(|| format!("Failed to create log directory '{}'", runtime.log_dir))?;

    let file_appender = tracing_appender::rolling::daily(&runtime.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Console Layer (RUST_LOG wins over the configured filter)
    let console_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&runtime.log_filter))
        .context("Invalid log filter")?;
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    // File Layer (Simple Text)
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_target(false)
        .with_filter(
            EnvFilter::try_new(format!("{},grid_bot_validator=debug", runtime.log_filter))
                .context("Invalid log filter")?,
        );

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
