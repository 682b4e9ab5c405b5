//! Tracing subscriber setup.
//!
//! The TUI owns the screen, so logs only go to a file, and only when one is
//! asked for on the command line.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use color_eyre::eyre::WrapErr;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter from `RUST_LOG`, falling back to `info`.
pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `log_file_path` (truncated).
pub fn init(log_file_path: &Path) -> color_eyre::Result<()> {
    let log_file = File::create(log_file_path)
        .wrap_err_with(|| format!("cannot create log file {}", log_file_path.display()))?;
    build_subscriber(log_file, default_filter())
        .try_init()
        .wrap_err("tracing subscriber already installed")?;
    Ok(())
}

/// Subscriber shared by `init` and tests.
pub fn build_subscriber(log_file: File, filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}
