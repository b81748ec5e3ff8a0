//! Log-file setup.
//!
//! Diagnostics go to `~/.todo.log`, truncated at the start of each run.
//! Under `--verbose` the same lines are mirrored to stdout.

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log file name under the user's home directory.
const LOG_FILE: &str = ".todo.log";

/// Path of the log file for a given home directory.
pub fn log_path(home: &Path) -> PathBuf {
    home.join(LOG_FILE)
}

/// Install the tracing subscriber. Failure to open the log file is
/// fatal; the run has nowhere to record recoverable errors without it.
pub fn init(home: &Path, verbose: bool) -> Result<()> {
    let path = log_path(home);
    let file = File::create(&path)
        .with_context(|| format!("could not open log file: {}", path.display()))?;

    let file_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_filter(file_filter);

    let console_layer = verbose.then(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_target(false)
            .with_filter(filter)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(())
}
