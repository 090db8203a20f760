//! Log initialization.
//!
//! The TUI owns stdout, so logs go to `~/.cloudvault/cloudvault.log`.
//! `CLOUDVAULT_LOG` takes the usual env-filter syntax (default `info`).

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::storage;

/// Environment variable controlling the log filter.
pub const LOG_FILTER_ENV: &str = "CLOUDVAULT_LOG";

/// Install the global tracing subscriber writing to the log file.
///
/// Logging is best-effort: when the data directory is unavailable the
/// subscriber is simply not installed and the client runs silent.
pub fn init() {
    let Ok(path) = storage::log_file_path() else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init: tests may install their own subscriber first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
