//! Tracing setup.
//!
//! The preview owns stdout, so log output goes to `<log_dir>/ghostty.log`.
//! The filter comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "ghostty.log";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "ghostty=debug,info";

/// Installs the global subscriber, appending to `<log_dir>/ghostty.log`.
///
/// Returns the log file path. If a global subscriber is already installed
/// the existing one is kept.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
pub fn init_logging(log_dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(log_dir)?;
    let log_path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    Ok(log_path)
}
