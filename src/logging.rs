//! File-backed tracing setup. The TUI owns the terminal, so log output
//! always goes to a file in the data directory.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::model::config::LogConfig;

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Returns false if the log file could not be opened
/// (logging stays disabled) or a subscriber was already installed.
pub fn init(data_dir: &Path, config: &LogConfig) -> bool {
    if fs::create_dir_all(data_dir).is_err() {
        return false;
    }
    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(&config.file))
    {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
