//! File-based logging
//!
//! stdout belongs to the terminal UI, so events go to a log file instead.

use crate::config::Config;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to the configured log file.
///
/// Returns false when no log file could be opened; the game then runs
/// without logging.
pub fn init(config: &Config) -> bool {
    let Some(path) = config.log_path() else {
        return false;
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}
