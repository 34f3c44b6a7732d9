//! Runtime configuration
//!
//! Defaults come from [`crate::constants`]; a few environment variables
//! override them so the binary can be pointed at another directory.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{LOG_FILE, REQUESTS_DIR, REQUEST_TIMEOUT_SECS};

pub const ENV_REQUESTS_DIR: &str = "COURIER_REQUESTS_DIR";
pub const ENV_TIMEOUT_SECS: &str = "COURIER_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "COURIER_LOG_FILE";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Where named requests are persisted, one file each
    pub requests_dir: PathBuf,
    /// Deadline applied to every send
    pub request_timeout: Duration,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            requests_dir: PathBuf::from(REQUESTS_DIR),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// Rejected values are returned as warnings rather than logged, since
    /// logging is configured from the result.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = AppConfig::default();
        let mut warnings = Vec::new();

        if let Some(dir) = lookup(ENV_REQUESTS_DIR).filter(|v| !v.trim().is_empty()) {
            config.requests_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => warnings.push(format!("Ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, raw)),
            }
        }

        if let Some(file) = lookup(ENV_LOG_FILE).filter(|v| !v.trim().is_empty()) {
            config.log_file = PathBuf::from(file);
        }

        (config, warnings)
    }
}
