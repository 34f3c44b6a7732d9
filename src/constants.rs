//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Directory (relative to the working directory) holding saved requests
pub const REQUESTS_DIR: &str = "requests";

/// Extension of saved request files
pub const REQUEST_FILE_EXTENSION: &str = "json";

/// Fixed deadline for a single send
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Log file written by the binary (stdout belongs to the terminal UI)
pub const LOG_FILE: &str = "courier.log";

/// Content type applied when a body is sent without an explicit one
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Application name
pub const APP_NAME: &str = "Courier";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
