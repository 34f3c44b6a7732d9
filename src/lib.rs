//! # Courier TUI
//!
//! A terminal HTTP client: compose a request, send it, inspect the response,
//! and keep named requests on disk.
//!
//! ## Features
//! - HTTP methods: GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS
//! - URL, header and body editors with Tab / Ctrl+N field cycling
//! - Response viewer with request echo, status, headers and body
//! - Saved requests as `requests/<name>.json`
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - draws snapshots, forwards raw input
//! - App Layer (State machine) - sole owner of session state
//! - Network Layer (Tokio) - one-shot HTTP sends
//! - Storage Layer (Tokio blocking pool) - save / load

pub mod constants;
pub mod config;
pub mod models;
pub mod headers;
pub mod storage;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{HeaderMap, HttpMethod, Request, Response};
pub use headers::{format_headers, parse_headers};
pub use config::AppConfig;
pub use messages::{AppEvent, NetworkCommand, NetworkResponse, RenderState, StorageCommand, StorageResponse, UiEvent};
pub use app::{AppActor, AppState, Focus, Mode};
pub use network::NetworkActor;
pub use storage::{Storage, StorageActor};
