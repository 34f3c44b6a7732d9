//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, Network
//! and Storage layers.

pub mod event;
pub mod ui_events;
pub mod network;
pub mod storage;
pub mod render;

pub use event::AppEvent;
pub use ui_events::UiEvent;
pub use network::{NetworkCommand, NetworkResponse};
pub use storage::{StorageCommand, StorageResponse};
pub use render::RenderState;
