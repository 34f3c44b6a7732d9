//! App layer - central state management and command processing
//!
//! The App actor receives key presses and background results on one queue,
//! updates state, and emits network/storage commands and render state.

pub mod focus;
pub mod input;
pub mod state;
pub mod view;
pub mod actor;
pub mod commands;

pub use focus::Focus;
pub use state::{AppState, Effect, Mode};
pub use actor::AppActor;
