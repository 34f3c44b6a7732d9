//! The single inbound queue of the App actor
//!
//! Terminal input and the results of background work share one channel so
//! the App actor sees them strictly in arrival order.

use crossterm::event::KeyEvent;

use crate::messages::{NetworkResponse, StorageResponse};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw key press forwarded by the UI loop
    Key(KeyEvent),
    /// Terminal geometry changed
    Resize { width: u16, height: u16 },
    /// A send finished
    Network(NetworkResponse),
    /// A save or load finished
    Storage(StorageResponse),
}
