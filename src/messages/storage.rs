//! Storage messages - communication between App and Storage layers

use crate::models::Request;

/// Commands sent from App layer to Storage layer
#[derive(Debug, Clone)]
pub enum StorageCommand {
    /// Persist a named request, then reload the list
    Save(Request),
    /// Reload every saved request
    LoadAll,
    Shutdown,
}

/// Results sent from Storage layer to App layer
#[derive(Debug, Clone)]
pub enum StorageResponse {
    Saved(Vec<Request>),
    Loaded(Vec<Request>),
    Failed(String),
}
