//! Network messages - communication between App and Network layers

use crate::models::{Request, Response};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Execute one HTTP round trip
    Execute {
        id: u64,
        request: Request,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The send finished; `response.error` is set when it failed
    Completed {
        id: u64,
        response: Response,
        time_ms: u64,
    },
}
