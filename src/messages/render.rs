//! Render state - read-only snapshot sent from App layer to UI for rendering

use crate::app::focus::Focus;
use crate::app::input::TextInput;
use crate::app::state::Mode;
use crate::models::{Request, Response};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub mode: Mode,
    pub focus: Option<Focus>,

    // Draft and its editors
    pub request: Request,
    pub url_input: TextInput,
    pub headers_input: TextInput,
    pub body_input: TextInput,
    pub method_index: usize,

    // Save prompt
    pub name_input: TextInput,

    // Response viewer
    pub last_response: Option<Response>,
    pub last_response_time_ms: u64,
    pub response_view: String,
    pub response_scroll: u16,

    // Load list
    pub saved_requests: Vec<Request>,
    pub selected_saved: usize,

    pub busy: bool,
    pub last_error: Option<String>,

    pub width: u16,
    pub height: u16,
}
