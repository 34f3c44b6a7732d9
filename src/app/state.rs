//! App state - pure data structure with no I/O logic

use crate::app::focus::Focus;
use crate::app::input::TextInput;
use crate::headers::format_headers;
use crate::messages::{NetworkCommand, RenderState, StorageCommand};
use crate::models::{HttpMethod, Request, Response};

/// Top-level UI mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Summary of the current request; send, edit or load from here
    #[default]
    Idle,
    /// Four-field request form
    Editing,
    /// Scrollable response viewer
    ViewingResponse,
    /// Name prompt; `resume` is the editor field to return to
    Saving { resume: Focus },
    /// Saved request picker
    Loading,
}

impl Mode {
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Idle => "HTTP Client",
            Mode::Editing => "Edit Request",
            Mode::ViewingResponse => "Response",
            Mode::Saving { .. } => "Save Request",
            Mode::Loading => "Load Request",
        }
    }
}

/// Work the App actor must hand off after an event
#[derive(Debug, Clone)]
pub enum Effect {
    Network(NetworkCommand),
    Storage(StorageCommand),
    Quit,
}

/// Session state, owned and mutated only by the App actor
#[derive(Debug, Default)]
pub struct AppState {
    pub mode: Mode,
    /// Some only while editing
    pub focus: Option<Focus>,

    // Draft request and the editors mirroring it
    pub request: Request,
    pub url_input: TextInput,
    pub headers_input: TextInput,
    pub body_input: TextInput,
    /// Method cursor, committed to the draft when the field is left
    pub method_index: usize,

    // Save prompt
    pub name_input: TextInput,

    // HTTP Response
    pub last_response: Option<Response>,
    pub last_response_time_ms: u64,
    pub response_view: String,
    pub response_scroll: u16,

    // Saved requests
    pub saved_requests: Vec<Request>,
    pub selected_saved: usize,

    // Send tracking
    pub busy: bool,
    pub pending_request_id: Option<u64>,
    next_request_id: u64,

    pub last_error: Option<String>,

    // Terminal geometry, layout only
    pub width: u16,
    pub height: u16,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            next_request_id: 1,
            ..AppState::default()
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Field that owns keyboard input, if any
    pub fn focused_field(&self) -> Option<Focus> {
        match self.mode {
            Mode::Editing => self.focus,
            _ => None,
        }
    }

    /// Editor backing a text field
    pub fn input_for_mut(&mut self, focus: Focus) -> Option<&mut TextInput> {
        match focus {
            Focus::Url => Some(&mut self.url_input),
            Focus::Headers => Some(&mut self.headers_input),
            Focus::Body => Some(&mut self.body_input),
            Focus::Method => None,
        }
    }

    /// Method under the method cursor
    pub fn selected_method(&self) -> HttpMethod {
        HttpMethod::from_index(self.method_index)
    }

    /// Replace the draft wholesale and rebuild every editor from it
    pub fn replace_request(&mut self, request: Request) {
        self.url_input.set_value(request.url.as_str());
        self.headers_input.set_value(format_headers(&request.headers));
        self.body_input.set_value(request.body.as_str());
        self.method_index = request.method.index();
        self.request = request;
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            focus: self.focused_field(),
            request: self.request.clone(),
            url_input: self.url_input.clone(),
            headers_input: self.headers_input.clone(),
            body_input: self.body_input.clone(),
            method_index: self.method_index,
            name_input: self.name_input.clone(),
            last_response: self.last_response.clone(),
            last_response_time_ms: self.last_response_time_ms,
            response_view: self.response_view.clone(),
            response_scroll: self.response_scroll,
            saved_requests: self.saved_requests.clone(),
            selected_saved: self.selected_saved,
            busy: self.busy,
            last_error: self.last_error.clone(),
            width: self.width,
            height: self.height,
        }
    }
}
