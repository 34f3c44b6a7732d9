//! Command handlers - the interaction state machine
//!
//! Every key press is mapped against the current mode and focus, then
//! dispatched by mode. Handlers mutate the state and return the background
//! work (if any) the App actor should start.

use crossterm::event::KeyEvent;

use crate::app::focus::{self, Focus};
use crate::app::state::{AppState, Effect, Mode};
use crate::app::view::compose_response_view;
use crate::headers::parse_headers;
use crate::messages::ui_events::key_to_ui_event;
use crate::messages::{NetworkCommand, NetworkResponse, StorageCommand, StorageResponse, UiEvent};
use crate::models::HttpMethod;

impl AppState {
    // ========================
    // Dispatch
    // ========================

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        let event = key_to_ui_event(key, self.mode, self.focused_field())?;
        self.handle_ui_event(event)
    }

    pub fn handle_ui_event(&mut self, event: UiEvent) -> Option<Effect> {
        if event == UiEvent::Quit {
            return Some(Effect::Quit);
        }

        let before = self.mode;
        let effect = match self.mode {
            Mode::Idle => self.on_idle(event),
            Mode::Editing => self.on_editing(event),
            Mode::ViewingResponse => self.on_viewing_response(event),
            Mode::Saving { resume } => self.on_saving(event, resume),
            Mode::Loading => self.on_loading(event),
        };
        if self.mode != before {
            tracing::debug!(from = ?before, to = ?self.mode, ?event, "Mode transition");
        }
        effect
    }

    fn on_idle(&mut self, event: UiEvent) -> Option<Effect> {
        // Only quit is honored while a send is outstanding
        if self.busy {
            return None;
        }
        match event {
            UiEvent::Edit => {
                self.start_editing(Focus::Url);
                None
            }
            UiEvent::Send => self.prepare_send(),
            UiEvent::Load => self.start_loading(),
            _ => None,
        }
    }

    fn on_editing(&mut self, event: UiEvent) -> Option<Effect> {
        match event {
            UiEvent::Escape => {
                self.mode = Mode::Idle;
                self.focus = None;
                None
            }
            UiEvent::NextField => {
                self.next_field();
                None
            }
            UiEvent::Send => {
                self.commit_method();
                self.prepare_send()
            }
            UiEvent::Save => {
                self.commit_method();
                self.start_saving();
                None
            }
            UiEvent::SelectPrev if self.focus == Some(Focus::Method) => {
                self.prev_method();
                None
            }
            UiEvent::SelectNext if self.focus == Some(Focus::Method) => {
                self.next_method();
                None
            }
            UiEvent::Confirm if self.focus == Some(Focus::Method) => {
                self.next_field();
                None
            }
            other => {
                self.edit_focused(other);
                None
            }
        }
    }

    fn on_viewing_response(&mut self, event: UiEvent) -> Option<Effect> {
        match event {
            UiEvent::Close | UiEvent::Escape => self.mode = Mode::Idle,
            UiEvent::Edit => self.start_editing(Focus::Url),
            UiEvent::ScrollUp => self.scroll_by(-1),
            UiEvent::ScrollDown => self.scroll_by(1),
            UiEvent::PageUp => self.scroll_by(-self.page_size()),
            UiEvent::PageDown => self.scroll_by(self.page_size()),
            UiEvent::ScrollTop => self.response_scroll = 0,
            _ => {}
        }
        None
    }

    fn on_saving(&mut self, event: UiEvent, resume: Focus) -> Option<Effect> {
        match event {
            UiEvent::Escape => {
                self.resume_editing(resume);
                None
            }
            UiEvent::Confirm => self.confirm_save(resume),
            other => {
                self.name_input.apply(other, false);
                None
            }
        }
    }

    fn on_loading(&mut self, event: UiEvent) -> Option<Effect> {
        match event {
            UiEvent::Escape => self.mode = Mode::Idle,
            UiEvent::SelectPrev => self.prev_saved(),
            UiEvent::SelectNext => self.next_saved(),
            UiEvent::Confirm => self.confirm_load(),
            _ => {}
        }
        None
    }

    // ========================
    // Editing
    // ========================

    pub fn start_editing(&mut self, focus: Focus) {
        self.mode = Mode::Editing;
        self.set_focus(focus);
    }

    fn resume_editing(&mut self, focus: Focus) {
        self.mode = Mode::Editing;
        self.set_focus(focus);
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::Method {
            self.method_index = self.request.method.index();
        }
        self.focus = Some(focus);
    }

    /// Move focus along the field cycle, committing the method when leaving it
    pub fn next_field(&mut self) {
        let Some(current) = self.focus else {
            return;
        };
        if current == Focus::Method {
            self.commit_method();
        }
        self.set_focus(focus::advance(current));
    }

    /// Route a text event to the focused field and mirror it into the draft
    fn edit_focused(&mut self, event: UiEvent) {
        let Some(focus) = self.focus else {
            return;
        };
        let Some(input) = self.input_for_mut(focus) else {
            return;
        };
        if input.apply(event, focus.is_multiline()) {
            self.sync_field(focus);
        }
    }

    fn sync_field(&mut self, focus: Focus) {
        match focus {
            Focus::Url => self.request.url = self.url_input.value().to_string(),
            Focus::Headers => self.request.headers = parse_headers(self.headers_input.value()),
            Focus::Body => self.request.body = self.body_input.value().to_string(),
            Focus::Method => {}
        }
    }

    // ========================
    // HTTP Method
    // ========================

    fn next_method(&mut self) {
        self.method_index = (self.method_index + 1) % HttpMethod::ALL.len();
    }

    fn prev_method(&mut self) {
        self.method_index = self
            .method_index
            .checked_sub(1)
            .unwrap_or(HttpMethod::ALL.len() - 1);
    }

    fn commit_method(&mut self) {
        if self.focus == Some(Focus::Method) {
            self.request.method = self.selected_method();
        }
    }

    // ========================
    // Response scrolling
    // ========================

    fn page_size(&self) -> i32 {
        i32::from(self.height.saturating_sub(6)).max(1)
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = self.response_view.lines().count().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        let next = i32::from(self.response_scroll) + delta;
        self.response_scroll = next.clamp(0, i32::from(max)) as u16;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    // ========================
    // Save / load
    // ========================

    fn start_saving(&mut self) {
        let resume = self.focus.unwrap_or_default();
        self.name_input.set_value(self.request.name.as_str());
        self.focus = None;
        self.mode = Mode::Saving { resume };
    }

    fn confirm_save(&mut self, resume: Focus) -> Option<Effect> {
        if self.name_input.is_empty() {
            return None;
        }
        self.request.name = self.name_input.value().to_string();
        self.name_input.reset();
        self.resume_editing(resume);
        Some(Effect::Storage(StorageCommand::Save(self.request.clone())))
    }

    fn start_loading(&mut self) -> Option<Effect> {
        self.mode = Mode::Loading;
        self.clamp_selection();
        Some(Effect::Storage(StorageCommand::LoadAll))
    }

    fn next_saved(&mut self) {
        if !self.saved_requests.is_empty() {
            self.selected_saved = (self.selected_saved + 1) % self.saved_requests.len();
        }
    }

    fn prev_saved(&mut self) {
        if !self.saved_requests.is_empty() {
            self.selected_saved = self
                .selected_saved
                .checked_sub(1)
                .unwrap_or(self.saved_requests.len() - 1);
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_saved >= self.saved_requests.len() {
            self.selected_saved = self.saved_requests.len().saturating_sub(1);
        }
    }

    fn confirm_load(&mut self) {
        if let Some(request) = self.saved_requests.get(self.selected_saved).cloned() {
            tracing::info!(name = %request.name, "Loaded saved request");
            self.replace_request(request);
            self.mode = Mode::Idle;
        }
    }

    pub fn handle_storage_response(&mut self, response: StorageResponse) {
        match response {
            StorageResponse::Saved(requests) => {
                self.saved_requests = requests;
                self.last_error = None;
            }
            StorageResponse::Loaded(requests) => self.saved_requests = requests,
            StorageResponse::Failed(message) => {
                tracing::warn!(error = %message, "Storage operation failed");
                self.last_error = Some(message);
            }
        }
        self.clamp_selection();
    }

    // ========================
    // Request sending
    // ========================

    /// Start a send unless one is outstanding or the URL is empty
    pub fn prepare_send(&mut self) -> Option<Effect> {
        if self.busy || self.request.url.is_empty() {
            return None;
        }

        self.busy = true;
        self.mode = Mode::Idle;
        self.focus = None;

        let id = self.next_id();
        self.pending_request_id = Some(id);

        Some(Effect::Network(NetworkCommand::Execute {
            id,
            request: self.request.clone(),
        }))
    }

    pub fn handle_network_response(&mut self, response: NetworkResponse) {
        let NetworkResponse::Completed { id, response, time_ms } = response;
        if self.pending_request_id != Some(id) {
            tracing::warn!(id, "Ignoring response for a request that is not pending");
            return;
        }

        self.busy = false;
        self.pending_request_id = None;
        self.focus = None;

        if response.is_failure() {
            self.last_error = response.error;
            self.mode = Mode::Idle;
            return;
        }

        self.response_view = compose_response_view(&self.request, &response);
        self.response_scroll = 0;
        self.last_response = Some(response);
        self.last_response_time_ms = time_ms;
        self.last_error = None;
        self.mode = Mode::ViewingResponse;
    }
}
