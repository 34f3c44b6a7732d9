//! UI events - key presses translated for the App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::focus::Focus;
use crate::app::state::Mode;

/// Events generated from user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    // Mode transitions
    Edit,
    Send,
    Load,
    Save,
    Escape,
    Confirm,
    Close,

    // Field navigation
    NextField,

    // Text editing
    CharInput(char),
    Newline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Lists (method cursor, saved requests)
    SelectPrev,
    SelectNext,

    // Response viewer
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,

    // System
    Quit,
}

/// True for the keys that move focus to the next field
pub fn is_navigation_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab => true,
        KeyCode::Char('n') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Convert a key event to a UiEvent based on the current mode and focus
pub fn key_to_ui_event(key: KeyEvent, mode: Mode, focus: Option<Focus>) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    match mode {
        Mode::Idle => handle_idle_keys(key),
        Mode::Editing => handle_editing_keys(key, focus),
        Mode::ViewingResponse => handle_viewer_keys(key),
        Mode::Saving { .. } => match key.code {
            KeyCode::Esc => Some(UiEvent::Escape),
            KeyCode::Enter => Some(UiEvent::Confirm),
            _ => text_keys(key, false),
        },
        Mode::Loading => match key.code {
            KeyCode::Esc => Some(UiEvent::Escape),
            KeyCode::Enter => Some(UiEvent::Confirm),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
            _ => None,
        },
    }
}

fn handle_idle_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('e') | KeyCode::Char('n') => Some(UiEvent::Edit),
        KeyCode::Char('s') | KeyCode::Enter => Some(UiEvent::Send),
        KeyCode::Char('l') => Some(UiEvent::Load),
        _ => None,
    }
}

fn handle_editing_keys(key: KeyEvent, focus: Option<Focus>) -> Option<UiEvent> {
    // Navigation is resolved here so no field ever receives the key as input
    if is_navigation_key(&key) {
        return Some(UiEvent::NextField);
    }

    if key.code == KeyCode::Esc {
        return Some(UiEvent::Escape);
    }

    if let KeyCode::Char('s') = key.code {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(UiEvent::Send);
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return Some(UiEvent::Save);
        }
    }

    match focus? {
        Focus::Method => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
            KeyCode::Enter => Some(UiEvent::Confirm),
            _ => None,
        },
        field => text_keys(key, field.is_multiline()),
    }
}

fn handle_viewer_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(UiEvent::Close),
        KeyCode::Char('e') => Some(UiEvent::Edit),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::ScrollDown),
        KeyCode::PageUp => Some(UiEvent::PageUp),
        KeyCode::PageDown => Some(UiEvent::PageDown),
        KeyCode::Home => Some(UiEvent::ScrollTop),
        _ => None,
    }
}

/// Keys understood by a text field
fn text_keys(key: KeyEvent, multiline: bool) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(UiEvent::CharInput(c))
        }
        KeyCode::Enter if multiline => Some(UiEvent::Newline),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Delete => Some(UiEvent::Delete),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Home => Some(UiEvent::CursorHome),
        KeyCode::End => Some(UiEvent::CursorEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_navigation_keys_never_become_input() {
        for focus in Focus::ALL {
            for nav in [key(KeyCode::Tab), ctrl('n')] {
                assert_eq!(
                    key_to_ui_event(nav, Mode::Editing, Some(focus)),
                    Some(UiEvent::NextField)
                );
            }
        }
    }

    #[test]
    fn test_plain_n_is_text_in_editor() {
        assert_eq!(
            key_to_ui_event(key(KeyCode::Char('n')), Mode::Editing, Some(Focus::Url)),
            Some(UiEvent::CharInput('n'))
        );
    }

    #[test]
    fn test_enter_depends_on_field() {
        let enter = key(KeyCode::Enter);
        assert_eq!(key_to_ui_event(enter, Mode::Editing, Some(Focus::Url)), None);
        assert_eq!(
            key_to_ui_event(enter, Mode::Editing, Some(Focus::Body)),
            Some(UiEvent::Newline)
        );
        assert_eq!(
            key_to_ui_event(enter, Mode::Editing, Some(Focus::Method)),
            Some(UiEvent::Confirm)
        );
    }

    #[test]
    fn test_editor_shortcuts() {
        let alt_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT);
        assert_eq!(key_to_ui_event(ctrl('s'), Mode::Editing, Some(Focus::Body)), Some(UiEvent::Send));
        assert_eq!(key_to_ui_event(alt_s, Mode::Editing, Some(Focus::Body)), Some(UiEvent::Save));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let modes = [
            Mode::Idle,
            Mode::Editing,
            Mode::ViewingResponse,
            Mode::Saving { resume: Focus::Url },
            Mode::Loading,
        ];
        for mode in modes {
            assert_eq!(key_to_ui_event(ctrl('c'), mode, Some(Focus::Url)), Some(UiEvent::Quit));
        }
    }

    #[test]
    fn test_release_ignored() {
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(release, Mode::Idle, None), None);
    }
}
