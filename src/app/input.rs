//! Cursor-aware text buffer backing the URL, headers, body and name fields

use crate::messages::UiEvent;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Byte offset, always on a char boundary
    cursor: usize,
}

impl TextInput {
    /// Buffer holding `value` with the cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        TextInput { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        *self = TextInput::with_value(value);
    }

    pub fn reset(&mut self) {
        *self = TextInput::default();
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the char under the cursor
    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Start of the current line
    pub fn move_cursor_home(&mut self) {
        self.cursor = self.value[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// End of the current line
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.value[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.value.len());
    }

    /// Zero-based (line, column) of the cursor, columns counted in chars
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.value[..self.cursor];
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map(|s| s.chars().count())
            .unwrap_or(0);
        (line, col)
    }

    /// Apply an editing event. Returns true when the value changed.
    pub fn apply(&mut self, event: UiEvent, multiline: bool) -> bool {
        let before = self.value.len();
        match event {
            UiEvent::CharInput(c) => {
                self.insert_char(c);
                return true;
            }
            UiEvent::Newline if multiline => {
                self.insert_char('\n');
                return true;
            }
            UiEvent::Backspace => self.delete_char(),
            UiEvent::Delete => self.delete_forward(),
            UiEvent::CursorLeft => self.move_cursor_left(),
            UiEvent::CursorRight => self.move_cursor_right(),
            UiEvent::CursorHome => self.move_cursor_home(),
            UiEvent::CursorEnd => self.move_cursor_end(),
            _ => {}
        }
        self.value.len() != before
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::default();
        for c in "abc".chars() {
            input.insert_char(c);
        }
        input.delete_char();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_multibyte_cursor_moves() {
        let mut input = TextInput::with_value("héllo");
        input.move_cursor_home();
        input.move_cursor_right();
        input.move_cursor_right();
        assert_eq!(input.cursor, 3);
        input.delete_char();
        assert_eq!(input.value(), "hllo");
        input.move_cursor_left();
        input.move_cursor_left();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_value("ac");
        input.move_cursor_left();
        input.insert_char('b');
        assert_eq!(input.value(), "abc");
        input.delete_forward();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_newline_only_when_multiline() {
        let mut input = TextInput::default();
        assert!(!input.apply(UiEvent::Newline, false));
        assert!(input.apply(UiEvent::Newline, true));
        assert_eq!(input.value(), "\n");
    }

    #[test]
    fn test_line_col_and_home_end() {
        let mut input = TextInput::with_value("A: 1\nB: 22");
        assert_eq!(input.cursor_line_col(), (1, 5));
        input.move_cursor_home();
        assert_eq!(input.cursor_line_col(), (1, 0));
        input.move_cursor_left();
        assert_eq!(input.cursor_line_col(), (0, 4));
        input.move_cursor_home();
        input.move_cursor_end();
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_cursor_moves_do_not_report_change() {
        let mut input = TextInput::with_value("x");
        assert!(!input.apply(UiEvent::CursorLeft, false));
        assert!(input.apply(UiEvent::Delete, false));
        assert!(input.is_empty());
    }
}
