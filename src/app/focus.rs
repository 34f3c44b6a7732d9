//! Field focus for the request editor
//!
//! Exactly one of the four fields holds focus while editing; the navigation
//! key walks them in a fixed cycle.

/// Editor field currently receiving input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Url,
    /// No text cursor; driven by the method index instead
    Method,
    Headers,
    Body,
}

impl Focus {
    /// Navigation order
    pub const ALL: [Focus; 4] = [Focus::Url, Focus::Method, Focus::Headers, Focus::Body];

    pub fn next(&self) -> Focus {
        match self {
            Focus::Url => Focus::Method,
            Focus::Method => Focus::Headers,
            Focus::Headers => Focus::Body,
            Focus::Body => Focus::Url,
        }
    }

    /// Headers and body accept newlines
    pub fn is_multiline(&self) -> bool {
        matches!(self, Focus::Headers | Focus::Body)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Focus::Url => "URL",
            Focus::Method => "Method",
            Focus::Headers => "Headers",
            Focus::Body => "Body",
        }
    }
}

/// Next field in the cycle `URL → Method → Headers → Body → URL`
pub fn advance(current: Focus) -> Focus {
    current.next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(advance(Focus::Url), Focus::Method);
        assert_eq!(advance(Focus::Method), Focus::Headers);
        assert_eq!(advance(Focus::Headers), Focus::Body);
        assert_eq!(advance(Focus::Body), Focus::Url);
    }

    #[test]
    fn test_four_steps_return_to_start() {
        for start in Focus::ALL {
            let mut focus = start;
            let mut seen = Vec::new();
            for _ in 0..4 {
                focus = advance(focus);
                seen.push(focus);
            }
            assert_eq!(focus, start);
            for field in Focus::ALL {
                assert_eq!(seen.iter().filter(|f| **f == field).count(), 1);
            }
        }
    }

    #[test]
    fn test_multiline_fields() {
        assert!(!Focus::Method.is_multiline());
        assert!(!Focus::Url.is_multiline());
        assert!(Focus::Headers.is_multiline());
        assert!(Focus::Body.is_multiline());
    }
}
