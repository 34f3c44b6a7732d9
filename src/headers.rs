//! Header text parsing
//!
//! Headers are edited as free text, one `Key: Value` per line.

use crate::models::HeaderMap;

/// Parse multi-line header text into a mapping.
///
/// Blank lines and lines without a colon are dropped. Only the first colon
/// splits, so values may contain colons. Later duplicates overwrite earlier ones.
pub fn parse_headers(input: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    headers
}

/// Render a mapping back into editor text, one `Key: Value` line per entry
pub fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}
