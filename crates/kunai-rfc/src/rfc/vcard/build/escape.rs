//! vCard text escaping.

use std::borrow::Cow;

/// Escapes a TEXT value (RFC 6350 §3.4).
///
/// Escapes backslash, newline, comma, and semicolon. CR is dropped, so a
/// CRLF pair becomes a single `\n`.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {}
            _ => result.push(c),
        }
    }

    result
}

/// Escapes one item of a comma-separated list value.
///
/// Same rules as [`escape_text`].
#[must_use]
pub fn escape_component(s: &str) -> String {
    escape_text(s)
}

/// Encodes a parameter value with RFC 6868 caret encoding.
///
/// Returns `(value, needs_quotes)`. Borrows the input when nothing changes.
#[must_use]
pub fn escape_param_value(s: &str) -> (Cow<'_, str>, bool) {
    let needs_quotes = s.contains([':', ';', ',', '"']);
    let needs_rewrite = s.chars().any(|c| c == '^' || c == '"' || c.is_control());

    if !needs_rewrite {
        return (Cow::Borrowed(s), needs_quotes);
    }

    let mut result = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => result.push_str("^'"),
            _ if c.is_control() => {}
            _ => result.push(c),
        }
    }

    (Cow::Owned(result), needs_quotes)
}
