//! Canonical JSONPath segment formatting
//!
//! Member access uses dot notation (`$.name`) unless the key contains one of
//! the characters `:`, `.`, `-` or a space, in which case bracket notation
//! (`$['na-me']`) is used. The test is purely syntactic.

use crate::discovery::config::QuoteHandling;

/// Root marker every path starts from
pub const ROOT: &str = "$";

/// Segment appended to an array location to address any of its elements
pub const ARRAY_WILDCARD: &str = "[*]";

const BRACKET_TRIGGERS: &[char] = &[':', '.', '-', ' '];

/// True when `key` cannot be written in dot notation
pub fn needs_bracket_notation(key: &str) -> bool {
    key.contains(BRACKET_TRIGGERS)
}

/// Append a member access for `key` to `path`
pub fn append_member(path: &str, key: &str, quotes: QuoteHandling) -> String {
    match quotes {
        QuoteHandling::Verbatim => {
            if needs_bracket_notation(key) {
                format!("{}['{}']", path, key)
            } else {
                format!("{}.{}", path, key)
            }
        }
        QuoteHandling::Escape => {
            if needs_bracket_notation(key) || key.contains(['\'', '\\']) {
                format!("{}['{}']", path, escape_quoted(key))
            } else {
                format!("{}.{}", path, key)
            }
        }
    }
}

/// Append the array wildcard segment to `path`
pub fn append_wildcard(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + ARRAY_WILDCARD.len());
    out.push_str(path);
    out.push_str(ARRAY_WILDCARD);
    out
}

fn escape_quoted(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for ch in key.chars() {
        match ch {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out
}
