//! Escaping of text payloads before they are placed inside SSML.

use crate::{Result, SpeechError, Value};

/// How special characters in text payloads are made safe for SSML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Replace `& < > " '` with their XML entities
    #[default]
    Entities,
    /// Legacy behavior: `&` becomes `and`, the other four characters are dropped
    Strip,
}

/// Escape a payload according to `mode`.
///
/// Strings are escaped, numbers and booleans are rendered unchanged. A
/// missing value has no textual form and is rejected with
/// [`SpeechError::InvalidType`].
pub fn escape(value: &Value<'_>, mode: EscapeMode) -> Result<String> {
    match value {
        Value::Str(s) => Ok(match mode {
            EscapeMode::Entities => escape_str(s),
            EscapeMode::Strip => strip_str(s),
        }),
        Value::Number(_) | Value::Bool(_) => Ok(value.to_string()),
        Value::Missing => Err(SpeechError::InvalidType(format!(
            "received invalid type {}",
            value.kind()
        ))),
    }
}

/// Entity-encode the five XML special characters.
///
/// Not idempotent: escaping `&amp;` again yields `&amp;amp;`.
pub fn escape_str(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }

    result
}

/// Remove the XML special characters instead of encoding them
pub fn strip_str(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("and"),
            '<' | '>' | '"' | '\'' => {}
            _ => result.push(c),
        }
    }

    result
}
