//! Prompt text extraction.
//!
//! A message's text can live under several names and in two shapes: a plain
//! string, or a list of content parts (`["a", {"type": "text", "text": "b"}]`).

use serde_json::Value;

use super::probe::probe_fields;
use crate::exchange::SENTINEL_PROMPT;

/// Text-bearing fields in priority order.
pub const PROMPT_FIELDS: &[&str] = &["content", "text", "message", "prompt"];

/// Extracts the prompt text of a message. Never returns an empty string.
///
/// The first field of [`PROMPT_FIELDS`] that yields non-empty text wins. A
/// message that is itself a non-empty string is used as-is. Anything else
/// produces [`SENTINEL_PROMPT`].
///
/// # Example
///
/// ```rust
/// use promptpack::normalize::extract_prompt_text;
/// use serde_json::json;
///
/// assert_eq!(extract_prompt_text(&json!({"content": "", "text": "Hi"})), "Hi");
/// assert_eq!(extract_prompt_text(&json!("plain")), "plain");
/// assert_eq!(extract_prompt_text(&json!({"role": "user"})), "No prompt text found");
/// ```
pub fn extract_prompt_text(message: &Value) -> String {
    probe_fields(message, PROMPT_FIELDS, field_text)
        .or_else(|| {
            message
                .as_str()
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| SENTINEL_PROMPT.to_string())
}

/// Text carried by one field value, if any.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(parts) => {
            let joined = parts
                .iter()
                .filter_map(part_text)
                .collect::<Vec<_>>()
                .join("\n");
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    }
}

/// Text of a single content part: a string, or a mapping with a string `text`.
fn part_text(part: &Value) -> Option<&str> {
    let text = match part {
        Value::String(s) => Some(s.as_str()),
        Value::Object(obj) => obj.get("text").and_then(Value::as_str),
        _ => None,
    };
    text.filter(|s| !s.is_empty())
}
