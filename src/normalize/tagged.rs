//! Request-log exports.
//!
//! Some chat tools export a session as a flat `requests` list where every
//! entry carries the user message and the model response together:
//!
//! ```json
//! {
//!   "requests": [
//!     {
//!       "requestId": "request_1",
//!       "message": {"text": "Explain this", "parts": [{"kind": "text", "text": "Explain this"}]},
//!       "response": [{"value": "Sure..."}],
//!       "timestamp": 1705314600000
//!     }
//!   ]
//! }
//! ```
//!
//! One request is one exchange; there is no message sequence to pair up.

use serde_json::Value;

use super::RawExchange;
use super::timestamp::extract_timestamp;
use crate::exchange::SENTINEL_PROMPT;

/// Converts one request into exactly one exchange.
///
/// Prompt: `message.text` if non-empty; otherwise the `text` of every
/// `message.parts` entry whose `kind` is `"text"`, joined with newlines;
/// otherwise the sentinel. Response: the `response` field when present and
/// non-null, else the whole request, so tagged exchanges are always answered.
///
/// # Example
///
/// ```rust
/// use promptpack::normalize::adapt_request;
/// use serde_json::json;
///
/// let request = json!({"message": {"text": "Q1"}, "response": "A1"});
/// let exchange = adapt_request(&request);
/// assert_eq!(exchange.prompt, "Q1");
/// assert_eq!(exchange.response, Some(&request["response"]));
/// ```
pub fn adapt_request(request: &Value) -> RawExchange<'_> {
    let response = request
        .get("response")
        .filter(|response| !response.is_null())
        .unwrap_or(request);

    RawExchange {
        prompt: request_prompt(request),
        response: Some(response),
        message_index: None,
        request_id: request
            .get("requestId")
            .and_then(Value::as_str)
            .map(ToString::to_string),
        timestamp: extract_timestamp(request),
    }
}

fn request_prompt(request: &Value) -> String {
    let Some(message) = request.get("message").filter(|m| m.is_object()) else {
        return SENTINEL_PROMPT.to_string();
    };

    if let Some(text) = message.get("text").and_then(Value::as_str) {
        if !text.is_empty() {
            return text.to_string();
        }
    }

    let Some(parts) = message.get("parts").and_then(Value::as_array) else {
        return SENTINEL_PROMPT.to_string();
    };

    let joined = parts
        .iter()
        .filter(|part| part.get("kind").and_then(Value::as_str) == Some("text"))
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join("\n");

    if joined.is_empty() {
        SENTINEL_PROMPT.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_text() {
        let request = json!({"message": {"text": "Q1"}, "response": "A1"});
        let ex = adapt_request(&request);
        assert_eq!(ex.prompt, "Q1");
        assert_eq!(ex.response, Some(&json!("A1")));
    }

    #[test]
    fn test_text_beats_parts() {
        let request = json!({"message": {
            "text": "whole",
            "parts": [{"kind": "text", "text": "part"}]
        }});
        assert_eq!(adapt_request(&request).prompt, "whole");
    }

    #[test]
    fn test_parts_joining() {
        let request = json!({"message": {"parts": [
            {"kind": "text", "text": "Part1"},
            {"kind": "image"},
            {"kind": "text", "text": "Part2"}
        ]}});
        assert_eq!(adapt_request(&request).prompt, "Part1\nPart2");
    }

    #[test]
    fn test_parts_ignore_other_kinds_with_text() {
        let request = json!({"message": {"parts": [
            {"kind": "variable", "text": "#file:main.rs"},
            {"kind": "text", "text": "explain"}
        ]}});
        assert_eq!(adapt_request(&request).prompt, "explain");
    }

    #[test]
    fn test_empty_parts_fall_back_to_sentinel() {
        let request = json!({"message": {"parts": [{"kind": "image"}]}});
        assert_eq!(adapt_request(&request).prompt, SENTINEL_PROMPT);

        let request = json!({"message": {"text": "", "parts": []}});
        assert_eq!(adapt_request(&request).prompt, SENTINEL_PROMPT);
    }

    #[test]
    fn test_missing_message_uses_sentinel() {
        assert_eq!(adapt_request(&json!({"response": "A"})).prompt, SENTINEL_PROMPT);
        assert_eq!(
            adapt_request(&json!({"message": "not an object"})).prompt,
            SENTINEL_PROMPT
        );
    }

    #[test]
    fn test_missing_response_uses_whole_request() {
        let request = json!({"message": {"text": "Q"}});
        assert_eq!(adapt_request(&request).response, Some(&request));

        let request = json!({"message": {"text": "Q"}, "response": null});
        assert_eq!(adapt_request(&request).response, Some(&request));
    }

    #[test]
    fn test_structured_response_is_borrowed_untouched() {
        let request = json!({"message": {"text": "Q"}, "response": [{"value": "A"}, {"kind": "x"}]});
        let ex = adapt_request(&request);
        assert!(std::ptr::eq(ex.response.unwrap(), &request["response"]));
    }

    #[test]
    fn test_request_metadata() {
        let request = json!({
            "requestId": "request_42",
            "timestamp": 1705314600000_i64,
            "message": {"text": "Q"}
        });
        let ex = adapt_request(&request);
        assert_eq!(ex.request_id.as_deref(), Some("request_42"));
        assert_eq!(ex.timestamp.map(|t| t.timestamp()), Some(1705314600));
        assert!(ex.message_index.is_none());
    }
}
