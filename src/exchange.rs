//! The normalized prompt/response unit.
//!
//! This module provides [`Exchange`], the only thing the normalizer produces.
//! Every supported export shape ends up as an ordered list of exchanges, so
//! filters, writers and renderers never need to know where the data came from.
//!
//! # Overview
//!
//! An exchange consists of:
//! - **Always present**: `prompt`, `sequence_number`, `conversation_index`,
//!   `within_conversation_index`
//! - **Optional**: `response`, `message_index`, `request_id`, `timestamp`
//!
//! The response is a borrowed reference into the parsed document. It is never
//! re-serialized or copied, so nested payloads come out exactly as they went in.
//!
//! # Examples
//!
//! ```
//! use promptpack::{Exchange, parse_document};
//!
//! let doc = parse_document(r#"{"role": "assistant", "content": "Hello!"}"#)?;
//! let exchange = Exchange::new(1, "Hi").with_response(&doc);
//!
//! assert_eq!(exchange.prompt(), "Hi");
//! assert_eq!(exchange.response_text().as_deref(), Some(r#"{"role":"assistant","content":"Hello!"}"#));
//! # Ok::<(), promptpack::PromptpackError>(())
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Fallback prompt used when no text-bearing field can be located.
pub const SENTINEL_PROMPT: &str = "No prompt text found";

/// One normalized prompt/response pair.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `prompt` | `String` | User text, or [`SENTINEL_PROMPT`]; never empty |
/// | `response` | `Option<&Value>` | Raw response value from the document |
/// | `sequence_number` | `usize` | Global 1-based position in document order |
/// | `conversation_index` | `usize` | 0-based index of the source conversation |
/// | `within_conversation_index` | `usize` | 0-based position inside that conversation |
/// | `message_index` | `Option<usize>` | Index of the user message (message-sequence exports) |
/// | `request_id` | `Option<String>` | Request identifier (request-log exports) |
/// | `timestamp` | `Option<DateTime<Utc>>` | When the prompt was sent, if recorded |
///
/// # Serialization
///
/// Serializes with camelCase keys; optional metadata is omitted when `None`.
/// `response` is written as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange<'doc> {
    /// Prompt text. Falls back to [`SENTINEL_PROMPT`].
    pub prompt: String,

    /// The answering value exactly as it appears in the document.
    pub response: Option<&'doc Value>,

    /// 1-based, strictly increasing, assigned in document order.
    pub sequence_number: usize,

    /// Position of the source conversation among validated conversations.
    pub conversation_index: usize,

    /// Position of this exchange within its conversation.
    pub within_conversation_index: usize,

    /// Index of the user message inside the conversation's message sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_index: Option<usize>,

    /// `requestId` of the originating request, for request-log exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// When the prompt was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl<'doc> Exchange<'doc> {
    /// Creates an unanswered exchange in conversation 0.
    ///
    /// An empty prompt is replaced with [`SENTINEL_PROMPT`] so the non-empty
    /// invariant holds for hand-built exchanges too.
    pub fn new(sequence_number: usize, prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        Self {
            prompt: if prompt.is_empty() {
                SENTINEL_PROMPT.to_string()
            } else {
                prompt
            },
            response: None,
            sequence_number,
            conversation_index: 0,
            within_conversation_index: 0,
            message_index: None,
            request_id: None,
            timestamp: None,
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Attaches the raw response value.
    #[must_use]
    pub fn with_response(mut self, response: &'doc Value) -> Self {
        self.response = Some(response);
        self
    }

    /// Sets the conversation and within-conversation positions.
    #[must_use]
    pub fn with_position(mut self, conversation_index: usize, within: usize) -> Self {
        self.conversation_index = conversation_index;
        self.within_conversation_index = within;
        self
    }

    /// Sets the message index.
    #[must_use]
    pub fn with_message_index(mut self, index: usize) -> Self {
        self.message_index = Some(index);
        self
    }

    /// Sets the request identifier.
    #[must_use]
    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Sets the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the raw response, if any.
    pub fn response(&self) -> Option<&'doc Value> {
        self.response
    }

    /// Returns `true` if a response is attached.
    pub fn is_answered(&self) -> bool {
        self.response.is_some()
    }

    /// Returns `true` if no prompt text was found in the source.
    pub fn has_sentinel_prompt(&self) -> bool {
        self.prompt == SENTINEL_PROMPT
    }

    /// Returns the response as flat text.
    ///
    /// Strings are returned as-is; any other value is rendered as compact JSON.
    pub fn response_text(&self) -> Option<String> {
        self.response.map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Like [`response_text`](Self::response_text), but structured values are
    /// pretty-printed.
    pub fn response_pretty(&self) -> Option<String> {
        self.response.map(|value| match value {
            Value::String(s) => s.clone(),
            other => format!("{other:#}"),
        })
    }
}
