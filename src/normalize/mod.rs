//! Schema detection and normalization.
//!
//! [`normalize`] turns a parsed chat export into an ordered list of
//! [`Exchange`]s. It runs in a single pass:
//!
//! 1. [`detect`] picks a shape rule and yields conversation candidates
//! 2. [`validate`] drops candidates that are not conversation containers
//! 3. each [`Conversation`] is extracted, via [`adapt_request`] for
//!    request-log entries and [`extract_exchanges`] for message sequences
//! 4. exchanges are numbered `1..=n` in conversation order
//!
//! Individual messages never fail. Missing text falls back to
//! [`SENTINEL_PROMPT`](crate::SENTINEL_PROMPT), a missing reply leaves the
//! response empty. The only failure is a document with no valid conversation
//! at all.
//!
//! # Example
//!
//! ```rust
//! use promptpack::{normalize, parse_document};
//!
//! let doc = parse_document(r#"{"messages":[
//!     {"role":"user","content":"Hi"},
//!     {"role":"assistant","content":"Hello!"}
//! ]}"#)?;
//! let result = normalize(&doc)?;
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result.exchanges()[0].prompt(), "Hi");
//! assert_eq!(result.exchanges()[0].sequence_number, 1);
//! # Ok::<(), promptpack::PromptpackError>(())
//! ```

mod detect;
mod extract;
mod probe;
mod prompt;
mod role;
mod tagged;
mod timestamp;
mod validate;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::error::{PromptpackError, Result};
use crate::exchange::Exchange;

pub use detect::{Candidate, DetectedShape, Detection, TaggedShape, detect, detect_candidates};
pub use extract::extract_exchanges;
pub use prompt::{PROMPT_FIELDS, extract_prompt_text};
pub use role::is_user_message;
pub use tagged::adapt_request;
pub use timestamp::{TIMESTAMP_FIELDS, extract_timestamp};
pub use validate::{Conversation, MESSAGE_SEQUENCE_KEYS, is_valid, validate};

/// An exchange before global numbering.
#[derive(Debug, Clone, PartialEq)]
pub struct RawExchange<'doc> {
    /// Prompt text, never empty.
    pub prompt: String,
    /// Borrowed response value.
    pub response: Option<&'doc Value>,
    /// Index of the user message in its sequence (message-sequence exports).
    pub message_index: Option<usize>,
    /// `requestId` of the request (request-log exports).
    pub request_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl<'doc> RawExchange<'doc> {
    /// Assigns the final position and converts into an [`Exchange`].
    pub fn into_exchange(
        self,
        sequence_number: usize,
        conversation_index: usize,
        within_conversation_index: usize,
    ) -> Exchange<'doc> {
        let mut exchange = Exchange::new(sequence_number, self.prompt)
            .with_position(conversation_index, within_conversation_index);
        exchange.response = self.response;
        exchange.message_index = self.message_index;
        exchange.request_id = self.request_id;
        exchange.timestamp = self.timestamp;
        exchange
    }
}

impl<'doc> Conversation<'doc> {
    /// Extracts this conversation's exchanges, in order.
    pub fn extract(&self) -> Vec<RawExchange<'doc>> {
        match *self {
            Conversation::Tagged { request } => vec![adapt_request(request)],
            Conversation::Generic { messages } => extract_exchanges(messages),
        }
    }
}

/// Result of a successful [`normalize`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization<'doc> {
    exchanges: Vec<Exchange<'doc>>,
    conversation_count: usize,
    shape: DetectedShape,
}

impl<'doc> Normalization<'doc> {
    /// Exchanges in document order, numbered from 1.
    pub fn exchanges(&self) -> &[Exchange<'doc>] {
        &self.exchanges
    }

    /// Consumes the result, returning the exchanges.
    pub fn into_exchanges(self) -> Vec<Exchange<'doc>> {
        self.exchanges
    }

    /// Number of conversations that passed validation.
    pub fn conversation_count(&self) -> usize {
        self.conversation_count
    }

    /// The shape rule that matched the document.
    pub fn shape(&self) -> DetectedShape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

/// Normalizes a parsed export document into numbered exchanges.
///
/// The returned exchanges borrow their responses from `document`.
///
/// # Errors
///
/// Returns [`PromptpackError::NoConversationsFound`] if detection yields no
/// candidates, or if none of them validate. A document whose conversations
/// are valid but contain no user turns succeeds with zero exchanges.
pub fn normalize(document: &Value) -> Result<Normalization<'_>> {
    let Detection { shape, candidates } = detect(document);
    debug!(%shape, candidates = candidates.len(), "detected document shape");

    if candidates.is_empty() {
        return Err(PromptpackError::NoConversationsFound);
    }

    let total = candidates.len();
    let conversations: Vec<Conversation<'_>> =
        candidates.into_iter().filter_map(validate).collect();

    if conversations.len() < total {
        debug!(
            dropped = total - conversations.len(),
            "dropped candidates that are not conversations"
        );
    }
    if conversations.is_empty() {
        return Err(PromptpackError::NoConversationsFound);
    }

    let exchanges: Vec<Exchange<'_>> = conversations
        .iter()
        .enumerate()
        .flat_map(|(conversation_index, conversation)| {
            conversation
                .extract()
                .into_iter()
                .enumerate()
                .map(move |(within, raw)| (conversation_index, within, raw))
        })
        .enumerate()
        .map(|(position, (conversation_index, within, raw))| {
            raw.into_exchange(position + 1, conversation_index, within)
        })
        .collect();

    debug!(
        conversations = conversations.len(),
        exchanges = exchanges.len(),
        "normalized document"
    );

    Ok(Normalization {
        exchanges,
        conversation_count: conversations.len(),
        shape,
    })
}
