//! Candidate validation.
//!
//! Noisy documents produce plenty of candidates that are not conversations
//! (metadata objects, stray strings). Those are dropped here without error.

use serde_json::Value;

use super::detect::Candidate;
use super::probe::probe_fields;

/// Keys that may hold a conversation's message sequence, in priority order.
pub const MESSAGE_SEQUENCE_KEYS: &[&str] = &["messages", "turns", "exchanges"];

/// A candidate that passed validation.
///
/// Only [`validate`] constructs these, so extraction can rely on the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversation<'doc> {
    /// One request of a request-log export. `request` is never null.
    Tagged { request: &'doc Value },
    /// A message sequence (possibly empty).
    Generic { messages: &'doc [Value] },
}

/// Returns `true` if `candidate` is a well-formed conversation container.
pub fn is_valid(candidate: &Candidate<'_>) -> bool {
    validate(*candidate).is_some()
}

/// Checks a candidate and, if it is well formed, returns the conversation.
///
/// - Tagged candidates need a non-null request value.
/// - Generic candidates need a mapping whose `messages`, `turns` or
///   `exchanges` key holds a sequence; the first such key supplies the
///   messages.
///
/// # Example
///
/// ```rust
/// use promptpack::normalize::{validate, Candidate, Conversation};
/// use serde_json::json;
///
/// let value = json!({"messages": "oops", "turns": [{"role": "user"}]});
/// match validate(Candidate::Generic(&value)) {
///     Some(Conversation::Generic { messages }) => assert_eq!(messages.len(), 1),
///     other => panic!("unexpected: {other:?}"),
/// }
///
/// assert!(validate(Candidate::Generic(&json!({"title": "x"}))).is_none());
/// ```
pub fn validate(candidate: Candidate<'_>) -> Option<Conversation<'_>> {
    match candidate {
        Candidate::Tagged { request, .. } => {
            (!request.is_null()).then_some(Conversation::Tagged { request })
        }
        Candidate::Generic(value) => message_sequence(value)
            .map(|messages| Conversation::Generic { messages }),
    }
}

fn message_sequence(value: &Value) -> Option<&[Value]> {
    probe_fields(value, MESSAGE_SEQUENCE_KEYS, Value::as_array).map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::detect::TaggedShape;
    use serde_json::json;

    fn tagged(request: &Value) -> Candidate<'_> {
        Candidate::Tagged {
            request,
            shape: TaggedShape::RequestLog,
        }
    }

    #[test]
    fn test_tagged_non_null_is_valid() {
        let request = json!({"message": {"text": "hi"}});
        assert!(is_valid(&tagged(&request)));
        assert_eq!(
            validate(tagged(&request)),
            Some(Conversation::Tagged { request: &request })
        );
    }

    #[test]
    fn test_tagged_null_is_invalid() {
        assert!(!is_valid(&tagged(&Value::Null)));
    }

    #[test]
    fn test_tagged_any_non_null_value_is_valid() {
        assert!(is_valid(&tagged(&json!("a bare string"))));
    }

    #[test]
    fn test_generic_aliases() {
        for key in MESSAGE_SEQUENCE_KEYS {
            let value = json!({ *key: [{"role": "user"}] });
            assert!(is_valid(&Candidate::Generic(&value)), "key {key}");
        }
    }

    #[test]
    fn test_generic_empty_sequence_is_valid() {
        let value = json!({"messages": []});
        assert_eq!(
            validate(Candidate::Generic(&value)),
            Some(Conversation::Generic { messages: &[] })
        );
    }

    #[test]
    fn test_generic_first_sequence_alias_wins() {
        let value = json!({"exchanges": [1, 2], "messages": [1]});
        match validate(Candidate::Generic(&value)) {
            Some(Conversation::Generic { messages }) => assert_eq!(messages.len(), 1),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_generic_invalid_shapes() {
        for value in [
            json!({"messages": null}),
            json!({"messages": {"0": "a"}}),
            json!({"history": []}),
            json!([{"role": "user"}]),
            json!("messages"),
            json!(null),
        ] {
            assert!(!is_valid(&Candidate::Generic(&value)), "{value}");
        }
    }
}
