//! Top-level shape detection.
//!
//! Turns a document into conversation candidates using a fixed list of shape
//! rules. The first matching rule wins:
//!
//! | # | Document shape | Candidates |
//! |---|----------------|------------|
//! | 1 | mapping with a `requests` sequence | each request, tagged |
//! | 2 | sequence | each element |
//! | 3 | mapping with a `conversations` sequence | each element |
//! | 4 | mapping with a `messages` sequence | the whole document |
//! | 5 | any other mapping | elements of every sequence value, key by key |
//!
//! Rule 5 walks keys in document order (see [`crate::document`]) and may pull
//! candidates from several keys. It is a best-effort sweep: candidates it
//! finds still have to pass validation.

use serde_json::Value;

/// Format marker carried by tagged candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaggedShape {
    /// One entry of a top-level `requests` list; each entry is a complete
    /// prompt with its response and no message sequence.
    RequestLog,
}

/// A value tentatively identified as one conversation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidate<'doc> {
    /// A single request of a request-log export.
    Tagged {
        /// The raw request value.
        request: &'doc Value,
        /// Which tagged export shape produced it.
        shape: TaggedShape,
    },
    /// A value expected to hold a message sequence.
    Generic(&'doc Value),
}

/// Which detection rule produced the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectedShape {
    /// Rule 1: top-level `requests` sequence.
    RequestLog,
    /// Rule 2: the document is a sequence.
    ConversationArray,
    /// Rule 3: top-level `conversations` sequence.
    ConversationList,
    /// Rule 4: top-level `messages` sequence.
    SingleConversation,
    /// Rule 5: sequences collected from every top-level key.
    KeySweep,
    /// Nothing matched.
    Unrecognized,
}

impl std::fmt::Display for DetectedShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectedShape::RequestLog => write!(f, "request log"),
            DetectedShape::ConversationArray => write!(f, "conversation array"),
            DetectedShape::ConversationList => write!(f, "conversation list"),
            DetectedShape::SingleConversation => write!(f, "single conversation"),
            DetectedShape::KeySweep => write!(f, "key sweep"),
            DetectedShape::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Detection outcome: the rule that matched and its candidates, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection<'doc> {
    pub shape: DetectedShape,
    pub candidates: Vec<Candidate<'doc>>,
}

impl<'doc> Detection<'doc> {
    fn new(shape: DetectedShape, candidates: Vec<Candidate<'doc>>) -> Self {
        Self { shape, candidates }
    }

    fn unrecognized() -> Self {
        Self::new(DetectedShape::Unrecognized, Vec::new())
    }
}

/// Applies the shape rules to `document`.
///
/// # Example
///
/// ```rust
/// use promptpack::normalize::{detect, DetectedShape};
/// use serde_json::json;
///
/// let doc = json!({"conversations": [{"messages": []}, {"turns": []}]});
/// let detection = detect(&doc);
/// assert_eq!(detection.shape, DetectedShape::ConversationList);
/// assert_eq!(detection.candidates.len(), 2);
/// ```
pub fn detect(document: &Value) -> Detection<'_> {
    let object = match document {
        Value::Array(items) => {
            return Detection::new(
                DetectedShape::ConversationArray,
                items.iter().map(Candidate::Generic).collect(),
            );
        }
        Value::Object(object) => object,
        _ => return Detection::unrecognized(),
    };

    // A sequence document has no keys, so handling rule 2 first cannot shadow rule 1.
    if let Some(requests) = object.get("requests").and_then(Value::as_array) {
        return Detection::new(
            DetectedShape::RequestLog,
            requests
                .iter()
                .map(|request| Candidate::Tagged {
                    request,
                    shape: TaggedShape::RequestLog,
                })
                .collect(),
        );
    }

    if let Some(conversations) = object.get("conversations").and_then(Value::as_array) {
        return Detection::new(
            DetectedShape::ConversationList,
            conversations.iter().map(Candidate::Generic).collect(),
        );
    }

    if object.get("messages").is_some_and(Value::is_array) {
        return Detection::new(
            DetectedShape::SingleConversation,
            vec![Candidate::Generic(document)],
        );
    }

    let candidates: Vec<Candidate<'_>> = object
        .values()
        .filter_map(Value::as_array)
        .flatten()
        .map(Candidate::Generic)
        .collect();

    if candidates.is_empty() {
        Detection::unrecognized()
    } else {
        Detection::new(DetectedShape::KeySweep, candidates)
    }
}

/// Shorthand for `detect(document).candidates`.
pub fn detect_candidates(document: &Value) -> Vec<Candidate<'_>> {
    detect(document).candidates
}
