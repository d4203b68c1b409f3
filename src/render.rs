//! Display-ready views of exchanges.
//!
//! Exchanges are rendered as a numbered list of one-line labels, each of which
//! can be expanded to the full prompt and response. This module only produces
//! the plain values; drawing them is up to the caller.
//!
//! # Example
//!
//! ```rust
//! use promptpack::render::{display_entries, summary_label};
//! use promptpack::config::RenderConfig;
//! use promptpack::{normalize, parse_document};
//!
//! assert_eq!(summary_label("Explain lifetimes", 10), "Explain...");
//!
//! let doc = parse_document(r#"{"requests":[{"message":{"text":"Q1"},"response":"A1"}]}"#)?;
//! let result = normalize(&doc)?;
//! let entries = display_entries(result.exchanges(), &RenderConfig::default());
//!
//! assert_eq!(entries[0].to_string(), "#1 Q1");
//! assert_eq!(entries[0].response.as_deref(), Some("A1"));
//! # Ok::<(), promptpack::PromptpackError>(())
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::config::RenderConfig;
use crate::exchange::{Exchange, SENTINEL_PROMPT};

const DEFAULT_ELLIPSIS: &str = "...";

/// Shortens `prompt` to a one-line label of at most `max_chars` characters.
///
/// Equivalent to [`truncate_label`] with a `"..."` suffix.
pub fn summary_label(prompt: &str, max_chars: usize) -> Cow<'_, str> {
    truncate_label(prompt, max_chars, DEFAULT_ELLIPSIS)
}

/// Flattens `text` to one line and cuts it to `max_chars` characters.
///
/// Counts characters, not bytes, so multi-byte text is never split. When the
/// text is cut and `max_chars` leaves room for it, `ellipsis` is appended and
/// counted within the limit; otherwise the text is cut bare. Text that is
/// blank once flattened is labelled with [`SENTINEL_PROMPT`].
pub fn truncate_label<'a>(text: &'a str, max_chars: usize, ellipsis: &str) -> Cow<'a, str> {
    let mut flat = flatten(text);
    if flat.trim().is_empty() {
        flat = Cow::Borrowed(SENTINEL_PROMPT);
    }
    if flat.chars().count() <= max_chars {
        return flat;
    }

    let ellipsis_len = ellipsis.chars().count();
    if max_chars <= ellipsis_len {
        return Cow::Owned(flat.chars().take(max_chars).collect());
    }

    let kept: String = flat.chars().take(max_chars - ellipsis_len).collect();
    Cow::Owned(format!("{}{ellipsis}", kept.trim_end()))
}

fn flatten(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.split(['\n', '\r'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// One row of the exchange list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    /// The exchange's sequence number.
    pub number: usize,
    /// One-line summary of the prompt.
    pub label: String,
    /// Full prompt text.
    pub prompt: String,
    /// Response text: strings as-is, structured values as pretty JSON.
    pub response: Option<String>,
}

impl fmt::Display for DisplayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.number, self.label)
    }
}

impl DisplayEntry {
    pub fn from_exchange(exchange: &Exchange<'_>, config: &RenderConfig) -> Self {
        Self {
            number: exchange.sequence_number,
            label: truncate_label(exchange.prompt(), config.label_width, &config.ellipsis)
                .into_owned(),
            prompt: exchange.prompt().to_string(),
            response: exchange.response_pretty(),
        }
    }
}

/// Builds one display entry per exchange, preserving order.
pub fn display_entries(exchanges: &[Exchange<'_>], config: &RenderConfig) -> Vec<DisplayEntry> {
    exchanges
        .iter()
        .map(|exchange| DisplayEntry::from_exchange(exchange, config))
        .collect()
}
