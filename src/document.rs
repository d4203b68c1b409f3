//! Acquiring the raw document.
//!
//! The normalizer works on an already-decoded [`serde_json::Value`]. This
//! module turns text or a file into that value and is the only place that
//! raises [`PromptpackError::MalformedInput`].
//!
//! # Key order contract
//!
//! Documents are decoded with `serde_json`'s `preserve_order` feature, so the
//! keys of every mapping enumerate in the order they appear in the source
//! text. The last-resort detection rule (every top-level sequence, key by key)
//! depends on that order. Callers that build a `Value` some other way get
//! whatever order their map provides; detection through that rule is
//! best-effort in any case.
//!
//! # Example
//!
//! ```rust
//! use promptpack::document::parse_document;
//!
//! let doc = parse_document(r#"{"b": [], "a": []}"#)?;
//! let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
//! assert_eq!(keys, ["b", "a"]);
//! # Ok::<(), promptpack::PromptpackError>(())
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::config::LoadConfig;
use crate::error::{PromptpackError, Result};

/// Decodes raw export text into a document.
///
/// # Errors
///
/// Returns [`PromptpackError::MalformedInput`] if the text is not valid JSON.
pub fn parse_document(content: &str) -> Result<Value> {
    // Exports saved by some editors carry a byte order mark.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    serde_json::from_str(content).map_err(|e| PromptpackError::malformed(e, None))
}

/// Reads and decodes an export file.
///
/// # Errors
///
/// - [`PromptpackError::DocumentTooLarge`] if the file exceeds
///   [`LoadConfig::max_document_size`]
/// - [`PromptpackError::Io`] if the file cannot be read
/// - [`PromptpackError::MalformedInput`] (with the path attached) if the
///   content is not valid JSON
pub fn load_document(path: &Path, config: &LoadConfig) -> Result<Value> {
    let size = fs::metadata(path)?.len();
    if size > config.max_document_size {
        return Err(PromptpackError::document_too_large(
            config.max_document_size,
            size,
        ));
    }

    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = size, "read export document");

    parse_document(&content).map_err(|err| match err {
        PromptpackError::MalformedInput { source, .. } => {
            PromptpackError::malformed(source, Some(path.to_path_buf()))
        }
        other => other,
    })
}
