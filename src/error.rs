//! Unified error types for promptpack.
//!
//! This module provides a single [`PromptpackError`] enum that covers all error
//! cases in the library, from reading the export file to writing output.
//!
//! # Failure kinds
//!
//! Only two kinds describe the document itself:
//!
//! - [`PromptpackError::MalformedInput`] - the raw text is not a JSON document
//!   (raised by [`crate::document`], never by the normalizer)
//! - [`PromptpackError::NoConversationsFound`] - the document parsed, but no
//!   part of it looks like a conversation (raised by [`crate::normalize()`])
//!
//! Everything else is plumbing: I/O, output encoding, filter arguments.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for promptpack operations.
///
/// # Example
///
/// ```rust
/// use promptpack::error::Result;
/// use promptpack::Exchange;
///
/// fn my_function() -> Result<Vec<Exchange<'static>>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, PromptpackError>;

/// The error type for all promptpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PromptpackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The raw text could not be decoded as a JSON document.
    #[error("Malformed input{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    MalformedInput {
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The document contains nothing that validates as a conversation.
    ///
    /// This is a recoverable condition: the file was readable JSON, it just
    /// isn't a chat export any known shape rule understands.
    #[error("No conversations found in the document")]
    NoConversationsFound,

    /// The input file exceeds the configured size limit.
    #[error("Document too large: {actual_size} bytes (maximum: {max_size} bytes)")]
    DocumentTooLarge {
        /// Maximum allowed size in bytes
        max_size: u64,
        /// Actual size of the file
        actual_size: u64,
    },

    /// An output format could not be selected or is not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was being selected (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error while writing output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for PromptpackError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        PromptpackError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl PromptpackError {
    /// Creates a malformed input error, optionally tagged with the file path.
    pub fn malformed(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        PromptpackError::MalformedInput { source, path }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        PromptpackError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        PromptpackError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a document size error.
    pub fn document_too_large(max_size: u64, actual_size: u64) -> Self {
        PromptpackError::DocumentTooLarge {
            max_size,
            actual_size,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, PromptpackError::Io(_))
    }

    /// Returns `true` if the raw text could not be decoded.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, PromptpackError::MalformedInput { .. })
    }

    /// Returns `true` if the document had no valid conversations.
    pub fn is_no_conversations(&self) -> bool {
        matches!(self, PromptpackError::NoConversationsFound)
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, PromptpackError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, PromptpackError::InvalidDate { .. })
    }
}
