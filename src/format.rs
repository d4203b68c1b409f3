//! Output format types for the promptpack library.
//!
//! This module provides library-first format types. With the `cli` feature
//! enabled, [`OutputFormat`] also works directly as a clap value enum.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> promptpack::Result<()> {
//! use promptpack::format::{OutputFormat, write_to_format};
//! use promptpack::core::models::OutputConfig;
//! use promptpack::Exchange;
//!
//! let exchanges = vec![Exchange::new(1, "Hello!")];
//!
//! // Write using format enum
//! write_to_format(&exchanges, "output.csv", OutputFormat::Csv, &OutputConfig::new())?;
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("output.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::Exchange;
use crate::core::models::OutputConfig;
use crate::error::PromptpackError;

/// Output format for normalized exchanges.
///
/// - [`Csv`](OutputFormat::Csv) - One row per exchange, good for spreadsheets and LLM context
/// - [`Json`](OutputFormat::Json) - Structured array with raw responses
/// - [`Jsonl`](OutputFormat::Jsonl) - One JSON per line, ideal for datasets
/// - [`Text`](OutputFormat::Text) - Human-readable listing
///
/// # Example
///
/// ```rust
/// use promptpack::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of exchanges
    Json,

    /// JSON Lines - one JSON object per line
    ///
    /// Also known as NDJSON.
    #[cfg_attr(feature = "cli", value(alias = "ndjson"))]
    #[serde(alias = "ndjson")]
    Jsonl,

    /// Plain-text listing
    #[cfg_attr(feature = "cli", value(name = "txt", alias = "text"))]
    #[serde(rename = "txt", alias = "text")]
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use promptpack::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Text => "txt",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson", "txt", "text"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Jsonl,
            OutputFormat::Text,
        ]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
            OutputFormat::Text => "text/plain",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use promptpack::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("output.jsonl").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, PromptpackError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "txt" => Ok(OutputFormat::Text),
            _ => Err(PromptpackError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl, txt"),
            )),
        }
    }

    #[allow(dead_code)]
    fn missing_feature(self) -> PromptpackError {
        let feature = match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
            OutputFormat::Text => "default",
        };
        PromptpackError::invalid_format(
            "output",
            format!("Output format {self} requires the '{feature}' feature to be enabled"),
        )
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "txt" | "text" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes exchanges to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    exchanges: &[Exchange<'_>],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), PromptpackError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(exchanges, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(exchanges, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(exchanges, path, config),
        OutputFormat::Text => crate::core::output::write_text(exchanges, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.missing_feature()),
    }
}

/// Converts exchanges to a string in the specified format.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "csv-output")]
/// # fn example() -> promptpack::Result<()> {
/// use promptpack::format::{OutputFormat, to_format_string};
/// use promptpack::core::models::OutputConfig;
/// use promptpack::Exchange;
///
/// let exchanges = vec![Exchange::new(1, "Hello!")];
/// let csv = to_format_string(&exchanges, OutputFormat::Csv, &OutputConfig::new())?;
/// assert!(csv.starts_with("#;Prompt;Response"));
/// # Ok(())
/// # }
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    exchanges: &[Exchange<'_>],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, PromptpackError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(exchanges, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(exchanges, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(exchanges, config),
        OutputFormat::Text => Ok(crate::core::output::to_text(exchanges, config)),
        #[allow(unreachable_patterns)]
        _ => Err(format.missing_feature()),
    }
}
