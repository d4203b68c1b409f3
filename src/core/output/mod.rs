//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of exchanges - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one exchange per line) - requires `json-output` feature
//! - [`write_text`] / [`to_text`] - numbered plain-text listing
//!
//! # Choosing a Format
//!
//! | Format | Use Case | Response fidelity |
//! |--------|----------|-------------------|
//! | CSV | Spreadsheets, LLM context | Compact JSON in one cell |
//! | JSON | Structured data, APIs | Exact |
//! | JSONL | Datasets, streaming consumers | Exact |
//! | Text | Reading | Pretty-printed |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> promptpack::Result<()> {
//! use promptpack::core::output::{to_csv, write_csv, write_json, write_jsonl};
//! use promptpack::core::models::OutputConfig;
//! use promptpack::{normalize, parse_document};
//!
//! let doc = parse_document(r#"{"requests":[{"message":{"text":"Q1"},"response":"A1"}]}"#)?;
//! let result = normalize(&doc)?;
//! let config = OutputConfig::new().with_timestamps();
//!
//! // Write to files
//! write_csv(result.exchanges(), "output.csv", &config)?;
//! write_json(result.exchanges(), "output.json", &config)?;
//! write_jsonl(result.exchanges(), "output.jsonl", &config)?;
//!
//! // Or get as strings
//! let csv_string = to_csv(result.exchanges(), &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{to_text, write_text};

#[cfg(feature = "json-output")]
use serde::Serialize;
#[cfg(feature = "json-output")]
use serde_json::Value;

use crate::core::models::OutputConfig;
use crate::exchange::Exchange;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

fn format_timestamp(exchange: &Exchange<'_>, config: &OutputConfig) -> Option<String> {
    if !config.include_timestamps {
        return None;
    }
    exchange
        .timestamp
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
}

/// Exchange structure shared by the JSON and JSONL writers.
/// Only includes optional fields enabled in `OutputConfig`.
#[cfg(feature = "json-output")]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputRecord<'a> {
    sequence_number: usize,
    prompt: &'a str,
    response: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    within_conversation_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<&'a str>,
}

#[cfg(feature = "json-output")]
impl<'a> OutputRecord<'a> {
    fn from_exchange(exchange: &'a Exchange<'_>, config: &OutputConfig) -> Self {
        let positions = config.include_positions;
        Self {
            sequence_number: exchange.sequence_number,
            prompt: exchange.prompt(),
            response: exchange.response(),
            timestamp: format_timestamp(exchange, config),
            conversation_index: positions.then_some(exchange.conversation_index),
            within_conversation_index: positions.then_some(exchange.within_conversation_index),
            message_index: if positions { exchange.message_index } else { None },
            request_id: if config.include_ids {
                exchange.request_id.as_deref()
            } else {
                None
            },
        }
    }
}
