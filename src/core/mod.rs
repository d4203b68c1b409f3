//! Post-normalization processing for promptpack.
//!
//! This module contains:
//! - [`models`] - Output configuration
//! - [`filter`] - Exchange filtering by date, prompt text and answer state
//! - [`processor`] - Exchange statistics
//! - [`output`] - Format writers (CSV, JSON, JSONL, text)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use promptpack::core::{
//!     OutputConfig, FilterConfig, ExchangeStats,
//!     apply_filters, write_csv, write_json, write_jsonl, write_text,
//! };
//! # }
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use models::OutputConfig;
pub use processor::ExchangeStats;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
pub use output::{to_text, write_text};
