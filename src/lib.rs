//! # Promptpack
//!
//! A Rust library for turning AI chat exports of unknown shape into a flat,
//! numbered list of prompt/response exchanges.
//!
//! ## Overview
//!
//! Chat tools export conversations in unrelated schemas. Promptpack inspects
//! the document, decides which parts are conversations and pairs every user
//! turn with its reply. Supported shapes:
//! - **Request logs** - `{"requests": [{"message": {...}, "response": ...}]}`
//! - **Conversation arrays** - `[{"messages": [...]}, ...]`
//! - **Conversation lists** - `{"conversations": [{"turns": [...]}, ...]}`
//! - **Single conversations** - `{"messages": [...]}`
//! - **Anything else** with sequences of conversations under top-level keys
//!
//! Message fields are probed by name (`role`/`sender`/`type`/`from`/`author`,
//! `content`/`text`/`message`/`prompt`), so renamed or missing fields degrade
//! gracefully instead of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use promptpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let doc = parse_document(r#"{"messages": [
//!         {"role": "user", "content": "Hi"},
//!         {"role": "assistant", "content": "Hello!"}
//!     ]}"#)?;
//!
//!     let result = normalize(&doc)?;
//!     for exchange in result.exchanges() {
//!         println!("#{} {}", exchange.sequence_number, exchange.prompt());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`normalize`](mod@normalize) - Shape detection, validation and exchange extraction
//! - [`exchange`] - [`Exchange`], the output unit
//! - [`document`] - Reading and parsing export files
//! - [`config`] - [`LoadConfig`](config::LoadConfig), [`RenderConfig`](config::RenderConfig)
//! - [`render`] - One-line labels and display entries
//! - [`core`] - Filtering, statistics and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`error`] - Unified error types ([`PromptpackError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod exchange;
pub mod format;
pub mod normalize;
pub mod render;

// Re-export the main types at the crate root for convenience
pub use document::{load_document, parse_document};
pub use error::{PromptpackError, Result};
pub use exchange::{Exchange, SENTINEL_PROMPT};
pub use normalize::{Normalization, normalize};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use promptpack::prelude::*;
/// ```
pub mod prelude {
    // Pipeline
    pub use crate::document::{load_document, parse_document};
    pub use crate::exchange::{Exchange, SENTINEL_PROMPT};
    pub use crate::normalize::{DetectedShape, Normalization, normalize};

    // Error types
    pub use crate::error::{PromptpackError, Result};

    // Configuration
    pub use crate::config::{LoadConfig, RenderConfig};
    pub use crate::core::models::OutputConfig;

    // Filtering and statistics
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::processor::ExchangeStats;

    // Rendering
    pub use crate::render::{DisplayEntry, display_entries, summary_label};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::core::output::{to_text, write_text};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
