//! Configuration types for loading and rendering.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. The normalizer itself takes no
//! configuration; its heuristics are fixed.
//!
//! - [`LoadConfig`] - limits applied when reading an export file
//! - [`RenderConfig`] - how display entries are labelled
//!
//! # Example
//!
//! ```rust
//! use promptpack::config::{LoadConfig, RenderConfig};
//!
//! let load = LoadConfig::new().with_max_document_size(32 * 1024 * 1024);
//! let render = RenderConfig::new().with_label_width(60);
//! assert_eq!(render.label_width, 60);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for reading export files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Maximum accepted file size in bytes (default: 256MB)
    pub max_document_size: u64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_document_size: 256 * 1024 * 1024,
        }
    }
}

impl LoadConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum accepted file size.
    #[must_use]
    pub fn with_max_document_size(mut self, size: u64) -> Self {
        self.max_document_size = size;
        self
    }
}

/// Configuration for display entries.
///
/// Labels are the prompt flattened to a single line and cut to
/// `label_width` characters, ending in `ellipsis` when cut.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Maximum label length in characters, ellipsis included (default: 80)
    pub label_width: usize,

    /// Suffix appended to truncated labels (default: "...")
    pub ellipsis: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            label_width: 80,
            ellipsis: "...".to_string(),
        }
    }
}

impl RenderConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum label width.
    #[must_use]
    pub fn with_label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    /// Sets the truncation suffix.
    #[must_use]
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let config = LoadConfig::default();
        assert_eq!(config.max_document_size, 256 * 1024 * 1024);
    }

    #[test]
    fn test_load_config_builder() {
        let config = LoadConfig::new().with_max_document_size(1024);
        assert_eq!(config.max_document_size, 1024);
    }

    #[test]
    fn test_render_config_default() {
        let config = RenderConfig::default();
        assert_eq!(config.label_width, 80);
        assert_eq!(config.ellipsis, "...");
    }

    #[test]
    fn test_render_config_builder() {
        let config = RenderConfig::new().with_label_width(20).with_ellipsis("…");
        assert_eq!(config.label_width, 20);
        assert_eq!(config.ellipsis, "…");
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = RenderConfig::new().with_label_width(42);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.label_width, 42);
    }
}
