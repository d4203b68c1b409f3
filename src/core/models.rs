//! Output configuration.

use serde::{Deserialize, Serialize};

/// Configuration for output format.
/// Controls which metadata fields are written next to prompt and response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include prompt timestamps in output
    pub include_timestamps: bool,
    /// Include conversation and message positions in output
    pub include_positions: bool,
    /// Include request IDs in output
    pub include_ids: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables every optional field.
    pub fn all() -> Self {
        Self {
            include_timestamps: true,
            include_positions: true,
            include_ids: true,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_positions(mut self) -> Self {
        self.include_positions = true;
        self
    }

    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.include_ids = true;
        self
    }

    /// Returns `true` if any optional field is enabled.
    pub fn has_any(&self) -> bool {
        self.include_timestamps || self.include_positions || self.include_ids
    }
}
