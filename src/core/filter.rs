//! Filter exchanges by date range, prompt text and answer state.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering exchange collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Prompts sent on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Prompts sent on or before date |
//! | Prompt | [`with_prompt_containing`](FilterConfig::with_prompt_containing) | Prompt contains text |
//! | Answered | [`with_answered_only`](FilterConfig::with_answered_only) | Exchanges with a response |
//!
//! # Examples
//!
//! ```
//! use promptpack::core::filter::{FilterConfig, apply_filters};
//! use promptpack::Exchange;
//! use serde_json::json;
//!
//! let answer = json!("Ownership is...");
//! let exchanges = vec![
//!     Exchange::new(1, "Explain ownership").with_response(&answer),
//!     Exchange::new(2, "Explain lifetimes"),
//!     Exchange::new(3, "Write a poem").with_response(&answer),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_prompt_containing("EXPLAIN")
//!     .with_answered_only();
//! let filtered = apply_filters(exchanges, &config);
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].sequence_number, 1);
//! ```
//!
//! # Behavior Notes
//!
//! - Exchanges without timestamps are **excluded** when date filters are active
//! - Prompt matching is case-insensitive
//! - Multiple filters are combined with AND logic
//! - Sequence numbers are kept, so gaps show where exchanges were dropped

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::Exchange;
use crate::error::PromptpackError;

/// Configuration for filtering exchanges.
///
/// Filters are combined with AND logic: an exchange must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only prompts sent on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only prompts sent on or before this timestamp.
    pub before: Option<DateTime<Utc>>,

    /// Include only prompts containing this text (stored lowercased).
    pub prompt_contains: Option<String>,

    /// Include only exchanges with a response.
    pub answered_only: bool,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all exchanges pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`PromptpackError::InvalidDate`] if the format is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use promptpack::core::filter::FilterConfig;
    ///
    /// # fn main() -> promptpack::Result<()> {
    /// let config = FilterConfig::new().with_date_from("2024-01-01")?;
    /// assert!(config.has_date_filter());
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, PromptpackError> {
        self.after = Some(parse_date(date_str)?.and_time(NaiveTime::MIN).and_utc());
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// The whole day is included.
    ///
    /// # Errors
    ///
    /// Returns [`PromptpackError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, PromptpackError> {
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        self.before = Some(parse_date(date_str)?.and_time(end_of_day).and_utc());
        Ok(self)
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Keeps only exchanges whose prompt contains `text`, ignoring case.
    #[must_use]
    pub fn with_prompt_containing(mut self, text: impl Into<String>) -> Self {
        self.prompt_contains = Some(text.into().to_lowercase());
        self
    }

    /// Keeps only exchanges that have a response.
    #[must_use]
    pub fn with_answered_only(mut self) -> Self {
        self.answered_only = true;
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.prompt_contains.is_some() || self.answered_only
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `exchange` passes every active filter.
    pub fn matches(&self, exchange: &Exchange<'_>) -> bool {
        if self.answered_only && !exchange.is_answered() {
            return false;
        }

        if let Some(ref needle) = self.prompt_contains {
            if !exchange.prompt().to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(ts) = exchange.timestamp else {
                return false;
            };
            if self.after.is_some_and(|after| ts < after) {
                return false;
            }
            if self.before.is_some_and(|before| ts > before) {
                return false;
            }
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, PromptpackError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| PromptpackError::invalid_date(date_str))
}

/// Filters exchanges based on the provided configuration.
///
/// Returns only exchanges that match all active filters, in their original
/// order. If no filters are active, returns the input unchanged.
pub fn apply_filters<'doc>(
    exchanges: Vec<Exchange<'doc>>,
    config: &FilterConfig,
) -> Vec<Exchange<'doc>> {
    if !config.is_active() {
        return exchanges;
    }

    exchanges
        .into_iter()
        .filter(|exchange| config.matches(exchange))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::{Value, json};

    fn make_exchange<'a>(
        seq: usize,
        prompt: &str,
        response: Option<&'a Value>,
        date: Option<&str>,
    ) -> Exchange<'a> {
        let mut ex = Exchange::new(seq, prompt);
        ex.response = response;
        if let Some(date) = date {
            let naive = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
            ex.timestamp = Some(naive.and_hms_opt(12, 0, 0).unwrap().and_utc());
        }
        ex
    }

    #[test]
    fn test_inactive_filter_passes_everything() {
        let exchanges = vec![make_exchange(1, "a", None, None), make_exchange(2, "b", None, None)];
        let config = FilterConfig::new();
        assert!(!config.is_active());
        assert_eq!(apply_filters(exchanges, &config).len(), 2);
    }

    #[test]
    fn test_filter_by_date_from() {
        let exchanges = vec![
            make_exchange(1, "Old", None, Some("2024-01-01")),
            make_exchange(2, "New", None, Some("2024-06-15")),
        ];

        let config = FilterConfig::new().with_date_from("2024-06-01").unwrap();
        let filtered = apply_filters(exchanges, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].prompt(), "New");
        assert_eq!(filtered[0].sequence_number, 2);
    }

    #[test]
    fn test_filter_by_date_to_includes_whole_day() {
        let late = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        let exchanges = vec![
            Exchange::new(1, "Same day").with_timestamp(late),
            make_exchange(2, "Later", None, Some("2024-03-02")),
        ];

        let config = FilterConfig::new().with_date_to("2024-03-01").unwrap();
        let filtered = apply_filters(exchanges, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].prompt(), "Same day");
    }

    #[test]
    fn test_no_timestamp_excluded_when_date_filter() {
        let exchanges = vec![
            make_exchange(1, "With date", None, Some("2024-06-15")),
            make_exchange(2, "No date", None, None),
        ];

        let config = FilterConfig::new().with_date_from("2024-01-01").unwrap();
        let filtered = apply_filters(exchanges, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].prompt(), "With date");
    }

    #[test]
    fn test_prompt_filter_is_case_insensitive() {
        let exchanges = vec![
            make_exchange(1, "How do I use Serde?", None, None),
            make_exchange(2, "Unrelated", None, None),
        ];

        let config = FilterConfig::new().with_prompt_containing("SERDE");
        let filtered = apply_filters(exchanges, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].sequence_number, 1);
    }

    #[test]
    fn test_answered_only() {
        let answer = json!("yes");
        let exchanges = vec![
            make_exchange(1, "Answered", Some(&answer), None),
            make_exchange(2, "Pending", None, None),
        ];

        let filtered = apply_filters(exchanges, &FilterConfig::new().with_answered_only());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].prompt(), "Answered");
    }

    #[test]
    fn test_combined_filters() {
        let answer = json!("ok");
        let exchanges = vec![
            make_exchange(1, "rust question", Some(&answer), Some("2024-06-15")),
            make_exchange(2, "rust question", None, Some("2024-06-15")),
            make_exchange(3, "rust question", Some(&answer), Some("2023-01-01")),
            make_exchange(4, "go question", Some(&answer), Some("2024-06-15")),
        ];

        let config = FilterConfig::new()
            .with_date_from("2024-01-01")
            .unwrap()
            .with_prompt_containing("rust")
            .with_answered_only();
        let filtered = apply_filters(exchanges, &config);

        let numbers: Vec<usize> = filtered.iter().map(|e| e.sequence_number).collect();
        assert_eq!(numbers, [1]);
    }

    #[test]
    fn test_invalid_date() {
        let err = FilterConfig::new().with_date_from("15/06/2024").unwrap_err();
        assert!(err.is_invalid_date());
        assert!(FilterConfig::new().with_date_to("2024-13-01").is_err());
    }

    #[test]
    fn test_direct_timestamps() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let config = FilterConfig::new().with_after(start);
        assert!(config.has_date_filter());
        assert!(config.matches(&make_exchange(1, "x", None, Some("2024-06-02"))));
        assert!(!config.matches(&make_exchange(1, "x", None, Some("2024-05-31"))));
    }
}
