//! Best-effort timestamp lookup for prompts.
//!
//! Exports record send times as RFC 3339 strings (`"2024-01-15T10:30:00Z"`),
//! unix seconds (`1705314600`, sometimes fractional or quoted) or unix
//! milliseconds (`1705314600000`). Anything else is ignored.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::probe::probe_fields;

/// Timestamp fields in priority order.
pub const TIMESTAMP_FIELDS: &[&str] = &["timestamp", "created_at", "create_time", "createdAt"];

/// Epoch values at or above this magnitude are milliseconds.
const MILLIS_THRESHOLD: f64 = 1e11;

/// Returns the first parseable timestamp of [`TIMESTAMP_FIELDS`].
pub fn extract_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    probe_fields(value, TIMESTAMP_FIELDS, parse_timestamp)
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|| s.trim().parse::<f64>().ok().and_then(from_epoch)),
        Value::Number(n) => n.as_f64().and_then(from_epoch),
        _ => None,
    }
}

fn from_epoch(raw: f64) -> Option<DateTime<Utc>> {
    if !raw.is_finite() {
        return None;
    }
    let millis = if raw.abs() >= MILLIS_THRESHOLD {
        raw
    } else {
        raw * 1000.0
    };
    DateTime::from_timestamp_millis(millis as i64)
}
