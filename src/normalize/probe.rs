//! Ordered field probing.
//!
//! Export schemas disagree on field names, so most lookups try a fixed list
//! of aliases. Every such list is a `const` table, and [`probe_fields`] is the
//! one place that walks a table.

use serde_json::Value;

/// Returns the first value produced by `probe` for the listed fields.
///
/// Fields are tried in table order; a field that is missing, or whose value
/// `probe` rejects, falls through to the next one. Non-mapping values never
/// match.
pub(crate) fn probe_fields<'doc, T>(
    value: &'doc Value,
    fields: &[&str],
    probe: impl Fn(&'doc Value) -> Option<T>,
) -> Option<T> {
    let object = value.as_object()?;
    fields
        .iter()
        .filter_map(|field| object.get(*field))
        .find_map(probe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_probe_first_present_field_wins() {
        let value = json!({"b": "second", "a": "first"});
        let found = probe_fields(&value, &["a", "b"], Value::as_str);
        assert_eq!(found, Some("first"));
    }

    #[test]
    fn test_probe_rejected_field_falls_through() {
        let value = json!({"a": 42, "b": "text"});
        let found = probe_fields(&value, &["a", "b"], Value::as_str);
        assert_eq!(found, Some("text"));
    }

    #[test]
    fn test_probe_non_mapping() {
        let value = json!(["a", "b"]);
        assert!(probe_fields(&value, &["a"], Value::as_str).is_none());
    }
}
