//! Integration tests for normalization with real export files

use promptpack::prelude::*;
use serde_json::{Value, json};
use std::path::Path;

fn fixture(name: &str) -> Value {
    let path = Path::new("tests/fixtures").join(name);
    load_document(&path, &LoadConfig::default()).unwrap()
}

fn prompts<'a>(exchanges: &'a [Exchange<'_>]) -> Vec<&'a str> {
    exchanges.iter().map(Exchange::prompt).collect()
}

// =========================================================================
// Request logs
// =========================================================================

#[test]
fn test_request_log() {
    let doc = fixture("request_log.json");
    let result = normalize(&doc).unwrap();

    assert_eq!(result.shape(), DetectedShape::RequestLog);
    assert_eq!(result.conversation_count(), 3);
    assert_eq!(
        prompts(result.exchanges()),
        [
            "Explain borrowing in Rust",
            "Refactor this function\nto use iterators",
            SENTINEL_PROMPT
        ]
    );
}

#[test]
fn test_request_log_responses() {
    let doc = fixture("request_log.json");
    let result = normalize(&doc).unwrap();
    let exchanges = result.exchanges();

    // Structured response carried through untouched
    assert_eq!(exchanges[0].response(), Some(&doc["requests"][0]["response"]));
    assert_eq!(exchanges[1].response(), Some(&json!("Here is the refactored version.")));
    // No response field: the whole request stands in
    assert_eq!(exchanges[2].response(), Some(&doc["requests"][2]));
    assert!(exchanges.iter().all(Exchange::is_answered));
}

#[test]
fn test_request_log_metadata() {
    let doc = fixture("request_log.json");
    let result = normalize(&doc).unwrap();

    let ids: Vec<Option<&str>> = result
        .exchanges()
        .iter()
        .map(|e| e.request_id.as_deref())
        .collect();
    assert_eq!(ids, [Some("request_1"), Some("request_2"), Some("request_3")]);

    let first = &result.exchanges()[0];
    assert_eq!(
        first.timestamp.map(|t| t.to_rfc3339()),
        Some("2024-01-15T10:30:00+00:00".to_string())
    );
    assert!(first.message_index.is_none());
}

// =========================================================================
// Message-sequence exports
// =========================================================================

#[test]
fn test_conversation_array() {
    let doc = fixture("conversation_array.json");
    let result = normalize(&doc).unwrap();

    assert_eq!(result.shape(), DetectedShape::ConversationArray);
    // The settings object and the stray string are dropped.
    assert_eq!(result.conversation_count(), 3);
    assert_eq!(
        prompts(result.exchanges()),
        [
            "What is a lifetime?",
            "Show an example",
            "First question",
            "Second question",
            "Anyone there?"
        ]
    );

    let positions: Vec<(usize, usize, usize)> = result
        .exchanges()
        .iter()
        .map(|e| (e.sequence_number, e.conversation_index, e.within_conversation_index))
        .collect();
    assert_eq!(
        positions,
        [(1, 0, 0), (2, 0, 1), (3, 1, 0), (4, 1, 1), (5, 2, 0)]
    );
}

#[test]
fn test_conversation_array_pairing() {
    let doc = fixture("conversation_array.json");
    let result = normalize(&doc).unwrap();
    let exchanges = result.exchanges();

    assert_eq!(exchanges[0].response(), Some(&doc[0]["messages"][2]));
    assert_eq!(exchanges[0].message_index, Some(1));

    // Consecutive user turns share the reply
    assert_eq!(exchanges[2].response(), Some(&doc[2]["turns"][2]));
    assert_eq!(exchanges[3].response(), Some(&doc[2]["turns"][2]));

    // Trailing user turn stays unanswered
    assert!(exchanges[4].response().is_none());
}

#[test]
fn test_conversation_list() {
    let doc = fixture("conversation_list.json");
    let result = normalize(&doc).unwrap();

    assert_eq!(result.shape(), DetectedShape::ConversationList);
    // "Broken" has a null message list; "Empty" is valid with no exchanges.
    assert_eq!(result.conversation_count(), 2);
    assert_eq!(prompts(result.exchanges()), ["Hello!"]);
    assert_eq!(
        result.exchanges()[0].response(),
        Some(&doc["conversations"][0]["messages"][1])
    );
}

#[test]
fn test_single_conversation() {
    let doc = fixture("single_conversation.json");
    let result = normalize(&doc).unwrap();

    assert_eq!(result.shape(), DetectedShape::SingleConversation);
    assert_eq!(result.conversation_count(), 1);
    assert_eq!(prompts(result.exchanges()), ["Hi", SENTINEL_PROMPT, "Thanks"]);

    let exchanges = result.exchanges();
    assert_eq!(exchanges[0].response(), Some(&doc["messages"][1]));
    assert_eq!(exchanges[1].response(), Some(&doc["messages"][3]));
    assert!(exchanges[2].response().is_none());
}

#[test]
fn test_key_sweep_follows_document_order() {
    let doc = fixture("key_sweep.json");
    let result = normalize(&doc).unwrap();

    assert_eq!(result.shape(), DetectedShape::KeySweep);
    assert_eq!(result.conversation_count(), 2);
    assert_eq!(
        prompts(result.exchanges()),
        ["Pinned question", "Archived question"]
    );
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn test_no_conversations() {
    let doc = fixture("no_conversations.json");
    let err = normalize(&doc).unwrap_err();
    assert!(err.is_no_conversations());
    assert_eq!(err.to_string(), "No conversations found in the document");
}

#[test]
fn test_malformed_input_reports_path() {
    let path = Path::new("tests/fixtures/malformed.json");
    let err = load_document(path, &LoadConfig::default()).unwrap_err();

    assert!(err.is_malformed_input());
    assert!(err.to_string().contains("malformed.json"));
}

#[test]
fn test_missing_file() {
    let err = load_document(Path::new("tests/fixtures/missing.json"), &LoadConfig::default())
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_size_limit() {
    let path = Path::new("tests/fixtures/request_log.json");
    let err = load_document(path, &LoadConfig::new().with_max_document_size(16)).unwrap_err();
    assert!(matches!(
        err,
        PromptpackError::DocumentTooLarge { max_size: 16, .. }
    ));
}

// =========================================================================
// Full pipeline
// =========================================================================

#[test]
fn test_pipeline_filter_stats_render() {
    let doc = fixture("conversation_array.json");
    let result = normalize(&doc).unwrap();

    let stats = ExchangeStats::from_normalization(&result);
    assert_eq!(stats.exchanges, 5);
    assert_eq!(stats.answered, 4);
    assert_eq!(stats.unanswered, 1);

    let filter = FilterConfig::new()
        .with_date_from("2024-02-01")
        .unwrap()
        .with_answered_only();
    let filtered = apply_filters(result.into_exchanges(), &filter);
    let numbers: Vec<usize> = filtered.iter().map(|e| e.sequence_number).collect();
    assert_eq!(numbers, [3, 4]);

    let entries = display_entries(&filtered, &RenderConfig::new().with_label_width(10));
    let labels: Vec<String> = entries.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["#3 First q...", "#4 Second..."]);
    assert_eq!(
        entries[0].response.as_deref(),
        Some("{\n  \"sender\": \"bot\",\n  \"text\": \"One answer for both\"\n}")
    );
}

#[cfg(feature = "json-output")]
#[test]
fn test_json_output_preserves_raw_response() {
    let doc = fixture("request_log.json");
    let result = normalize(&doc).unwrap();

    let json = to_json(result.exchanges(), &OutputConfig::new()).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed[0]["response"], doc["requests"][0]["response"]);
    assert_eq!(parsed[2]["response"], doc["requests"][2]);
}
