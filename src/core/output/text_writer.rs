//! Plain-text listing writer.

use std::fs;

use super::format_timestamp;
use crate::Result;
use crate::core::models::OutputConfig;
use crate::exchange::Exchange;

const NO_RESPONSE: &str = "(no response)";

/// Writes exchanges as a numbered plain-text listing.
///
/// # Format
/// ```text
/// === #1 ===
/// Prompt:
/// Hi
///
/// Response:
/// Hello!
///
/// ```
pub fn write_text(exchanges: &[Exchange<'_>], output_path: &str, config: &OutputConfig) -> Result<()> {
    fs::write(output_path, to_text(exchanges, config))?;
    Ok(())
}

/// Converts exchanges to a plain-text listing.
///
/// Structured responses are pretty-printed.
pub fn to_text(exchanges: &[Exchange<'_>], config: &OutputConfig) -> String {
    let mut out = String::new();
    for exchange in exchanges {
        write_exchange(&mut out, exchange, config);
    }
    out
}

fn write_exchange(out: &mut String, exchange: &Exchange<'_>, config: &OutputConfig) {
    out.push_str(&format!("=== #{} ===\n", exchange.sequence_number));

    if let Some(ts) = format_timestamp(exchange, config) {
        out.push_str(&format!("Time: {ts}\n"));
    }
    if config.include_positions {
        out.push_str(&format!(
            "Conversation: {}, position: {}",
            exchange.conversation_index, exchange.within_conversation_index
        ));
        if let Some(index) = exchange.message_index {
            out.push_str(&format!(", message: {index}"));
        }
        out.push('\n');
    }
    if config.include_ids {
        if let Some(ref id) = exchange.request_id {
            out.push_str(&format!("Request: {id}\n"));
        }
    }

    let response = exchange.response_pretty();
    out.push_str(&format!(
        "Prompt:\n{}\n\nResponse:\n{}\n\n",
        exchange.prompt(),
        response.as_deref().unwrap_or(NO_RESPONSE)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_text_basic() {
        let answer = json!("Hello!");
        let exchanges = vec![
            Exchange::new(1, "Hi").with_response(&answer),
            Exchange::new(2, "Bye"),
        ];

        let text = to_text(&exchanges, &OutputConfig::new());
        assert_eq!(
            text,
            "=== #1 ===\nPrompt:\nHi\n\nResponse:\nHello!\n\n\
             === #2 ===\nPrompt:\nBye\n\nResponse:\n(no response)\n\n"
        );
    }

    #[test]
    fn test_to_text_pretty_prints_structured_response() {
        let answer = json!({"content": "Hello!"});
        let exchanges = vec![Exchange::new(1, "Hi").with_response(&answer)];
        let text = to_text(&exchanges, &OutputConfig::new());
        assert!(text.contains("Response:\n{\n  \"content\": \"Hello!\"\n}\n"));
    }

    #[test]
    fn test_to_text_metadata() {
        let exchanges = vec![
            Exchange::new(3, "Q")
                .with_position(1, 2)
                .with_message_index(5)
                .with_request_id("request_3"),
        ];
        let text = to_text(&exchanges, &OutputConfig::new().with_positions().with_ids());
        assert!(text.contains("Conversation: 1, position: 2, message: 5\n"));
        assert!(text.contains("Request: request_3\n"));
    }

    #[test]
    fn test_to_text_full_block() {
        let answer = json!("A");
        let ts = chrono::DateTime::from_timestamp(1_705_314_600, 0).unwrap();
        let exchanges = vec![
            Exchange::new(4, "Q")
                .with_response(&answer)
                .with_timestamp(ts)
                .with_position(0, 3)
                .with_request_id("request_4"),
        ];

        let text = to_text(&exchanges, &OutputConfig::all());
        assert_eq!(
            text,
            "=== #4 ===\nTime: 2024-01-15T10:30:00Z\nConversation: 0, position: 3\n\
             Request: request_4\nPrompt:\nQ\n\nResponse:\nA\n\n"
        );
    }

    #[test]
    fn test_write_text() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_text(&[Exchange::new(1, "Hi")], path, &OutputConfig::new()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("=== #1 ===\n"));
    }
}
