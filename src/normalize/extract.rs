//! Pairing user turns with responses in a message sequence.

use serde_json::Value;

use super::RawExchange;
use super::prompt::extract_prompt_text;
use super::role::is_user_message;
use super::timestamp::extract_timestamp;

/// Extracts one exchange per user message, in message order.
///
/// The response of a user message is the first later message that is not a
/// user turn, or `None` if the sequence ends first. Consecutive user messages
/// therefore share the same response. A user message with no locatable text
/// still produces an exchange, with the sentinel prompt.
///
/// # Example
///
/// ```rust
/// use promptpack::normalize::extract_exchanges;
/// use serde_json::json;
///
/// let messages = json!([
///     {"role": "user", "content": "A"},
///     {"role": "user", "content": "B"},
///     {"role": "assistant", "content": "C"}
/// ]);
/// let exchanges = extract_exchanges(messages.as_array().unwrap());
///
/// assert_eq!(exchanges.len(), 2);
/// assert_eq!(exchanges[0].response, Some(&messages[2]));
/// assert_eq!(exchanges[1].response, Some(&messages[2]));
/// ```
pub fn extract_exchanges(messages: &[Value]) -> Vec<RawExchange<'_>> {
    let is_user: Vec<bool> = messages.iter().map(is_user_message).collect();

    // next_reply[i] = first index > i holding a non-user message.
    let mut next_reply = vec![None; messages.len()];
    let mut upcoming = None;
    for index in (0..messages.len()).rev() {
        next_reply[index] = upcoming;
        if !is_user[index] {
            upcoming = Some(index);
        }
    }

    messages
        .iter()
        .enumerate()
        .filter(|(index, _)| is_user[*index])
        .map(|(index, message)| RawExchange {
            prompt: extract_prompt_text(message),
            response: next_reply[index].map(|reply| &messages[reply]),
            message_index: Some(index),
            request_id: None,
            timestamp: extract_timestamp(message),
        })
        .collect()
}
