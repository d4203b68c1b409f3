//! JSON output writer.

use std::fs::File;
use std::io::Write;

use super::OutputRecord;
use crate::Result;
use crate::core::models::OutputConfig;
use crate::exchange::Exchange;

/// Writes exchanges to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"sequenceNumber": 1, "prompt": "Hi", "response": {"role": "assistant", "content": "Hello!"}},
///   {"sequenceNumber": 2, "prompt": "Thanks", "response": null}
/// ]
/// ```
///
/// Responses are written exactly as they appear in the source document.
pub fn write_json(exchanges: &[Exchange<'_>], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(exchanges, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts exchanges to a pretty-printed JSON array string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(exchanges: &[Exchange<'_>], config: &OutputConfig) -> Result<String> {
    let records: Vec<OutputRecord<'_>> = exchanges
        .iter()
        .map(|e| OutputRecord::from_exchange(e, config))
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}
