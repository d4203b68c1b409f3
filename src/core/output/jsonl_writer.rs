//! JSON Lines (JSONL) output writer.
//!
//! JSONL format is ideal for:
//! - Fine-tuning and evaluation datasets
//! - Line-by-line processing with standard tools
//! - Appending exports from several sessions into one file

use std::fs::File;
use std::io::{BufWriter, Write};

use super::OutputRecord;
use crate::Result;
use crate::core::models::OutputConfig;
use crate::exchange::Exchange;

/// Writes exchanges to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"sequenceNumber":1,"prompt":"Hi","response":"Hello!"}
/// {"sequenceNumber":2,"prompt":"Thanks","response":null}
/// ```
pub fn write_jsonl(
    exchanges: &[Exchange<'_>],
    output_path: &str,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, exchanges, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts exchanges to a JSONL string.
///
/// Same format as `write_jsonl`, but returns a String instead of writing to file.
pub fn to_jsonl(exchanges: &[Exchange<'_>], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(&mut buffer, exchanges, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(
    writer: &mut W,
    exchanges: &[Exchange<'_>],
    config: &OutputConfig,
) -> Result<()> {
    for exchange in exchanges {
        let record = OutputRecord::from_exchange(exchange, config);
        serde_json::to_writer(&mut *writer, &record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
