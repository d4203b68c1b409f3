//! CSV output writer.

use std::fs::File;

use super::format_timestamp;
use crate::Result;
use crate::core::models::OutputConfig;
use crate::exchange::Exchange;

/// Writes exchanges to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on `OutputConfig`
///   - Basic: `#`, `Prompt`, `Response`
///   - With timestamps: `#`, `Timestamp`, `Prompt`, `Response`
///   - With positions: adds `Conversation`, `Position`, `MessageIndex`
///   - With IDs: adds `RequestId`
/// - Responses: strings as-is, structured values as compact JSON
/// - Encoding: UTF-8
pub fn write_csv(exchanges: &[Exchange<'_>], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_records(&mut writer, exchanges, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts exchanges to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv(exchanges: &[Exchange<'_>], config: &OutputConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_records(&mut writer, exchanges, config)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    exchanges: &[Exchange<'_>],
    config: &OutputConfig,
) -> Result<()> {
    writer.write_record(build_header(config))?;
    for exchange in exchanges {
        writer.write_record(build_record(exchange, config))?;
    }
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["#"];

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Prompt");
    header.push("Response");

    if config.include_positions {
        header.extend(["Conversation", "Position", "MessageIndex"]);
    }
    if config.include_ids {
        header.push("RequestId");
    }

    header
}

/// Build CSV record for a single exchange.
fn build_record(exchange: &Exchange<'_>, config: &OutputConfig) -> Vec<String> {
    let mut record = vec![exchange.sequence_number.to_string()];

    if config.include_timestamps {
        record.push(format_timestamp(exchange, config).unwrap_or_default());
    }

    record.push(exchange.prompt().to_string());
    record.push(exchange.response_text().unwrap_or_default());

    if config.include_positions {
        record.push(exchange.conversation_index.to_string());
        record.push(exchange.within_conversation_index.to_string());
        record.push(
            exchange
                .message_index
                .map(|i| i.to_string())
                .unwrap_or_default(),
        );
    }
    if config.include_ids {
        record.push(exchange.request_id.clone().unwrap_or_default());
    }

    record
}
