//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure of the `promptpack`
//! binary. Output formats are parsed straight into
//! [`OutputFormat`](crate::format::OutputFormat).

use clap::Parser;

use crate::format::OutputFormat;

/// Default output path; the extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "exchanges.csv";

/// Turn AI chat exports of any known shape into a numbered list of
/// prompt/response exchanges.
#[derive(Parser, Debug, Clone)]
#[command(name = "promptpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    promptpack chat_export.json
    promptpack session.json -o prompts.jsonl -f jsonl
    promptpack conversations.json --after 2024-01-01 --answered-only
    promptpack session.json --list --label-width 60
    RUST_LOG=promptpack=debug promptpack odd_export.json")]
pub struct Args {
    /// Path to the JSON export
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Keep prompts sent on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep prompts sent on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep prompts containing this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub contains: Option<String>,

    /// Keep only exchanges that have a response
    #[arg(long)]
    pub answered_only: bool,

    /// Include prompt timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include conversation and message positions in output
    #[arg(long)]
    pub positions: bool,

    /// Include request IDs in output
    #[arg(long)]
    pub ids: bool,

    /// Print the numbered exchange list instead of writing a file
    #[arg(long)]
    pub list: bool,

    /// Maximum label width for --list
    #[arg(long, value_name = "N", default_value_t = 80)]
    pub label_width: usize,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
