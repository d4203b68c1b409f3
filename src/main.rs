//! # promptpack CLI
//!
//! Command-line interface for the promptpack library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use promptpack::cli::{Args, DEFAULT_OUTPUT};
use promptpack::config::{LoadConfig, RenderConfig};
use promptpack::core::{ExchangeStats, FilterConfig, OutputConfig, apply_filters};
use promptpack::format::{OutputFormat, write_to_format};
use promptpack::render::display_entries;
use promptpack::{PromptpackError, load_document, normalize};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays usable for `--list`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "promptpack=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn run(args: &Args) -> Result<(), PromptpackError> {
    let total_start = Instant::now();

    if args.list {
        return list(args);
    }

    let output_path = adjust_output_extension(&args.output, args.format);

    // Print header
    println!("📦 promptpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", args.format);

    let filter_config = build_filter(args)?;
    println!();

    // Step 1: Load and normalize
    println!("⏳ Reading export...");
    let parse_start = Instant::now();
    let document = load_document(Path::new(&args.input), &LoadConfig::default())?;
    let result = normalize(&document)?;
    let stats = ExchangeStats::from_normalization(&result);
    println!(
        "   Detected {} ({} conversations, {} exchanges, {:.2}s)",
        result.shape(),
        stats.conversations,
        stats.exchanges,
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Filter
    let exchanges = result.into_exchanges();
    let exchanges = if filter_config.is_active() {
        println!("🔍 Filtering exchanges...");
        let filter_start = Instant::now();
        let filtered = apply_filters(exchanges, &filter_config);
        println!(
            "   {} exchanges after filtering ({:.2}s)",
            filtered.len(),
            filter_start.elapsed().as_secs_f64()
        );
        filtered
    } else {
        exchanges
    };

    // Step 3: Write output in selected format
    let output_config = build_output_config(args);
    println!("💾 Writing {}...", args.format);
    let write_start = Instant::now();
    write_to_format(&exchanges, &output_path, args.format, &output_config)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Conversations: {}", stats.conversations);
    println!(
        "   Exchanges:     {} ({:.1}% answered)",
        stats.exchanges,
        stats.answered_ratio()
    );
    if stats.sentinel_prompts > 0 {
        println!("   No text:       {}", stats.sentinel_prompts);
    }
    if filter_config.is_active() {
        println!("   Filtered:      {}", exchanges.len());
    }

    println!();
    println!("⚡ Total time:  {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Prints the numbered exchange list to stdout.
fn list(args: &Args) -> Result<(), PromptpackError> {
    let filter_config = build_filter(args)?;
    let document = load_document(Path::new(&args.input), &LoadConfig::default())?;
    let result = normalize(&document)?;
    let exchanges = apply_filters(result.into_exchanges(), &filter_config);

    let render = RenderConfig::new().with_label_width(args.label_width);
    for entry in display_entries(&exchanges, &render) {
        println!("{entry}");
    }
    Ok(())
}

fn build_filter(args: &Args) -> Result<FilterConfig, PromptpackError> {
    let mut filter_config = FilterConfig::new();
    let announce = !args.list;

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        if announce {
            println!("📅 After:   {}", after);
        }
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        if announce {
            println!("📅 Before:  {}", before);
        }
    }

    if let Some(ref text) = args.contains {
        filter_config = filter_config.with_prompt_containing(text.as_str());
        if announce {
            println!("🔎 Contains: {}", text);
        }
    }

    if args.answered_only {
        filter_config = filter_config.with_answered_only();
        if announce {
            println!("💬 Answered only");
        }
    }

    Ok(filter_config)
}

fn build_output_config(args: &Args) -> OutputConfig {
    let mut output_config = OutputConfig::new();
    if args.timestamps {
        output_config = output_config.with_timestamps();
    }
    if args.positions {
        output_config = output_config.with_positions();
    }
    if args.ids {
        output_config = output_config.with_ids();
    }
    output_config
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: OutputFormat) -> String {
    if output != DEFAULT_OUTPUT {
        return output.to_string();
    }
    format!("exchanges.{}", format.extension())
}
