//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::ChatlensError;
use chatlens::cli::{Args, Command};
use chatlens::config::{AnalysisConfig, DiscoveryConfig, ReaderConfig};
use chatlens::discovery::{find_chat_exports, most_recent_export, resolve_path};
use chatlens::output::{OutputFormat, render_summary, write_to_format};
use chatlens::parser::ChatParser;
use chatlens::stats::analyze_with;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let args = <Args as ClapParser>::parse();
    let reader = args.reader_config();

    match args.command {
        Command::Analyze { path, top, json } => run_analyze(path.as_deref(), top, json, reader),
        Command::Parse {
            path,
            output,
            format,
        } => run_parse(&path, output.as_deref(), format.map(Into::into), reader),
        Command::Validate { path } => run_validate(&path, reader),
        Command::Find { dir } => run_find(&dir, reader),
    }
}

/// Resolves the export to analyze, falling back to the default folders.
fn locate_export(path: Option<&str>, reader: &ReaderConfig) -> Result<PathBuf, ChatlensError> {
    if let Some(path) = path {
        return Ok(resolve_path(path));
    }

    let discovery = DiscoveryConfig::default();
    most_recent_export(&discovery, reader)?
        .ok_or_else(|| ChatlensError::no_export_found(discovery.search_dirs.clone()))
}

fn run_analyze(
    path: Option<&str>,
    top: usize,
    json: bool,
    reader: ReaderConfig,
) -> Result<(), ChatlensError> {
    let path = locate_export(path, &reader)?;
    let log = ChatParser::with_config(reader).parse_file(&path)?;
    let analysis = analyze_with(&log, &AnalysisConfig::new().with_top_n(top));

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", render_summary(&analysis).trim_end());
    }

    Ok(())
}

fn run_parse(
    path: &str,
    output: Option<&str>,
    format: Option<OutputFormat>,
    reader: ReaderConfig,
) -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let input = resolve_path(path);
    let (output_path, format) = output_target(output, format)?;

    // Print header
    println!("📦 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", input.display());
    println!("💾 Output:  {}", output_path.display());
    println!("📄 Format:  {}", format);
    println!();

    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let log = ChatParser::with_config(reader).parse_file(&input)?;
    println!(
        "   Found {} messages ({:.2}s)",
        log.len(),
        parse_start.elapsed().as_secs_f64()
    );

    println!("💾 Writing {}...", format);
    write_to_format(&log, &output_path, format)?;

    println!();
    println!("✅ Done! Output saved to {}", output_path.display());
    println!(
        "   Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Picks the output file and format.
///
/// An explicit format wins; otherwise it comes from the output extension,
/// and without an output path the default is `records.csv`.
fn output_target(
    output: Option<&str>,
    format: Option<OutputFormat>,
) -> Result<(PathBuf, OutputFormat), ChatlensError> {
    match (output.map(PathBuf::from), format) {
        (Some(path), Some(format)) => Ok((path, format)),
        (Some(path), None) => {
            let format = OutputFormat::from_path(&path)?;
            Ok((path, format))
        }
        (None, format) => {
            let format = format.unwrap_or_default();
            Ok((PathBuf::from(format!("records.{}", format.extension())), format))
        }
    }
}

fn run_validate(path: &str, reader: ReaderConfig) -> Result<(), ChatlensError> {
    let path = resolve_path(path);
    if ChatParser::with_config(reader).is_chat_export(&path)? {
        println!("✅ {} is a recognized chat export", path.display());
        Ok(())
    } else {
        Err(ChatlensError::not_a_chat_export(Some(path)))
    }
}

fn run_find(dir: &str, reader: ReaderConfig) -> Result<(), ChatlensError> {
    let root = resolve_path(dir);
    let exports = find_chat_exports(&root, &DiscoveryConfig::default(), &reader)?;

    if exports.is_empty() {
        println!("No chat exports found in {}", root.display());
        return Ok(());
    }

    for export in &exports {
        print_export(&export.path, export.size, export.modified);
    }
    println!("🔎 {} chat export(s) found", exports.len());

    Ok(())
}

fn print_export(path: &Path, size: u64, modified: Option<chrono::DateTime<chrono::Local>>) {
    println!("Found chat export: {}", path.display());
    println!("  Size: {} bytes", size);
    if let Some(modified) = modified {
        println!("  Modified: {}", modified.format("%Y-%m-%d %H:%M:%S"));
    }
    println!();
}
