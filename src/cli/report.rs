//! Output formatting for command results.
//!
//! Scan results go to stdout in the requested format; diagnostics go to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary, ScanSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{FileDependencies, ParseError};
use crate::utils::js_single_quoted;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Header written at the top of generated deps files.
pub const DEPS_HEADER: &str = "// This file was autogenerated by goog-deps.\n// Please do not edit.\n";

/// JSON document written by `scan --format json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanReport<'a> {
    files: &'a [FileDependencies],
    parse_errors: &'a [ParseError],
}

pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    match &result.summary {
        CommandSummary::Scan(summary) => {
            let mut stdout = io::stdout().lock();
            write_scan(summary, &mut stdout).context("Failed to write scan output")?;
            print_parse_warning_to(summary.parse_errors.len(), verbose, &mut io::stderr().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
    Ok(())
}

fn write_scan<W: Write>(summary: &ScanSummary, writer: &mut W) -> Result<()> {
    match summary.format {
        OutputFormat::Text => write_text(summary, writer)?,
        OutputFormat::Json => write_json(summary, writer)?,
        OutputFormat::Deps => write_deps(&summary.files, &summary.deps_prefix, writer)?,
    }
    Ok(())
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Human-readable listing, one block per file.
pub fn write_text<W: Write>(summary: &ScanSummary, writer: &mut W) -> io::Result<()> {
    for file in &summary.files {
        writeln!(writer, "{}", file.file_path.bold())?;
        for namespace in &file.provides {
            writeln!(writer, "  {} {}", "provides".green(), namespace)?;
        }
        for namespace in &file.requires {
            writeln!(writer, "  {} {}", "requires".cyan(), namespace)?;
        }
    }
    if !summary.files.is_empty() {
        writeln!(writer)?;
    }

    let provide_count: usize = summary.files.iter().map(|f| f.provides.len()).sum();
    let require_count: usize = summary.files.iter().map(|f| f.requires.len()).sum();
    let checked = summary.source_files_checked;

    let message = format!(
        "Scanned {} source {}: {} {}, {} {}",
        checked,
        plural(checked, "file", "files"),
        provide_count,
        plural(provide_count, "provide", "provides"),
        require_count,
        plural(require_count, "require", "requires"),
    );

    if summary.parse_errors.is_empty() {
        writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green())
    } else {
        let failed = summary.parse_errors.len();
        writeln!(
            writer,
            "{} {} ({} {} could not be parsed)",
            FAILURE_MARK.red(),
            message,
            failed,
            plural(failed, "file", "files"),
        )
    }
}

pub fn write_json<W: Write>(summary: &ScanSummary, writer: &mut W) -> Result<()> {
    let report = ScanReport {
        files: &summary.files,
        parse_errors: &summary.parse_errors,
    };
    serde_json::to_writer_pretty(&mut *writer, &report).context("JSON serialization failed")?;
    writeln!(writer)?;
    Ok(())
}

/// Closure Library `deps.js` output.
pub fn write_deps<W: Write>(
    files: &[FileDependencies],
    prefix: &str,
    writer: &mut W,
) -> io::Result<()> {
    write!(writer, "{}", DEPS_HEADER)?;
    for file in files {
        writeln!(
            writer,
            "goog.addDependency({}, {}, {}, {{}});",
            js_single_quoted(&format!("{}{}", prefix, file.file_path)),
            js_array(&file.provides),
            js_array(&file.requires),
        )?;
    }
    Ok(())
}

fn js_array(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| js_single_quoted(s)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Print a parse warning to a custom writer.
///
/// In verbose mode each failure was already reported while scanning.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}
