//! Report formatting and printing.
//!
//! Text output is one aligned line per program followed by totals; JSON
//! output is the serialized [`BatchReport`]. Separate from the batch driver
//! so weldtag can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::args::OutputFormat;
use super::commands::{BatchReport, CommandResult, CommandSummary, InitSummary};
use crate::batch::{FileOutcome, FileStatus};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout.
pub fn print(result: &CommandResult, format: OutputFormat, verbose: bool) -> Result<()> {
    print_to(result, format, verbose, &mut io::stdout().lock())
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(
    result: &CommandResult,
    format: OutputFormat,
    verbose: bool,
    writer: &mut W,
) -> Result<()> {
    match (&result.summary, format) {
        (CommandSummary::Batch(report), OutputFormat::Json) => {
            let json =
                serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            writeln!(writer, "{}", json)?;
        }
        (CommandSummary::Batch(report), OutputFormat::Text) => {
            print_batch(report, verbose, writer)?;
        }
        (CommandSummary::Cancelled, OutputFormat::Json) => {
            writeln!(writer, "{}", serde_json::json!({ "cancelled": true }))?;
        }
        (CommandSummary::Cancelled, OutputFormat::Text) => {
            writeln!(writer, "Operation cancelled by user.")?;
        }
        (CommandSummary::Init(init), _) => print_init(init, writer)?,
    }
    Ok(())
}

fn print_init<W: Write>(init: &InitSummary, writer: &mut W) -> Result<()> {
    if init.already_exists {
        writeln!(
            writer,
            "{} {} already exists",
            FAILURE_MARK.red(),
            init.path.display()
        )?;
    } else {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", init.path.display()).green()
        )?;
    }
    Ok(())
}

fn print_batch<W: Write>(report: &BatchReport, verbose: bool, writer: &mut W) -> Result<()> {
    if report.files.is_empty() {
        writeln!(
            writer,
            "No {} files found in: {}",
            extension_list(&report.extensions),
            report.input_root.display()
        )?;
        return Ok(());
    }

    writeln!(writer, "Input:  {}", report.input_root.display())?;
    match &report.output_root {
        Some(root) => writeln!(writer, "Output: {}", root.display())?,
        None => writeln!(writer, "Output: {}", "(dry run, nothing written)".dimmed())?,
    }
    writeln!(writer, "Files:  {}", report.files.len())?;
    writeln!(writer)?;

    let width = report
        .files
        .iter()
        .map(|outcome| UnicodeWidthStr::width(outcome.path.as_str()))
        .max()
        .unwrap_or(0);

    for outcome in &report.files {
        writeln!(writer, "{}", format_outcome(outcome, width))?;
    }

    writeln!(writer)?;
    print_summary(report, verbose, writer)
}

fn print_summary<W: Write>(report: &BatchReport, verbose: bool, writer: &mut W) -> Result<()> {
    let summary = &report.summary;
    let verb = if report.dry_run { "checked" } else { "processed" };
    let files = format!(
        "{} {} {}",
        summary.files,
        if summary.files == 1 { "file" } else { "files" },
        verb
    );

    if summary.failed == 0 {
        writeln!(writer, "{} {}", SUCCESS_MARK.green(), files.green())?;
    } else {
        writeln!(
            writer,
            "{} {}, {}",
            FAILURE_MARK.red(),
            files,
            format!("{} failed", summary.failed).red()
        )?;
    }

    let tagged = if report.dry_run { "to tag" } else { "tagged" };
    writeln!(writer, "  /MN  {}: {}", tagged, summary.totals.changed_mn)?;
    writeln!(writer, "  /POS {}: {}", tagged, summary.totals.changed_pos)?;
    if summary.totals.skipped() > 0 {
        writeln!(
            writer,
            "  Already tagged (skipped): {}",
            summary.totals.skipped()
        )?;
    }

    if verbose {
        if report.cleaned_entries > 0 {
            writeln!(
                writer,
                "  Removed {} existing entries from the output directory",
                report.cleaned_entries
            )?;
        }
        if report.unreadable_entries > 0 {
            writeln!(
                writer,
                "  {} unreadable entries skipped",
                report.unreadable_entries
            )?;
        }
    }

    if let Some(root) = &report.output_root {
        writeln!(writer, "Output written to: {}", root.display())?;
    }
    Ok(())
}

/// One aligned report line; `width` is the display width of the longest path.
fn format_outcome(outcome: &FileOutcome, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(outcome.path.as_str()));
    let path = format!("{}{}", outcome.path, " ".repeat(padding));

    match &outcome.status {
        FileStatus::Ok { stats } => {
            let mut line = format!(
                "{} {}  /MN:{:>3} /POS:{:>3}",
                SUCCESS_MARK.green(),
                path,
                stats.changed_mn,
                stats.changed_pos
            );
            if stats.skipped() > 0 {
                let skipped = format!("(skipped: {})", stats.skipped());
                line.push_str(&format!(" {}", skipped.dimmed()));
            }
            line
        }
        FileStatus::Error { message } => format!(
            "{} {}  {} {}",
            FAILURE_MARK.red(),
            path,
            "error:".bold().red(),
            message
        ),
    }
}

fn extension_list(extensions: &[String]) -> String {
    extensions
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ")
}
