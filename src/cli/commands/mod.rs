pub mod annotate;
pub mod check;
pub mod init;

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::args::CommonArgs;
use super::ExitStatus;
use crate::annotator::AnnotateOptions;
use crate::batch::{BatchSummary, Destination, FileOutcome, process_files};
use crate::config::{Config, load_config};
use crate::scanner::scan_files;

#[derive(Debug)]
pub enum CommandSummary {
    Batch(BatchReport),
    /// The user declined to erase the output root.
    Cancelled,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    pub already_exists: bool,
}

/// Everything a batch command learned, ready for reporting.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub input_root: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_root: Option<PathBuf>,
    pub dry_run: bool,
    pub extensions: Vec<String>,
    /// Top-level entries removed from the output root before writing.
    pub cleaned_entries: usize,
    /// Directory entries that could not be read during discovery.
    pub unreadable_entries: usize,
    pub files: Vec<FileOutcome>,
    pub summary: BatchSummary,
}

/// Result of running a weldtag command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Batch(report) if report.summary.failed > 0 => ExitStatus::Failure,
            CommandSummary::Init(init) if init.already_exists => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

/// Load the config next to `input_root` and apply CLI overrides.
fn resolve_config(input_root: &Path, common: &CommonArgs) -> Result<Config> {
    let loaded = load_config(input_root)?;
    let mut config = loaded.config;

    if common.keep_leading_zeros {
        config.keep_leading_zeros = true;
    }
    if common.verbose && loaded.from_file {
        eprintln!("{} using configuration file", "info:".bold().cyan());
    }

    Ok(config)
}

/// Discover programs under `input_root` and annotate them.
fn run_batch(
    config: &Config,
    input_root: PathBuf,
    output_root: Option<PathBuf>,
    cleaned_entries: usize,
    verbose: bool,
) -> BatchReport {
    let extensions = config.normalized_extensions();
    let excluded: Vec<PathBuf> = output_root.iter().cloned().collect();

    let scan = scan_files(&input_root, &extensions, &config.ignores, &excluded, verbose);
    if scan.skipped_count > 0 {
        eprintln!(
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            scan.skipped_count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }
    tracing::debug!(root = %input_root.display(), files = scan.files.len(), "discovered programs");

    let destination = match &output_root {
        Some(root) => Destination::Directory(root),
        None => Destination::DryRun,
    };
    let options = AnnotateOptions {
        keep_leading_zeros: config.keep_leading_zeros,
    };
    let files = process_files(&input_root, &scan.files, destination, options);
    let summary = BatchSummary::from_outcomes(&files);

    BatchReport {
        input_root,
        dry_run: output_root.is_none(),
        output_root,
        extensions,
        cleaned_entries,
        unreadable_entries: scan.skipped_count,
        files,
        summary,
    }
}
