//! Batch driver: runs the annotator over every discovered program.
//!
//! Files are independent, so they are processed on the rayon pool. Each one
//! reads its own bytes, owns its own spot map and writes its own output, and
//! a failure is recorded on that file's [`FileOutcome`] without stopping the
//! rest of the batch. Outcomes come back in input order.

mod output_dir;

use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

use crate::annotator::{AnnotateOptions, ChangeStats, annotate_document};
use crate::document::Document;
pub use output_dir::{has_contents, reset_output_root, resolve_input_root, resolve_output_root};

/// Where annotated programs go.
#[derive(Debug, Clone, Copy)]
pub enum Destination<'a> {
    /// Mirror the input tree under this root.
    Directory(&'a Path),
    /// Annotate in memory only.
    DryRun,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FileStatus {
    Ok { stats: ChangeStats },
    Error { message: String },
}

/// Result of processing one program.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Path relative to the input root, `/`-separated.
    pub path: String,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn stats(&self) -> Option<&ChangeStats> {
        match &self.status {
            FileStatus::Ok { stats } => Some(stats),
            FileStatus::Error { .. } => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.status, FileStatus::Ok { .. })
    }
}

/// Totals across a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub files: usize,
    pub failed: usize,
    pub totals: ChangeStats,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let mut summary = Self {
            files: outcomes.len(),
            ..Default::default()
        };
        for outcome in outcomes {
            match outcome.stats() {
                Some(stats) => summary.totals += *stats,
                None => summary.failed += 1,
            }
        }
        summary
    }
}

/// Annotate `files` (relative to `input_root`) in parallel.
pub fn process_files(
    input_root: &Path,
    files: &[PathBuf],
    destination: Destination<'_>,
    options: AnnotateOptions,
) -> Vec<FileOutcome> {
    files
        .par_iter()
        .map(|relative| {
            let output = match destination {
                Destination::Directory(root) => Some(root.join(relative)),
                Destination::DryRun => None,
            };
            let result = process_file(&input_root.join(relative), output.as_deref(), options);

            let status = match result {
                Ok(stats) => FileStatus::Ok { stats },
                Err(err) => {
                    tracing::debug!(file = %relative.display(), "failed: {:#}", err);
                    FileStatus::Error {
                        message: format!("{:#}", err),
                    }
                }
            };

            FileOutcome {
                path: display_path(relative),
                status,
            }
        })
        .collect()
}

/// Annotate one program, writing it to `output` when given.
pub fn process_file(
    input: &Path,
    output: Option<&Path>,
    options: AnnotateOptions,
) -> Result<ChangeStats> {
    let document = Document::read(input)?;
    let annotated = annotate_document(&document, options);
    let stats = annotated.stats;

    if let Some(output) = output {
        annotated.into_document().write(output)?;
    }

    tracing::debug!(
        file = %input.display(),
        changed_mn = stats.changed_mn,
        changed_pos = stats.changed_pos,
        skipped = stats.skipped(),
        "annotated"
    );
    Ok(stats)
}

fn display_path(relative: &Path) -> String {
    relative.to_string_lossy().replace('\\', "/")
}
