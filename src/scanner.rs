//! Recursive discovery of program files under an input root.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::is_glob_pattern;

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Paths relative to the scanned root, sorted.
    pub files: Vec<PathBuf>,
    /// Entries that could not be read.
    pub skipped_count: usize,
}

/// Collect files under `root` whose extension is in `extensions`.
///
/// `ignore_patterns` holds globs matched against the path relative to `root`,
/// or literal relative paths that exclude everything below them.
/// `excluded_dirs` are absolute directories to leave out entirely, such as an
/// output root nested inside the input root.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    excluded_dirs: &[PathBuf],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = excluded_dirs.to_vec();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let walker = WalkDir::new(root).sort_by_file_name().into_iter();
    let walker = walker.filter_entry(|entry| {
        !literal_ignore_paths
            .iter()
            .any(|ignore_path| entry.path().starts_with(ignore_path))
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };

        if glob_patterns.iter().any(|p| p.matches_path(relative)) {
            tracing::trace!(path = %relative.display(), "ignored by pattern");
            continue;
        }

        files.push(relative.to_path_buf());
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| ext.eq_ignore_ascii_case(wanted)))
}
