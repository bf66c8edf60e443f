//! Input/output root checks and the destructive output reset.

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, bail};

/// Check the input root and return its canonical form.
pub fn resolve_input_root(input: &Path) -> Result<PathBuf> {
    if !input.exists() {
        bail!("Input directory does not exist: {}", input.display());
    }
    if !input.is_dir() {
        bail!("Input path is not a directory: {}", input.display());
    }
    input
        .canonicalize()
        .with_context(|| format!("Failed to resolve input directory: {}", input.display()))
}

/// Resolve `output` against the filesystem and reject roots that would erase
/// the input when cleaned.
///
/// The output root may not exist yet; its nearest existing ancestor is
/// canonicalized instead.
pub fn resolve_output_root(input_root: &Path, output: &Path) -> Result<PathBuf> {
    let output_root = resolve_path(output)
        .with_context(|| format!("Failed to resolve output directory: {}", output.display()))?;

    if output_root == input_root {
        bail!(
            "Input and output directories cannot be the same: {}",
            output_root.display()
        );
    }
    if input_root.starts_with(&output_root) {
        bail!(
            "Output directory {} contains the input directory {}",
            output_root.display(),
            input_root.display()
        );
    }
    if output_root.exists() && !output_root.is_dir() {
        bail!("Output path is not a directory: {}", output_root.display());
    }

    Ok(output_root)
}

/// Canonicalize every existing prefix of `path` and fold `.`/`..` lexically
/// past the point where the filesystem ends.
fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    let mut resolved = PathBuf::new();

    for component in std::path::absolute(path)?.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => {
                resolved.push(other);
                if resolved.exists() {
                    resolved = resolved.canonicalize()?;
                }
            }
        }
    }

    Ok(resolved)
}

/// True when `dir` exists and has at least one entry.
pub fn has_contents(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(false);
    }
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    Ok(entries.next().is_some())
}

/// Remove everything inside `dir` and make sure it exists afterwards.
///
/// Returns the number of top-level entries removed.
pub fn reset_output_root(dir: &Path) -> Result<usize> {
    let mut removed = 0;

    if dir.exists() {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        for entry in entries {
            let entry =
                entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .with_context(|| format!("Failed to inspect: {}", path.display()))?;

            if file_type.is_dir() {
                fs::remove_dir_all(&path)
                    .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
            } else {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove file: {}", path.display()))?;
            }
            removed += 1;
        }
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    tracing::debug!(dir = %dir.display(), removed, "output root reset");
    Ok(removed)
}
