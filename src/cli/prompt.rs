//! Confirmation before the output root is erased.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;

/// Answers accepted as "yes", compared case-insensitively.
const AFFIRMATIVE: &[&str] = &["s", "si", "sí", "y", "yes"];

/// Ask on stderr whether `output` may be wiped, reading the answer from stdin.
pub fn confirm_reset(output: &Path) -> Result<bool> {
    confirm_reset_with(output, &mut io::stdin().lock(), &mut io::stderr().lock())
}

pub fn confirm_reset_with<R: BufRead, W: Write>(
    output: &Path,
    reader: &mut R,
    writer: &mut W,
) -> Result<bool> {
    writeln!(
        writer,
        "{} output directory is not empty and will be cleaned:",
        "warning:".bold().yellow()
    )?;
    writeln!(writer, "    {}", output.display())?;
    writeln!(writer, "    ALL files and subdirectories in it will be deleted.")?;
    write!(writer, "Continue? (y/N): ")?;
    writer.flush()?;

    let mut answer = String::new();
    reader
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}
