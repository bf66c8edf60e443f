//! Latin-1 program documents.
//!
//! `.ls` files are single-byte text. A [`Document`] keeps every line as raw
//! bytes with its terminator attached, so writing it back reproduces the input
//! exactly except for the tokens the annotator rewrote. No decoding happens,
//! which means no character can be lost or re-encoded on the way through.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// One raw line, terminator (`\n` or `\r\n`) included when present.
pub type Line = Vec<u8>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Split raw bytes into lines, keeping each terminator with its line.
    ///
    /// A final line without a terminator is kept as-is.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let lines = bytes
            .split_inclusive(|&b| b == b'\n')
            .map(<[u8]>::to_vec)
            .collect();
        Self { lines }
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Write the document, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(path, self.to_bytes())
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines.concat()
    }
}
