//! Text-file helpers for bit strings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// read_bits_file loads a '0'/'1' string, trimming surrounding whitespace.
///
/// # Arguments
/// * `path` - File to read.
pub fn read_bits_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading input file {}", path.display()))?;
    Ok(text.trim().to_string())
}

/// write_bits_file stores a bit string without a trailing newline.
///
/// # Arguments
/// * `path` - File to create or overwrite.
/// * `bits` - The '0'/'1' string to store.
pub fn write_bits_file(path: &Path, bits: &str) -> Result<()> {
    fs::write(path, bits).with_context(|| format!("writing output file {}", path.display()))
}
