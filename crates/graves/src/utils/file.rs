use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a transcription file into memory
pub fn read_input(path: &Path) -> Result<String> {
    log::debug!("Reading transcription {}", path.display());
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// Open a CSV input file
pub fn open_input(path: &Path) -> Result<File> {
    log::debug!("Opening {}", path.display());
    File::open(path).with_context(|| format!("Failed to open file: {:?}", path))
}
