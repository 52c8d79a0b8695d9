use std::io::{self, BufWriter};

use anyhow::Result;
use colored::Colorize;
use grave_kml::Document;

/// Serialize the finished document to stdout
pub fn write_kml(doc: &Document) -> Result<()> {
    let stdout = BufWriter::new(io::stdout().lock());
    grave_kml::write_document(doc, stdout)?;
    Ok(())
}

/// Completion summary on stderr, so stdout stays machine-readable
pub fn done(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}
