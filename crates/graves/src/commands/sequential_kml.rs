use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use grave_layout::sequential_document;
use grave_records::read_records;

use super::AnchorArgs;
use crate::utils::{file as file_utils, report};

#[derive(Args, Debug, Clone)]
pub struct SequentialKmlArgs {
    /// CSV with section, grave_id and inscription columns
    #[arg(short = 'f', long = "filepath", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Folder name for the section, e.g. "Section B"
    #[arg(short = 'n', long = "section-name")]
    pub section_name: String,

    #[command(flatten)]
    pub anchor: AnchorArgs,
}

pub fn execute(args: SequentialKmlArgs) -> Result<()> {
    let input = file_utils::open_input(&args.file)?;
    let graves = read_records(input)
        .with_context(|| format!("Failed to read graves from {:?}", args.file))?;

    let doc = sequential_document(args.anchor.origin(), &args.section_name, &graves)?;
    report::write_kml(&doc)?;

    report::done(&format!(
        "Mapped {} graves into {}",
        graves.len(),
        args.section_name
    ));
    Ok(())
}
