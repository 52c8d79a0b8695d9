use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use grave_layout::{Graveyard, grid_document};
use grave_records::read_grid_records;

use super::AnchorArgs;
use crate::utils::{file as file_utils, report};

#[derive(Args, Debug, Clone)]
pub struct GridKmlArgs {
    /// CSV with section, grave_id, row, column and inscription columns
    #[arg(short = 'f', long = "filepath", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    #[command(flatten)]
    pub anchor: AnchorArgs,
}

pub fn execute(args: GridKmlArgs) -> Result<()> {
    let input = file_utils::open_input(&args.file)?;
    let placed = read_grid_records(input)
        .with_context(|| format!("Failed to read graves from {:?}", args.file))?;
    let graveyard = Graveyard::from_records(placed)?;

    let doc = grid_document(args.anchor.origin(), &graveyard)?;
    report::write_kml(&doc)?;

    report::done(&format!("Mapped {} graves on the grid", graveyard.len()));
    Ok(())
}
