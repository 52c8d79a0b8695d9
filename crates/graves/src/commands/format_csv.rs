use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use grave_records::{BoundaryRule, group_lines, write_csv};

use crate::utils::{file as file_utils, report};

/// How grave records are delimited in a transcription
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuleArg {
    /// Blank-line separated blocks, 3-character id
    #[default]
    Fixed3,
    /// Blank-line separated blocks, 4-character id (needs --section)
    Fixed4,
    /// Any short line starting with a digit is an id
    Heuristic,
}

impl RuleArg {
    pub fn boundary(self) -> BoundaryRule {
        match self {
            RuleArg::Fixed3 => BoundaryRule::BlankLine { id_width: 3 },
            RuleArg::Fixed4 => BoundaryRule::BlankLine { id_width: 4 },
            RuleArg::Heuristic => BoundaryRule::IdLine,
        }
    }

    /// Section code used when none is given
    pub fn default_section(self) -> Option<&'static str> {
        match self {
            RuleArg::Fixed3 => Some("A"),
            RuleArg::Fixed4 => None,
            RuleArg::Heuristic => Some("C"),
        }
    }
}

impl std::fmt::Display for RuleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleArg::Fixed3 => write!(f, "fixed3"),
            RuleArg::Fixed4 => write!(f, "fixed4"),
            RuleArg::Heuristic => write!(f, "heuristic"),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct FormatCsvArgs {
    /// Transcription text file
    #[arg(short = 'f', long = "filepath", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Record boundary rule
    #[arg(short, long, default_value_t = RuleArg::Fixed3)]
    pub rule: RuleArg,

    /// Cemetery section code written on every row
    #[arg(short, long, required_if_eq("rule", "fixed4"))]
    pub section: Option<String>,
}

impl FormatCsvArgs {
    fn section(&self) -> Result<&str> {
        self.section
            .as_deref()
            .or(self.rule.default_section())
            .with_context(|| format!("--section is required with --rule {}", self.rule))
    }
}

pub fn execute(args: FormatCsvArgs) -> Result<()> {
    let section = args.section()?;
    let text = file_utils::read_input(&args.file)?;

    let records = group_lines(text.lines(), args.rule.boundary(), section);
    write_csv(&records, io::stdout().lock())?;

    report::done(&format!(
        "Formatted {} graves from {}",
        records.len(),
        args.file.display()
    ));
    Ok(())
}
