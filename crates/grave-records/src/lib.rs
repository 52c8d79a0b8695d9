// Grave-marker records: model, transcription parser and CSV handling
mod parse;
mod record;
mod table;

pub use parse::{BoundaryRule, MAX_ID_LINE_LEN, RecordGrouper, group_lines, is_id_line};
pub use record::{GraveRecord, GridPosition};
pub use table::{CSV_HEADER, read_grid_records, read_records, write_csv};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Grave {section}-{grave_id} has a column but no row (line {line})")]
    MissingRow {
        section: String,
        grave_id: String,
        line: u64,
    },

    #[error("Grid CSV has no `{0}` column")]
    MissingColumn(&'static str),
}

pub type Result<T> = std::result::Result<T, RecordError>;
