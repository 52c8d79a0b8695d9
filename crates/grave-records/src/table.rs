use std::io::{Read, Write};

use serde::Deserialize;

use crate::{GraveRecord, GridPosition, RecordError, Result};

pub const CSV_HEADER: &str = "section,grave_id,inscription";

/// Write the header followed by one row per record
pub fn write_csv<W: Write>(records: &[GraveRecord], mut writer: W) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for record in records {
        writeln!(writer, "{}", record.to_csv_row())?;
    }
    writer.flush()?;
    Ok(())
}

/// Read `section,grave_id,inscription` rows; extra columns are ignored
pub fn read_records<R: Read>(reader: R) -> Result<Vec<GraveRecord>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: GraveRecord = row?;
        records.push(record);
    }
    log::info!("Read {} grave records", records.len());
    Ok(records)
}

#[derive(Debug, Deserialize)]
struct GridRow {
    section: String,
    grave_id: String,
    row: Option<usize>,
    column: Option<usize>,
    inscription: String,
}

const GRID_COLUMNS: [&str; 2] = ["row", "column"];

/// Read rows carrying `row` and `column` columns
///
/// Rows with an empty `column` have no slot in the layout and are skipped.
/// The header itself must name both `row` and `column`.
pub fn read_grid_records<R: Read>(reader: R) -> Result<Vec<(GridPosition, GraveRecord)>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut placed = Vec::new();
    let mut skipped = 0usize;

    let headers = reader.headers()?.clone();
    for column in GRID_COLUMNS {
        if !headers.iter().any(|name| name == column) {
            return Err(RecordError::MissingColumn(column));
        }
    }

    for result in reader.records() {
        let record = result?;
        let row: GridRow = record.deserialize(Some(&headers))?;
        let Some(col) = row.column else {
            log::debug!("Grave {}-{} has no column, skipping", row.section, row.grave_id);
            skipped += 1;
            continue;
        };
        let Some(grid_row) = row.row else {
            return Err(RecordError::MissingRow {
                section: row.section,
                grave_id: row.grave_id,
                line: record.position().map_or(0, |pos| pos.line()),
            });
        };
        placed.push((
            GridPosition::new(grid_row, col),
            GraveRecord::new(row.section, row.grave_id, row.inscription),
        ));
    }

    log::info!(
        "Read {} placed grave records ({} without a column)",
        placed.len(),
        skipped
    );
    Ok(placed)
}
