//! CSV export for demand tables.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::demand::DemandTable;
use crate::demand::table::COLUMNS;

/// Leading column holding each slot's start time.
const TIME_COLUMN: &str = "Time";

/// Exports a demand table to a CSV file at the given path.
///
/// Writes a header row followed by one data row per slot. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(table: &DemandTable, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(table, buf)
}

/// Writes a demand table as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(table: &DemandTable, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(std::iter::once(TIME_COLUMN).chain(COLUMNS))?;

    for r in table.rows() {
        wtr.write_record(&[
            r.start.format("%Y-%m-%d %H:%M").to_string(),
            r.active_office.to_string(),
            format!("{:.4}", r.heating),
            format!("{:.4}", r.data_centre),
            format!("{:.4}", r.office_equipment),
            format!("{:.4}", r.lighting_other),
            format!("{:.4}", r.total),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
