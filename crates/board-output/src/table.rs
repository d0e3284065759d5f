//! CSV board export.

use std::io::Write;
use std::path::Path;

use board_model::{BoardRow, EXPORT_COLUMNS};
use csv::WriterBuilder;

use crate::atomic::write_atomic;
use crate::error::Result;

/// Writes rows as CSV with the fixed export header.
///
/// Absent rank and tier become empty cells; drafted is `true`/`false`.
pub fn write_board_csv<W: Write>(rows: &[BoardRow], writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(EXPORT_COLUMNS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Renders rows as CSV text.
pub fn board_csv_string(rows: &[BoardRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_board_csv(rows, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Exports rows to a CSV file.
pub fn export_csv(rows: &[BoardRow], path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    write_board_csv(rows, &mut buffer)?;
    write_atomic(path, &buffer)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "exported CSV board");
    Ok(())
}
