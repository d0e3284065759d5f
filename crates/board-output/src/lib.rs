//! Board exports.
//!
//! Writes the store's export rows either as a CSV table or as a JSON session
//! blob. File exports go through a temp file and a rename.

mod atomic;
mod error;
mod format;
mod session;
mod table;

use std::path::Path;

use board_model::BoardRow;

pub use atomic::write_atomic;
pub use error::{OutputError, Result};
pub use format::ExportFormat;
pub use session::{export_session, write_session_blob};
pub use table::{board_csv_string, export_csv, write_board_csv};

/// Exports rows to `path` in `format`.
pub fn export_board(rows: &[BoardRow], path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Session => export_session(rows, path),
    }
}
