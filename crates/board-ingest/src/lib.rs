//! Row sources for the tier board.
//!
//! Turns external input into batches of [`board_model::RawRow`]:
//!
//! - **CSV**: header row with `Name`/`Position` (required) and
//!   `Team`/`Rank`/`Tier`/`Drafted` (optional), matched case-sensitively
//! - **Session blob**: the JSON full-state export, restored with a replace import
//! - **Pasted text**: ranking lines matched against a fixed line grammar
//!
//! Whole-batch problems (missing columns, no matching lines) are errors;
//! row-level problems are left for the store to report.
//!
//! # Example
//!
//! ```
//! use board_ingest::{PastedText, RowSource, TextGrammar};
//!
//! let source = PastedText::new("WIDE RECEIVERS\n15. CeeDee Lamb DAL WR2", TextGrammar::Any);
//! let batch = source.read_rows().unwrap();
//! assert_eq!(batch.rows[0].position, "WR");
//! ```

mod batch;
mod blob;
mod csv;
mod error;
mod file;
mod source;
mod text;

// === Error Types ===
pub use error::{IngestError, Result};

// === Batches ===
pub use batch::{RowBatch, SourceKind, UnmatchedLine};

// === Formats ===
pub use self::csv::{BoardColumns, normalize_header, parse_board_csv, read_board_csv};
pub use blob::{parse_session_blob, read_session_blob};
pub use text::{
    LineFields, PASTED_TEXT_ORIGIN, TextEntry, TextGrammar, TextScan, parse_pasted_text,
    scan_pasted_text, tier_from_letter,
};

// === Files ===
pub use file::read_utf8;

// === Sources ===
pub use source::{CsvFile, PastedText, RowSource, SessionFile, TextFile, open_source};
