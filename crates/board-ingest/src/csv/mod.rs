//! CSV board reading.

mod header;
mod reader;

pub use header::{BoardColumns, normalize_header};
pub use reader::{parse_board_csv, read_board_csv};
