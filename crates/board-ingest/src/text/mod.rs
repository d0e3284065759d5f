//! Freeform pasted ranking text.

mod grammar;
mod parser;

pub use grammar::{LineFields, TextGrammar, tier_from_letter};
pub use parser::{
    PASTED_TEXT_ORIGIN, TextEntry, TextScan, parse_pasted_text, scan_pasted_text,
};
