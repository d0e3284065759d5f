//! Pasted-text scanning.

use board_model::RawRow;
use tracing::{debug, trace};

use super::grammar::{TextGrammar, tier_from_letter};
use crate::batch::{RowBatch, SourceKind, UnmatchedLine};
use crate::error::{IngestError, Result};

/// Origin label for text that did not come from a file.
pub const PASTED_TEXT_ORIGIN: &str = "<pasted text>";

/// One recognized ranking line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    pub line: usize,
    pub rank: u32,
    pub name: String,
    pub team: String,
    pub position: String,
    pub bye: Option<u8>,
    pub value: Option<f64>,
    pub tier_letter: Option<char>,
}

impl TextEntry {
    /// Converts to a raw row; a tier letter outside `A`..`E` is passed
    /// through so the store reports it as unparseable.
    pub fn to_raw_row(&self) -> RawRow {
        let mut row = RawRow::new(self.name.clone(), self.position.clone())
            .at_line(self.line)
            .with_team(self.team.clone())
            .with_rank(self.rank);
        if let Some(letter) = self.tier_letter {
            let letter = letter.to_string();
            row = match tier_from_letter(&letter) {
                Some(tier) => row.with_tier(tier),
                None => row.with_tier(letter),
            };
        }
        row
    }
}

/// Result of scanning pasted text line by line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextScan {
    pub entries: Vec<TextEntry>,
    /// Lines starting with a rank that matched no grammar.
    pub unmatched: Vec<UnmatchedLine>,
    /// Non-blank header and divider lines.
    pub ignored: usize,
}

impl TextScan {
    pub fn skipped_count(&self) -> usize {
        self.unmatched.len() + self.ignored
    }
}

/// Scans every line of `text` against `grammar`.
///
/// Blank lines are dropped. Lines that do not start with a digit are
/// headers or dividers and only counted. Lines that start with a rank but
/// fail the grammar are kept as unmatched.
pub fn scan_pasted_text(text: &str, grammar: TextGrammar) -> TextScan {
    let mut scan = TextScan::default();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if !line.starts_with(|c: char| c.is_ascii_digit()) {
            trace!(line = line_no, text = line, "ignored header line");
            scan.ignored += 1;
            continue;
        }

        let entry = grammar.match_line(line).and_then(|fields| {
            Some(TextEntry {
                line: line_no,
                rank: fields.rank.parse().ok()?,
                name: fields.name.to_string(),
                team: fields.team.to_string(),
                position: fields.position.to_string(),
                bye: fields.bye.and_then(|bye| bye.parse().ok()),
                value: fields.value.and_then(|value| value.parse().ok()),
                tier_letter: fields.tier_letter.and_then(|letter| letter.chars().next()),
            })
        });

        match entry {
            Some(entry) => scan.entries.push(entry),
            None => {
                debug!(line = line_no, text = line, %grammar, "unmatched text line");
                scan.unmatched.push(UnmatchedLine {
                    line: line_no,
                    text: line.to_string(),
                });
            }
        }
    }

    scan
}

/// Parses pasted text into a row batch.
///
/// Fails with [`IngestError::NoRowsMatched`] when no line matched.
pub fn parse_pasted_text(text: &str, grammar: TextGrammar, origin: &str) -> Result<RowBatch> {
    let scan = scan_pasted_text(text, grammar);
    if scan.entries.is_empty() {
        return Err(IngestError::NoRowsMatched {
            skipped: scan.skipped_count(),
        });
    }

    let mut batch = RowBatch::new(SourceKind::Text, origin);
    batch.rows = scan.entries.iter().map(TextEntry::to_raw_row).collect();
    batch.skipped = scan.unmatched;
    debug!(
        origin,
        rows = batch.len(),
        unmatched = batch.skipped_count(),
        ignored = scan.ignored,
        "read pasted text"
    );
    Ok(batch)
}
