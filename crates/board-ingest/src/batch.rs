//! The unit a row source hands to the store.

use std::fmt;
use std::path::Path;

use board_model::RawRow;

/// Which input format a batch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Structured table with `Name`/`Position`/... headers.
    Csv,
    /// Previously exported session blob (JSON).
    SessionBlob,
    /// Freeform pasted ranking text.
    Text,
}

impl SourceKind {
    /// Picks a format from the file extension: `.csv`, `.json`, else text.
    pub fn detect(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        if extension.eq_ignore_ascii_case("csv") {
            SourceKind::Csv
        } else if extension.eq_ignore_ascii_case("json") {
            SourceKind::SessionBlob
        } else {
            SourceKind::Text
        }
    }

    /// Session blobs carry the full board and always replace it.
    pub fn restores_session(self) -> bool {
        self == SourceKind::SessionBlob
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Csv => f.write_str("csv"),
            SourceKind::SessionBlob => f.write_str("session"),
            SourceKind::Text => f.write_str("text"),
        }
    }
}

/// A pasted line that looked like a ranking row but matched no grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedLine {
    pub line: usize,
    pub text: String,
}

/// Rows read from one source, plus the lines it had to skip.
#[derive(Debug, Clone)]
pub struct RowBatch {
    pub kind: SourceKind,
    /// File path or a label such as `<pasted text>`.
    pub origin: String,
    pub rows: Vec<RawRow>,
    pub skipped: Vec<UnmatchedLine>,
}

impl RowBatch {
    pub fn new(kind: SourceKind, origin: impl Into<String>) -> Self {
        Self {
            kind,
            origin: origin.into(),
            rows: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(SourceKind::detect(Path::new("board.CSV")), SourceKind::Csv);
        assert_eq!(
            SourceKind::detect(Path::new("session.json")),
            SourceKind::SessionBlob
        );
        assert_eq!(SourceKind::detect(Path::new("ranks.txt")), SourceKind::Text);
        assert_eq!(SourceKind::detect(Path::new("ranks")), SourceKind::Text);
    }

    #[test]
    fn test_only_blob_restores_session() {
        assert!(SourceKind::SessionBlob.restores_session());
        assert!(!SourceKind::Csv.restores_session());
    }
}
