//! The row source seam between input formats and the store.

use std::path::{Path, PathBuf};

use crate::batch::{RowBatch, SourceKind};
use crate::blob::read_session_blob;
use crate::csv::read_board_csv;
use crate::error::Result;
use crate::file::read_utf8;
use crate::text::{PASTED_TEXT_ORIGIN, TextGrammar, parse_pasted_text};

/// Anything that can produce a batch of raw rows.
///
/// Adapters for other inputs (a fetched ranking page, for example) implement
/// this and yield text-derived rows.
pub trait RowSource {
    fn kind(&self) -> SourceKind;

    fn read_rows(&self) -> Result<RowBatch>;
}

/// A CSV board on disk.
#[derive(Debug, Clone)]
pub struct CsvFile {
    pub path: PathBuf,
}

impl RowSource for CsvFile {
    fn kind(&self) -> SourceKind {
        SourceKind::Csv
    }

    fn read_rows(&self) -> Result<RowBatch> {
        read_board_csv(&self.path)
    }
}

/// A session blob on disk.
#[derive(Debug, Clone)]
pub struct SessionFile {
    pub path: PathBuf,
}

impl RowSource for SessionFile {
    fn kind(&self) -> SourceKind {
        SourceKind::SessionBlob
    }

    fn read_rows(&self) -> Result<RowBatch> {
        read_session_blob(&self.path)
    }
}

/// A ranking text file.
#[derive(Debug, Clone)]
pub struct TextFile {
    pub path: PathBuf,
    pub grammar: TextGrammar,
}

impl RowSource for TextFile {
    fn kind(&self) -> SourceKind {
        SourceKind::Text
    }

    fn read_rows(&self) -> Result<RowBatch> {
        let text = read_utf8(&self.path)?;
        parse_pasted_text(&text, self.grammar, &self.path.display().to_string())
    }
}

/// Text pasted directly into the session.
#[derive(Debug, Clone)]
pub struct PastedText {
    pub text: String,
    pub grammar: TextGrammar,
}

impl PastedText {
    pub fn new(text: impl Into<String>, grammar: TextGrammar) -> Self {
        Self {
            text: text.into(),
            grammar,
        }
    }
}

impl RowSource for PastedText {
    fn kind(&self) -> SourceKind {
        SourceKind::Text
    }

    fn read_rows(&self) -> Result<RowBatch> {
        parse_pasted_text(&self.text, self.grammar, PASTED_TEXT_ORIGIN)
    }
}

/// Opens a file source, detecting the format from the extension unless
/// `kind` is given.
pub fn open_source(
    path: &Path,
    kind: Option<SourceKind>,
    grammar: TextGrammar,
) -> Box<dyn RowSource> {
    let path = path.to_path_buf();
    match kind.unwrap_or_else(|| SourceKind::detect(&path)) {
        SourceKind::Csv => Box::new(CsvFile { path }),
        SourceKind::SessionBlob => Box::new(SessionFile { path }),
        SourceKind::Text => Box::new(TextFile { path, grammar }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_source_detects_kind() {
        let any = TextGrammar::Any;
        assert_eq!(
            open_source(Path::new("a.csv"), None, any).kind(),
            SourceKind::Csv
        );
        assert_eq!(
            open_source(Path::new("a.json"), None, any).kind(),
            SourceKind::SessionBlob
        );
        assert_eq!(
            open_source(Path::new("a.txt"), None, any).kind(),
            SourceKind::Text
        );
    }

    #[test]
    fn test_open_source_explicit_kind_wins() {
        let source = open_source(Path::new("export.txt"), Some(SourceKind::Csv), TextGrammar::Any);
        assert_eq!(source.kind(), SourceKind::Csv);
    }

    #[test]
    fn test_pasted_text_source() {
        let source = PastedText::new("1. Josh Allen BUF QB1", TextGrammar::Basic);
        let batch = source.read_rows().unwrap();
        assert_eq!(batch.origin, PASTED_TEXT_ORIGIN);
        assert_eq!(batch.rows[0].name, "Josh Allen");
    }
}
