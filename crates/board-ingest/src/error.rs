//! Error types for row sources.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole import batch.
///
/// Row-level problems never end up here; they are reported through the
/// batch's skipped lines or the store's import summary.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}; save the file as UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {origin}: {message}")]
    CsvParse { origin: String, message: String },

    /// CSV input has no header row.
    #[error("CSV is empty: {origin}")]
    EmptyCsv { origin: String },

    /// Header row lacks `Name` and/or `Position`.
    #[error("rejected batch: missing required column(s) {} in {origin}", .columns.join(", "))]
    MissingRequiredColumn {
        columns: Vec<String>,
        origin: String,
    },

    // === Session Blob Errors ===
    /// Session blob is not valid JSON for the expected schema.
    #[error("invalid session file {origin}: {message}")]
    SessionFormat { origin: String, message: String },

    /// Session blob written by a newer schema.
    #[error("session file version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion { found: u32, max_supported: u32 },

    // === Text Errors ===
    /// Pasted text produced no rows.
    #[error("no rows matched the pasted-text grammar ({skipped} line(s) skipped)")]
    NoRowsMatched { skipped: usize },
}

impl IngestError {
    pub(crate) fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = IngestError::MissingRequiredColumn {
            columns: vec!["Name".to_string(), "Position".to_string()],
            origin: "board.csv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "rejected batch: missing required column(s) Name, Position in board.csv"
        );
    }

    #[test]
    fn test_read_not_found_maps_to_file_not_found() {
        let source = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = IngestError::read(std::path::Path::new("missing.csv"), source);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
