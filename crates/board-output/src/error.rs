//! Export error types.
//!
//! Every export returns a structured error with a user-facing message and
//! an optional hint.

use std::path::PathBuf;
use thiserror::Error;

/// Export operation error.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File I/O error.
    #[error("failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV writer error.
    #[error("failed to write CSV")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// Session blob serialization error.
    #[error("failed to serialize session")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Temp file could not be renamed over the target.
    #[error("failed to complete export to {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Export path has an extension with no known format.
    #[error("cannot infer export format from {path}; use a .csv or .json file")]
    UnknownFormat { path: PathBuf },
}

impl OutputError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::Csv { source } => format!("Could not write the CSV export: {source}"),
            Self::Serialization { source } => {
                format!("Could not serialize the session: {source}")
            }
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the export to {}. Check disk space and permissions.",
                target_path.display()
            ),
            Self::UnknownFormat { path } => format!(
                "Don't know which format to write for {}",
                path.display()
            ),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { .. } | Self::AtomicWriteFailed { .. } => {
                Some("Check that you have permission to write to this location.".into())
            }
            Self::UnknownFormat { .. } => {
                Some("Name the file with a .csv or .json extension, or pass a format.".into())
            }
            Self::Csv { .. } | Self::Serialization { .. } => None,
        }
    }
}

impl From<csv::Error> for OutputError {
    fn from(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization { source }
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, OutputError>;
