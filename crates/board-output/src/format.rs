//! Export format selection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{OutputError, Result};

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Table with `Name,Position,Team,Rank,Tier,Drafted` columns.
    Csv,
    /// JSON session blob.
    Session,
}

impl ExportFormat {
    /// Infers the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        if extension.eq_ignore_ascii_case("csv") {
            Ok(ExportFormat::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Ok(ExportFormat::Session)
        } else {
            Err(OutputError::UnknownFormat {
                path: path.to_path_buf(),
            })
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Session => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Session => f.write_str("json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" | "session" => Ok(ExportFormat::Session),
            other => Err(format!("unknown export format '{other}' (expected csv or json)")),
        }
    }
}
