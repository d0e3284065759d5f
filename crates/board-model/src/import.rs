//! Import modes and the per-import report.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How an import batch reconciles with the players already on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Clear the board, then insert every row.
    #[default]
    Replace,
    /// Update existing players with the supplied fields; insert new ones.
    Merge,
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportMode::Replace => f.write_str("replace"),
            ImportMode::Merge => f.write_str("merge"),
        }
    }
}

impl FromStr for ImportMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(ImportMode::Replace),
            "merge" => Ok(ImportMode::Merge),
            other => Err(format!("unknown import mode '{other}'")),
        }
    }
}

/// Row-level problem found during an import. Never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RowIssueKind {
    /// Row rejected: no player name.
    #[error("empty player name")]
    EmptyName,
    /// Row rejected: a new player without a position.
    #[error("empty position for a new player")]
    EmptyPosition,
    /// Row kept, tier coerced to unassigned.
    #[error("unparseable tier '{value}'")]
    UnparseableTier { value: String },
    /// Row kept, drafted flag left at its default or previous value.
    #[error("unparseable drafted flag '{value}'")]
    UnparseableDrafted { value: String },
    /// Row kept, rank left absent or at its previous value.
    #[error("unparseable rank '{value}'")]
    UnparseableRank { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    pub line: usize,
    pub name: String,
    pub kind: RowIssueKind,
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "row {}: {}", self.line, self.kind)
        } else {
            write!(f, "row {} ({}): {}", self.line, self.name, self.kind)
        }
    }
}

/// Outcome of one `import_rows` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub mode: ImportMode,
    pub inserted: usize,
    pub updated: usize,
    /// Rows that were skipped entirely.
    pub rejected: Vec<RowIssue>,
    /// Rows that were imported with one or more fields coerced.
    pub coerced: Vec<RowIssue>,
}

impl ImportSummary {
    pub fn new(mode: ImportMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn coerced_count(&self) -> usize {
        self.coerced.len()
    }

    /// Rows that reached the board (inserted or updated).
    pub fn accepted(&self) -> usize {
        self.inserted + self.updated
    }

    pub fn has_issues(&self) -> bool {
        !self.rejected.is_empty() || !self.coerced.is_empty()
    }

    /// Issues in source order, rejected and coerced interleaved.
    pub fn issues(&self) -> Vec<&RowIssue> {
        let mut issues: Vec<&RowIssue> = self.rejected.iter().chain(&self.coerced).collect();
        issues.sort_by_key(|issue| issue.line);
        issues
    }
}
