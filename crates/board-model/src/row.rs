//! Row shapes exchanged with row sources and writers.

use serde::{Deserialize, Serialize};

use crate::tier::Tier;

pub const COLUMN_NAME: &str = "Name";
pub const COLUMN_POSITION: &str = "Position";
pub const COLUMN_TEAM: &str = "Team";
pub const COLUMN_RANK: &str = "Rank";
pub const COLUMN_TIER: &str = "Tier";
pub const COLUMN_DRAFTED: &str = "Drafted";

/// Columns a structured import must carry.
pub const REQUIRED_COLUMNS: [&str; 2] = [COLUMN_NAME, COLUMN_POSITION];

/// Column order of every structured export.
pub const EXPORT_COLUMNS: [&str; 6] = [
    COLUMN_NAME,
    COLUMN_POSITION,
    COLUMN_TEAM,
    COLUMN_RANK,
    COLUMN_TIER,
    COLUMN_DRAFTED,
];

/// An unvalidated row as produced by a row source.
///
/// Optional fields are `None` when the source did not supply them, which
/// matters for merge imports: only supplied fields overwrite a player.
/// Numeric and flag fields stay as text so the store can coerce and report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based record or line number in the source, 0 when unknown.
    pub line: usize,
    pub name: String,
    pub position: String,
    pub team: Option<String>,
    pub rank: Option<String>,
    pub tier: Option<String>,
    pub drafted: Option<String>,
}

impl RawRow {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    #[must_use]
    pub fn with_rank(mut self, rank: impl ToString) -> Self {
        self.rank = Some(rank.to_string());
        self
    }

    #[must_use]
    pub fn with_tier(mut self, tier: impl ToString) -> Self {
        self.tier = Some(tier.to_string());
        self
    }

    #[must_use]
    pub fn with_drafted(mut self, drafted: impl ToString) -> Self {
        self.drafted = Some(drafted.to_string());
        self
    }
}

/// A fully typed row: the export shape, and the record shape of session blobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Team", default)]
    pub team: String,
    #[serde(rename = "Rank", default)]
    pub rank: Option<f64>,
    #[serde(rename = "Tier", default)]
    pub tier: Option<Tier>,
    #[serde(rename = "Drafted", default)]
    pub drafted: bool,
}

impl BoardRow {
    /// Converts back into a raw row carrying every field, so a replace
    /// import restores the exact state.
    pub fn to_raw(&self, line: usize) -> RawRow {
        RawRow {
            line,
            name: self.name.clone(),
            position: self.position.clone(),
            team: Some(self.team.clone()),
            rank: self.rank.map(format_rank),
            tier: self.tier.map(|tier| tier.to_string()),
            drafted: Some(self.drafted.to_string()),
        }
    }

    /// Cell values in [`EXPORT_COLUMNS`] order.
    pub fn to_record(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.position.clone(),
            self.team.clone(),
            self.rank.map(format_rank).unwrap_or_default(),
            self.tier.map(|tier| tier.to_string()).unwrap_or_default(),
            self.drafted.to_string(),
        ]
    }
}

/// Formats a rank with the shortest text that parses back to the same value.
pub fn format_rank(rank: f64) -> String {
    format!("{rank}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(1.0), "1");
        assert_eq!(format_rank(100.0), "100");
        assert_eq!(format_rank(12.5), "12.5");
    }

    #[test]
    fn test_to_record_empty_cells() {
        let row = BoardRow {
            name: "Josh Allen".to_string(),
            position: "QB".to_string(),
            team: "BUF".to_string(),
            rank: None,
            tier: None,
            drafted: false,
        };
        assert_eq!(
            row.to_record(),
            ["Josh Allen", "QB", "BUF", "", "", "false"].map(String::from)
        );
    }

    #[test]
    fn test_to_raw_carries_every_field() {
        let row = BoardRow {
            name: "Josh Allen".to_string(),
            position: "QB".to_string(),
            team: "BUF".to_string(),
            rank: Some(1.0),
            tier: Tier::new(1),
            drafted: true,
        };
        let raw = row.to_raw(2);
        assert_eq!(raw.line, 2);
        assert_eq!(raw.team.as_deref(), Some("BUF"));
        assert_eq!(raw.rank.as_deref(), Some("1"));
        assert_eq!(raw.tier.as_deref(), Some("1"));
        assert_eq!(raw.drafted.as_deref(), Some("true"));
    }

    #[test]
    fn test_board_row_json_keys() {
        let row = BoardRow {
            name: "CeeDee Lamb".to_string(),
            position: "WR".to_string(),
            team: "DAL".to_string(),
            rank: Some(15.0),
            tier: Tier::new(2),
            drafted: false,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Name"], "CeeDee Lamb");
        assert_eq!(json["Tier"], 2);
        assert_eq!(json["Drafted"], false);
    }
}
