//! CSV header matching for board columns.

use board_model::{
    COLUMN_DRAFTED, COLUMN_NAME, COLUMN_POSITION, COLUMN_RANK, COLUMN_TEAM, COLUMN_TIER,
};

/// Column indices of the board fields within a CSV header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumns {
    pub name: usize,
    pub position: usize,
    pub team: Option<usize>,
    pub rank: Option<usize>,
    pub tier: Option<usize>,
    pub drafted: Option<usize>,
}

impl BoardColumns {
    /// Locates board columns by exact, case-sensitive header name.
    ///
    /// Fails with the names of every missing required column.
    pub fn locate<'a>(
        headers: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, Vec<&'static str>> {
        let headers: Vec<String> = headers.into_iter().map(normalize_header).collect();
        let find = |column: &str| headers.iter().position(|header| header == column);

        let name = find(COLUMN_NAME);
        let position = find(COLUMN_POSITION);
        match (name, position) {
            (Some(name), Some(position)) => Ok(Self {
                name,
                position,
                team: find(COLUMN_TEAM),
                rank: find(COLUMN_RANK),
                tier: find(COLUMN_TIER),
                drafted: find(COLUMN_DRAFTED),
            }),
            (name, position) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push(COLUMN_NAME);
                }
                if position.is_none() {
                    missing.push(COLUMN_POSITION);
                }
                Err(missing)
            }
        }
    }
}

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_matches('\u{feff}').trim().to_string()
}
