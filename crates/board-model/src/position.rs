use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Normalized position code ("WR2" becomes "WR").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Position(String);

impl Position {
    pub fn new(raw: &str) -> Self {
        Self(normalize_position(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Trims, strips trailing depth-chart digits, and upper-cases a position code.
pub fn normalize_position(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(|c: char| c.is_ascii_digit() || c.is_whitespace())
        .to_ascii_uppercase()
}

impl From<String> for Position {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for Position {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl Deref for Position {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Position {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_depth_digits() {
        assert_eq!(normalize_position("WR2"), "WR");
        assert_eq!(normalize_position("RB12"), "RB");
        assert_eq!(normalize_position(" te1 "), "TE");
        assert_eq!(normalize_position("WR1 1"), "WR");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["WR", "WR2", "QB1", "DST", "K", "WR1 1", "RB 2 3"] {
            let once = normalize_position(raw);
            assert_eq!(normalize_position(&once), once);
        }
    }

    #[test]
    fn test_position_borrow_lookup() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(Position::new("QB1"), 1);
        assert_eq!(map.get("QB"), Some(&1));
    }
}
