//! Tier values and the coercion rules for raw tier, rank, and drafted text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// A tier bucket in the closed range 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Tier(u8);

impl Tier {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// All tiers in ascending order.
    pub const ALL: [Tier; 5] = [Tier(1), Tier(2), Tier(3), Tier(4), Tier(5)];

    /// Returns the tier for `value` when it lies in 1..=5.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based bucket index.
    pub fn index(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }
}

impl TryFrom<i64> for Tier {
    type Error = BoardError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Tier::new)
            .ok_or(BoardError::InvalidTier { value })
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of reading a raw tier cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierValue {
    /// Empty, zero, or a null marker.
    Unassigned,
    Assigned(Tier),
    /// Anything else; callers coerce this to unassigned and report it.
    Unparseable,
}

impl TierValue {
    pub fn tier(self) -> Option<Tier> {
        match self {
            TierValue::Assigned(tier) => Some(tier),
            TierValue::Unassigned | TierValue::Unparseable => None,
        }
    }
}

/// Parses a raw tier cell.
///
/// Integral floats ("3.0") are accepted since spreadsheet exports write
/// integer columns with missing values as floats.
pub fn parse_tier(raw: &str) -> TierValue {
    let value = raw.trim();
    if value.is_empty() || is_null_marker(value) {
        return TierValue::Unassigned;
    }
    let number = match value.parse::<i64>() {
        Ok(number) => number,
        Err(_) => match value.parse::<f64>() {
            Ok(float) if float.is_finite() && float.fract() == 0.0 => float as i64,
            _ => return TierValue::Unparseable,
        },
    };
    if number == 0 {
        return TierValue::Unassigned;
    }
    match Tier::try_from(number) {
        Ok(tier) => TierValue::Assigned(tier),
        Err(_) => TierValue::Unparseable,
    }
}

/// Parses a raw drafted cell. Returns `None` when the text is not a flag.
pub fn parse_drafted(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" | "x" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "" => Some(false),
        _ => None,
    }
}

/// Outcome of reading a raw rank cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankValue {
    /// Empty or a null marker.
    Absent,
    Value(f64),
    Unparseable,
}

/// Parses a raw rank cell. Non-finite numbers are unparseable.
pub fn parse_rank(raw: &str) -> RankValue {
    let value = raw.trim().trim_end_matches('.');
    if value.is_empty() || is_null_marker(value) {
        return RankValue::Absent;
    }
    match value.parse::<f64>() {
        Ok(rank) if rank.is_finite() => RankValue::Value(rank),
        _ => RankValue::Unparseable,
    }
}

fn is_null_marker(value: &str) -> bool {
    ["nan", "none", "null", "na", "n/a", "-"]
        .iter()
        .any(|marker| value.eq_ignore_ascii_case(marker))
}
