//! Line grammars for pasted ranking text.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `<rank>[.] <name> <team> <position><depth>`, e.g. `15. CeeDee Lamb DAL WR2`.
static BASIC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.?\s+([A-Za-z][A-Za-z .'\-]*?)\s+([A-Z]{2,3})\s+([A-Z]{1,3})\d*$")
        .expect("Invalid basic line regex")
});

/// Basic line followed by `<bye> $<value> [<tier-letter>]`.
static EXTENDED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d+)\.?\s+([A-Za-z][A-Za-z .'\-]*?)\s+([A-Z]{2,3})\s+([A-Z]{1,3})\d*\s+(\d{1,2})\s+\$(\d+(?:\.\d+)?)(?:\s+([A-Za-z]))?$",
    )
    .expect("Invalid extended line regex")
});

/// Which line grammar(s) pasted text is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextGrammar {
    /// Rank, name, team, position.
    Basic,
    /// Basic fields plus bye week, dollar value, and optional tier letter.
    Extended,
    /// Extended first, then basic.
    #[default]
    Any,
}

impl TextGrammar {
    pub fn as_str(self) -> &'static str {
        match self {
            TextGrammar::Basic => "basic",
            TextGrammar::Extended => "extended",
            TextGrammar::Any => "any",
        }
    }

    /// Matches one trimmed line, returning the recognized fields.
    pub fn match_line(self, line: &str) -> Option<LineFields<'_>> {
        match self {
            TextGrammar::Basic => BASIC_LINE.captures(line).map(LineFields::basic),
            TextGrammar::Extended => EXTENDED_LINE.captures(line).map(LineFields::extended),
            TextGrammar::Any => TextGrammar::Extended
                .match_line(line)
                .or_else(|| TextGrammar::Basic.match_line(line)),
        }
    }
}

impl fmt::Display for TextGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextGrammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(TextGrammar::Basic),
            "extended" => Ok(TextGrammar::Extended),
            "any" => Ok(TextGrammar::Any),
            other => Err(format!(
                "unknown grammar '{other}' (expected basic, extended, or any)"
            )),
        }
    }
}

/// Fields captured from a matching line, borrowed from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFields<'a> {
    pub rank: &'a str,
    pub name: &'a str,
    pub team: &'a str,
    pub position: &'a str,
    pub bye: Option<&'a str>,
    pub value: Option<&'a str>,
    pub tier_letter: Option<&'a str>,
}

impl<'a> LineFields<'a> {
    fn basic(caps: Captures<'a>) -> Self {
        let field = |idx| caps.get(idx).map_or("", |m| m.as_str());
        Self {
            rank: field(1),
            name: field(2).trim_end(),
            team: field(3),
            position: field(4),
            bye: None,
            value: None,
            tier_letter: None,
        }
    }

    fn extended(caps: Captures<'a>) -> Self {
        let optional = |idx| caps.get(idx).map(|m| m.as_str());
        Self {
            bye: optional(5),
            value: optional(6),
            tier_letter: optional(7),
            ..Self::basic(caps)
        }
    }
}

/// Maps a tier letter (`A`..`E`, any case) to its tier number.
pub fn tier_from_letter(letter: &str) -> Option<u8> {
    match letter.to_ascii_uppercase().as_str() {
        "A" => Some(1),
        "B" => Some(2),
        "C" => Some(3),
        "D" => Some(4),
        "E" => Some(5),
        _ => None,
    }
}
