use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::row::BoardRow;
use crate::tier::Tier;

/// A player on the board. `name` is the identity; every other field is mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub team: String,
    /// Ordering only, never identity.
    #[serde(default)]
    pub rank: Option<f64>,
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub drafted: bool,
}

impl Player {
    /// Creates an untiered, undrafted player.
    pub fn new(name: impl Into<String>, position: impl Into<Position>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            team: String::new(),
            rank: None,
            tier: None,
            drafted: false,
        }
    }

    pub fn to_board_row(&self) -> BoardRow {
        BoardRow {
            name: self.name.clone(),
            position: self.position.to_string(),
            team: self.team.clone(),
            rank: self.rank,
            tier: self.tier,
            drafted: self.drafted,
        }
    }
}
