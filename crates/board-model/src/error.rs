use thiserror::Error;

/// Errors raised by roster operations on a single player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// No player with this name is on the board.
    #[error("player not found: {name}")]
    NotFound { name: String },

    /// Tier outside the closed range 1..=5.
    #[error("invalid tier {value}: tiers range from 1 to 5")]
    InvalidTier { value: i64 },
}

pub type Result<T> = std::result::Result<T, BoardError>;
