//! Data model for the tier board.
//!
//! Typed records shared by the store, the row sources, and the writers:
//!
//! - [`Player`]: one live record per unique player name
//! - [`Tier`] and [`Position`]: validated/normalized value types
//! - [`RawRow`] and [`BoardRow`]: unvalidated input rows and typed export rows
//! - [`ImportSummary`]: per-import counts and row-level issues
//! - [`TierBoard`]: the derived position × tier view
//! - [`SessionBlob`]: the full-state export restored by a replace import

pub mod error;
pub mod import;
pub mod player;
pub mod position;
pub mod row;
pub mod session;
pub mod tier;
pub mod view;

pub use error::{BoardError, Result};
pub use import::{ImportMode, ImportSummary, RowIssue, RowIssueKind};
pub use player::Player;
pub use position::{Position, normalize_position};
pub use row::{
    BoardRow, COLUMN_DRAFTED, COLUMN_NAME, COLUMN_POSITION, COLUMN_RANK, COLUMN_TEAM,
    COLUMN_TIER, EXPORT_COLUMNS, RawRow, REQUIRED_COLUMNS, format_rank,
};
pub use session::{SESSION_VERSION, SessionBlob};
pub use tier::{RankValue, Tier, TierValue, parse_drafted, parse_rank, parse_tier};
pub use view::{TierBoard, TierBuckets};
