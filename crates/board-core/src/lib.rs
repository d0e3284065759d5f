//! Roster store for the tier board.
//!
//! [`RosterStore`] owns every player record. All writes go through its
//! operations, which keep the board invariants:
//!
//! - one live record per player name
//! - tiers confined to 1..=5, at most one tier per player
//! - the drafted flag independent of the tier
//! - [`RosterStore::tiers_by_position`] always derived from the records
//!
//! # Example
//!
//! ```
//! use board_core::RosterStore;
//! use board_model::{ImportMode, RawRow};
//!
//! let mut store = RosterStore::new();
//! store.import_rows(
//!     &[RawRow::new("Josh Allen", "QB").with_team("BUF").with_rank(1)],
//!     ImportMode::Replace,
//! );
//! store.set_tier("Josh Allen", Some(1)).unwrap();
//! assert_eq!(store.tiers_by_position()["QB"][1], ["Josh Allen"]);
//! ```

mod derive;
mod reconcile;
mod store;

pub use store::RosterStore;
