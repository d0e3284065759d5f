//! Read-only projections computed from player state.
//!
//! Every view is rebuilt from the records on each call. Boards hold a few
//! hundred players, so there is no incremental index to keep in sync.

use std::cmp::Ordering;

use board_model::{BoardRow, Player, TierBoard};

use crate::store::{Entry, RosterStore};

impl RosterStore {
    /// Position → tier → names, in tier-assignment order.
    ///
    /// Every position with at least one player appears, even when none of
    /// its players is tiered.
    pub fn tiers_by_position(&self) -> TierBoard {
        let mut board = TierBoard::new();
        for entry in &self.entries {
            board.ensure_position(&entry.player.position);
        }

        let mut tiered: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|entry| entry.player.tier.is_some())
            .collect();
        tiered.sort_by_key(|entry| entry.stamp);
        for entry in tiered {
            if let Some(tier) = entry.player.tier {
                board.place(&entry.player.position, tier, entry.player.name.clone());
            }
        }
        board
    }

    /// All players sorted by rank (unranked last), ties broken by name.
    pub fn players_by_rank(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players().collect();
        players.sort_by(|a, b| rank_order(a, b));
        players
    }

    /// Undrafted players in rank order.
    pub fn available(&self) -> Vec<&Player> {
        self.players_by_rank()
            .into_iter()
            .filter(|player| !player.drafted)
            .collect()
    }

    /// Drafted players in rank order.
    pub fn drafted(&self) -> Vec<&Player> {
        self.players_by_rank()
            .into_iter()
            .filter(|player| player.drafted)
            .collect()
    }

    /// Every player as an export row, in rank order.
    ///
    /// Replace-importing the result reproduces an equivalent board.
    pub fn export_rows(&self) -> Vec<BoardRow> {
        self.players_by_rank()
            .into_iter()
            .map(Player::to_board_row)
            .collect()
    }
}

fn rank_order(a: &Player, b: &Player) -> Ordering {
    let by_rank = match (a.rank, b.rank) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_rank.then_with(|| a.name.cmp(&b.name))
}
