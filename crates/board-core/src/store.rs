//! The roster store: sole owner of player state.

use std::collections::HashMap;

use board_model::{BoardError, Player, Position, Result, Tier};
use tracing::debug;

/// A player plus its tier-assignment stamp.
///
/// The stamp increases every time the player's tier actually changes (or the
/// player is inserted), and orders names inside a tier bucket.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) player: Player,
    pub(crate) stamp: u64,
}

/// In-memory roster keyed by player name.
///
/// Players keep insertion order; a replace import clears everything, so
/// nothing is ever removed individually.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    pub(crate) entries: Vec<Entry>,
    pub(crate) index: HashMap<String, usize>,
    next_stamp: u64,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every player.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.index
            .get(name.trim())
            .map(|&idx| &self.entries[idx].player)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name.trim())
    }

    /// Players in insertion order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.entries.iter().map(|entry| &entry.player)
    }

    /// Distinct positions, sorted.
    pub fn positions(&self) -> Vec<&Position> {
        let mut positions: Vec<&Position> =
            self.entries.iter().map(|entry| &entry.player.position).collect();
        positions.sort();
        positions.dedup();
        positions
    }

    /// Assigns, moves, or clears (`None`) a player's tier.
    ///
    /// Setting the tier a player already has succeeds without changing
    /// its place in the bucket.
    pub fn set_tier(&mut self, name: &str, tier: Option<i64>) -> Result<()> {
        let idx = self.position_of(name)?;
        let tier = tier.map(Tier::try_from).transpose()?;
        if self.entries[idx].player.tier == tier {
            debug!(player = %self.entries[idx].player.name, "tier unchanged");
            return Ok(());
        }
        self.assign_tier(idx, tier);
        let player = &self.entries[idx].player;
        debug!(
            player = %player.name,
            position = %player.position,
            tier = ?player.tier.map(Tier::get),
            "tier set"
        );
        Ok(())
    }

    /// Flips the drafted flag and returns the new value. Tier is untouched.
    pub fn toggle_drafted(&mut self, name: &str) -> Result<bool> {
        let idx = self.position_of(name)?;
        let player = &mut self.entries[idx].player;
        player.drafted = !player.drafted;
        debug!(player = %player.name, drafted = player.drafted, "drafted toggled");
        Ok(player.drafted)
    }

    /// Sets the drafted flag explicitly. Returns whether it changed.
    pub fn set_drafted(&mut self, name: &str, drafted: bool) -> Result<bool> {
        let idx = self.position_of(name)?;
        let player = &mut self.entries[idx].player;
        let changed = player.drafted != drafted;
        player.drafted = drafted;
        debug!(player = %player.name, drafted, changed, "drafted set");
        Ok(changed)
    }

    pub(crate) fn position_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name.trim())
            .copied()
            .ok_or_else(|| BoardError::NotFound {
                name: name.trim().to_string(),
            })
    }

    pub(crate) fn assign_tier(&mut self, idx: usize, tier: Option<Tier>) {
        let stamp = self.bump_stamp();
        let entry = &mut self.entries[idx];
        entry.player.tier = tier;
        entry.stamp = stamp;
    }

    pub(crate) fn insert(&mut self, player: Player) -> usize {
        let stamp = self.bump_stamp();
        let idx = self.entries.len();
        self.index.insert(player.name.clone(), idx);
        self.entries.push(Entry { player, stamp });
        idx
    }

    fn bump_stamp(&mut self) -> u64 {
        self.next_stamp += 1;
        self.next_stamp
    }
}
