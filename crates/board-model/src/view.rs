//! The derived position × tier view.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::Serialize;

use crate::position::Position;
use crate::tier::Tier;

/// Names per tier for one position, in assignment order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TierBuckets {
    buckets: [Vec<String>; 5],
}

impl TierBuckets {
    pub fn tier(&self, tier: Tier) -> &[String] {
        &self.buckets[tier.index()]
    }

    pub fn push(&mut self, tier: Tier, name: impl Into<String>) {
        self.buckets[tier.index()].push(name.into());
    }

    /// Iterates all five tiers, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &[String])> {
        Tier::ALL
            .into_iter()
            .map(move |tier| (tier, self.tier(tier)))
    }

    /// Number of tiered names across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

/// Indexes by tier number. Panics outside 1..=5, like slice indexing.
impl Index<u8> for TierBuckets {
    type Output = [String];

    fn index(&self, tier: u8) -> &[String] {
        match Tier::new(tier) {
            Some(tier) => self.tier(tier),
            None => panic!("tier {tier} out of range 1..=5"),
        }
    }
}

/// Every known position with its five tier buckets.
///
/// Positions without any tiered player are still present with empty buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TierBoard {
    positions: BTreeMap<Position, TierBuckets>,
}

impl TierBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a position with empty buckets if it is not present yet.
    pub fn ensure_position(&mut self, position: &Position) -> &mut TierBuckets {
        self.positions.entry(position.clone()).or_default()
    }

    pub fn place(&mut self, position: &Position, tier: Tier, name: impl Into<String>) {
        self.ensure_position(position).push(tier, name);
    }

    pub fn position(&self, position: &str) -> Option<&TierBuckets> {
        self.positions.get(position)
    }

    /// Names in one bucket; empty for unknown positions.
    pub fn bucket(&self, position: &str, tier: Tier) -> &[String] {
        self.positions
            .get(position)
            .map(|buckets| buckets.tier(tier))
            .unwrap_or(&[])
    }

    /// Finds the bucket holding `name`.
    pub fn locate(&self, name: &str) -> Option<(&Position, Tier)> {
        self.positions.iter().find_map(|(position, buckets)| {
            buckets
                .iter()
                .find(|(_, names)| names.iter().any(|candidate| candidate == name))
                .map(|(tier, _)| (position, tier))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &TierBuckets)> {
        self.positions.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.keys()
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of tiered names on the whole board.
    pub fn tiered_count(&self) -> usize {
        self.positions.values().map(TierBuckets::len).sum()
    }
}

/// Indexes by position code. Panics for unknown positions, like map indexing.
impl Index<&str> for TierBoard {
    type Output = TierBuckets;

    fn index(&self, position: &str) -> &TierBuckets {
        match self.positions.get(position) {
            Some(buckets) => buckets,
            None => panic!("position {position} not on the board"),
        }
    }
}
