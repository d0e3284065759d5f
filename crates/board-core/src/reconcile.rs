//! Import reconciliation: applying raw rows to the store.

use board_model::{
    ImportMode, ImportSummary, Player, Position, RankValue, RawRow, RowIssue, RowIssueKind,
    TierValue, parse_drafted, parse_rank, parse_tier,
};
use tracing::{debug, info, warn};

use crate::store::RosterStore;

impl RosterStore {
    /// Imports a batch of raw rows.
    ///
    /// `Replace` clears the board first. `Merge` updates existing players
    /// with only the fields each row supplies and inserts the rest. A name
    /// repeated inside one batch updates the earlier record in both modes.
    pub fn import_rows(&mut self, rows: &[RawRow], mode: ImportMode) -> ImportSummary {
        let mut summary = ImportSummary::new(mode);
        if mode == ImportMode::Replace {
            debug!(previous = self.len(), "clearing board for replace import");
            self.clear();
        }

        for row in rows {
            let name = row.name.trim();
            if name.is_empty() {
                reject(&mut summary, row, RowIssueKind::EmptyName);
                continue;
            }
            match self.index.get(name).copied() {
                Some(idx) => {
                    self.update_player(idx, row, &mut summary);
                    summary.updated += 1;
                }
                None => {
                    let position = Position::new(&row.position);
                    if position.is_empty() {
                        reject(&mut summary, row, RowIssueKind::EmptyPosition);
                        continue;
                    }
                    self.insert_player(name, position, row, &mut summary);
                    summary.inserted += 1;
                }
            }
        }

        info!(
            mode = %mode,
            inserted = summary.inserted,
            updated = summary.updated,
            rejected = summary.rejected_count(),
            coerced = summary.coerced_count(),
            players = self.len(),
            "import complete"
        );
        summary
    }

    fn insert_player(
        &mut self,
        name: &str,
        position: Position,
        row: &RawRow,
        summary: &mut ImportSummary,
    ) {
        let mut player = Player::new(name, position);
        if let Some(team) = &row.team {
            player.team = team.trim().to_string();
        }
        if let Some(raw) = &row.rank {
            match parse_rank(raw) {
                RankValue::Value(rank) => player.rank = Some(rank),
                RankValue::Absent => {}
                RankValue::Unparseable => coerce(summary, row, rank_issue(raw)),
            }
        }
        if let Some(raw) = &row.tier {
            let value = parse_tier(raw);
            if value == TierValue::Unparseable {
                coerce(summary, row, tier_issue(raw));
            }
            player.tier = value.tier();
        }
        if let Some(raw) = &row.drafted {
            match parse_drafted(raw) {
                Some(drafted) => player.drafted = drafted,
                None => coerce(summary, row, drafted_issue(raw)),
            }
        }
        debug!(
            player = %player.name,
            position = %player.position,
            line = row.line,
            "player inserted"
        );
        self.insert(player);
    }

    fn update_player(&mut self, idx: usize, row: &RawRow, summary: &mut ImportSummary) {
        let position = Position::new(&row.position);
        let player = &mut self.entries[idx].player;
        if !position.is_empty() {
            player.position = position;
        }
        if let Some(team) = &row.team {
            player.team = team.trim().to_string();
        }
        if let Some(raw) = &row.rank {
            match parse_rank(raw) {
                RankValue::Value(rank) => player.rank = Some(rank),
                RankValue::Absent => player.rank = None,
                RankValue::Unparseable => coerce(summary, row, rank_issue(raw)),
            }
        }
        if let Some(raw) = &row.drafted {
            match parse_drafted(raw) {
                Some(drafted) => player.drafted = drafted,
                None => coerce(summary, row, drafted_issue(raw)),
            }
        }
        debug!(player = %player.name, line = row.line, "player updated");

        if let Some(raw) = &row.tier {
            let value = parse_tier(raw);
            if value == TierValue::Unparseable {
                coerce(summary, row, tier_issue(raw));
            }
            if self.entries[idx].player.tier != value.tier() {
                self.assign_tier(idx, value.tier());
            }
        }
    }
}

fn reject(summary: &mut ImportSummary, row: &RawRow, kind: RowIssueKind) {
    warn!(line = row.line, reason = %kind, "row rejected");
    summary.rejected.push(RowIssue {
        line: row.line,
        name: row.name.trim().to_string(),
        kind,
    });
}

fn coerce(summary: &mut ImportSummary, row: &RawRow, kind: RowIssueKind) {
    warn!(line = row.line, player = %row.name.trim(), reason = %kind, "row value coerced");
    summary.coerced.push(RowIssue {
        line: row.line,
        name: row.name.trim().to_string(),
        kind,
    });
}

fn tier_issue(raw: &str) -> RowIssueKind {
    RowIssueKind::UnparseableTier {
        value: raw.trim().to_string(),
    }
}

fn rank_issue(raw: &str) -> RowIssueKind {
    RowIssueKind::UnparseableRank {
        value: raw.trim().to_string(),
    }
}

fn drafted_issue(raw: &str) -> RowIssueKind {
    RowIssueKind::UnparseableDrafted {
        value: raw.trim().to_string(),
    }
}
