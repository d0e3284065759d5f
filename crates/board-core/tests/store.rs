//! Integration tests for the roster store.

use board_core::RosterStore;
use board_model::{BoardError, BoardRow, ImportMode, RawRow, RowIssueKind, Tier};

fn row(name: &str, position: &str, team: &str, rank: u32) -> RawRow {
    RawRow::new(name, position).with_team(team).with_rank(rank)
}

fn quarterbacks() -> RosterStore {
    let mut store = RosterStore::new();
    let summary = store.import_rows(
        &[
            row("Josh Allen", "QB", "BUF", 1)
                .with_tier("")
                .with_drafted(false),
            row("Patrick Mahomes", "QB", "KC", 2)
                .with_tier("")
                .with_drafted(false),
        ],
        ImportMode::Replace,
    );
    assert_eq!(summary.inserted, 2);
    store
}

#[test]
fn test_tier_and_draft_scenario() {
    let mut store = quarterbacks();
    store.set_tier("Josh Allen", Some(1)).unwrap();

    let board = store.tiers_by_position();
    assert_eq!(board["QB"][1], ["Josh Allen"]);
    for tier in 2..=5 {
        assert!(board["QB"][tier].is_empty(), "tier {tier} should be empty");
    }

    store.toggle_drafted("Josh Allen").unwrap();
    let exported = store.export_rows();
    assert!(exported.contains(&BoardRow {
        name: "Josh Allen".to_string(),
        position: "QB".to_string(),
        team: "BUF".to_string(),
        rank: Some(1.0),
        tier: Tier::new(1),
        drafted: true,
    }));
}

#[test]
fn test_merge_preserves_tier_and_drafted() {
    let mut store = quarterbacks();
    store.set_tier("Josh Allen", Some(3)).unwrap();
    store.toggle_drafted("Josh Allen").unwrap();

    let summary = store.import_rows(
        &[RawRow::new("Josh Allen", "QB1").with_team("BUF")],
        ImportMode::Merge,
    );
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.inserted, 0);

    let player = store.get("Josh Allen").unwrap();
    assert_eq!(player.tier, Tier::new(3));
    assert!(player.drafted);
    assert_eq!(player.rank, Some(1.0));
}

#[test]
fn test_merge_keeps_players_missing_from_batch() {
    let mut store = quarterbacks();
    store.set_tier("Patrick Mahomes", Some(2)).unwrap();

    let summary = store.import_rows(
        &[row("Lamar Jackson", "QB", "BAL", 3)],
        ImportMode::Merge,
    );
    assert_eq!(summary.inserted, 1);
    assert_eq!(store.len(), 3);
    assert_eq!(store.get("Patrick Mahomes").unwrap().tier, Tier::new(2));
    let lamar = store.get("Lamar Jackson").unwrap();
    assert_eq!(lamar.tier, None);
    assert!(!lamar.drafted);
}

#[test]
fn test_merge_applies_supplied_tier_and_drafted() {
    let mut store = quarterbacks();
    store.import_rows(
        &[RawRow::new("Patrick Mahomes", "QB")
            .with_tier(4)
            .with_drafted("yes")],
        ImportMode::Merge,
    );
    let player = store.get("Patrick Mahomes").unwrap();
    assert_eq!(player.tier, Tier::new(4));
    assert!(player.drafted);
}

#[test]
fn test_replace_discards_previous_board() {
    let mut store = quarterbacks();
    store.set_tier("Josh Allen", Some(1)).unwrap();

    store.import_rows(&[row("CeeDee Lamb", "WR2", "DAL", 15)], ImportMode::Replace);
    assert_eq!(store.len(), 1);
    assert!(store.get("Josh Allen").is_none());
    let board = store.tiers_by_position();
    assert!(board.position("QB").is_none());
    assert!(board["WR"].is_empty());
}

#[test]
fn test_invalid_tier_rejected_and_prior_kept() {
    let mut store = quarterbacks();
    store.set_tier("Josh Allen", Some(2)).unwrap();
    assert_eq!(
        store.set_tier("Josh Allen", Some(7)),
        Err(BoardError::InvalidTier { value: 7 })
    );
    assert_eq!(
        store.set_tier("Josh Allen", Some(0)),
        Err(BoardError::InvalidTier { value: 0 })
    );
    assert_eq!(store.get("Josh Allen").unwrap().tier, Tier::new(2));
}

#[test]
fn test_unknown_player_operations() {
    let mut store = quarterbacks();
    let missing = BoardError::NotFound {
        name: "Tom Brady".to_string(),
    };
    assert_eq!(store.set_tier("Tom Brady", Some(1)), Err(missing.clone()));
    assert_eq!(store.toggle_drafted("Tom Brady"), Err(missing));
}

#[test]
fn test_single_tier_per_player() {
    let mut store = quarterbacks();
    store.set_tier("Josh Allen", Some(1)).unwrap();
    store.set_tier("Josh Allen", Some(4)).unwrap();
    let board = store.tiers_by_position();
    assert!(board["QB"][1].is_empty());
    assert_eq!(board["QB"][4], ["Josh Allen"]);
    assert_eq!(board.tiered_count(), 1);
}

#[test]
fn test_import_reports_every_problem() {
    let mut store = RosterStore::new();
    let summary = store.import_rows(
        &[
            RawRow::new("Josh Allen", "QB").with_tier(9).at_line(2),
            RawRow::new("", "QB").at_line(3),
            RawRow::new("Patrick Mahomes", "QB")
                .with_drafted("maybe")
                .at_line(4),
        ],
        ImportMode::Replace,
    );
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.rejected_count(), 1);
    assert_eq!(summary.coerced_count(), 2);
    let kinds: Vec<&RowIssueKind> = summary.issues().iter().map(|issue| &issue.kind).collect();
    assert_eq!(
        kinds,
        vec![
            &RowIssueKind::UnparseableTier {
                value: "9".to_string()
            },
            &RowIssueKind::EmptyName,
            &RowIssueKind::UnparseableDrafted {
                value: "maybe".to_string()
            },
        ]
    );
    assert_eq!(store.get("Josh Allen").unwrap().tier, None);
}

#[test]
fn test_export_round_trip() {
    let mut store = quarterbacks();
    store.import_rows(&[row("CeeDee Lamb", "WR2", "DAL", 15)], ImportMode::Merge);
    store.set_tier("CeeDee Lamb", Some(2)).unwrap();
    store.toggle_drafted("Patrick Mahomes").unwrap();

    let exported = store.export_rows();
    let raw: Vec<RawRow> = exported
        .iter()
        .enumerate()
        .map(|(idx, row)| row.to_raw(idx + 1))
        .collect();
    let mut restored = RosterStore::new();
    let summary = restored.import_rows(&raw, ImportMode::Replace);

    assert!(!summary.has_issues());
    assert_eq!(restored.export_rows(), exported);
    assert_eq!(
        restored.tiers_by_position(),
        store.tiers_by_position()
    );
}
