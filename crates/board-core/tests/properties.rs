//! Property tests for board invariants.

use board_core::RosterStore;
use board_model::{BoardError, ImportMode, RawRow, normalize_position};
use proptest::prelude::*;

const POSITIONS: [&str; 8] = ["QB", "RB2", "WR", "WR3", "TE", "K", "WR1 1", " te 2 "];

prop_compose! {
    fn arb_rows()(
        names in prop::collection::btree_set("[A-Z][a-z]{2,8} [A-Z][a-z]{2,10}", 1..25)
    )(
        attrs in prop::collection::vec(
            (
                0..POSITIONS.len(),
                "[A-Z]{2,3}",
                prop::option::of(1u32..400),
                0u8..=5,
                any::<bool>(),
            ),
            names.len(),
        ),
        names in Just(names),
    ) -> Vec<RawRow> {
        names
            .into_iter()
            .zip(attrs)
            .enumerate()
            .map(|(idx, (name, (position, team, rank, tier, drafted)))| {
                let mut row = RawRow::new(name, POSITIONS[position])
                    .with_team(team)
                    .with_tier(tier)
                    .with_drafted(drafted)
                    .at_line(idx + 1);
                if let Some(rank) = rank {
                    row = row.with_rank(f64::from(rank) / 4.0);
                }
                row
            })
            .collect()
    }
}

fn assert_view_consistent(store: &RosterStore) {
    let board = store.tiers_by_position();
    let mut tiered = 0;
    for player in store.players() {
        let located = board.locate(&player.name);
        match player.tier {
            Some(tier) => {
                tiered += 1;
                assert_eq!(located, Some((&player.position, tier)));
            }
            None => assert_eq!(located, None),
        }
        assert!(board.position(&player.position).is_some());
    }
    assert_eq!(board.tiered_count(), tiered);
}

proptest! {
    #[test]
    fn position_normalization_is_idempotent(raw in "[ A-Za-z0-9]{0,8}") {
        let once = normalize_position(&raw);
        prop_assert_eq!(normalize_position(&once), once.clone());
        prop_assert!(!once.ends_with(|c: char| c.is_ascii_digit() || c.is_whitespace()));
    }

    #[test]
    fn replace_import_of_export_round_trips(rows in arb_rows()) {
        let mut store = RosterStore::new();
        store.import_rows(&rows, ImportMode::Replace);

        let exported = store.export_rows();
        let raw: Vec<RawRow> = exported
            .iter()
            .enumerate()
            .map(|(idx, row)| row.to_raw(idx + 1))
            .collect();
        let mut restored = RosterStore::new();
        let summary = restored.import_rows(&raw, ImportMode::Replace);

        prop_assert!(!summary.has_issues());
        prop_assert_eq!(restored.len(), store.len());
        prop_assert_eq!(restored.export_rows(), exported);
    }

    #[test]
    fn tiers_stay_in_range(
        rows in arb_rows(),
        ops in prop::collection::vec((0usize..40, -2i64..9), 0..60),
    ) {
        let mut store = RosterStore::new();
        store.import_rows(&rows, ImportMode::Replace);
        let names: Vec<String> = store.players().map(|player| player.name.clone()).collect();

        for (pick, tier) in ops {
            let name = &names[pick % names.len()];
            let before = store.get(name).and_then(|player| player.tier);
            let result = store.set_tier(name, Some(tier));
            if (1..=5).contains(&tier) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(BoardError::InvalidTier { value: tier }));
                prop_assert_eq!(store.get(name).and_then(|player| player.tier), before);
            }
            for player in store.players() {
                if let Some(tier) = player.tier {
                    prop_assert!((1..=5).contains(&tier.get()));
                }
            }
        }
    }

    #[test]
    fn derived_view_matches_records(
        rows in arb_rows(),
        merge in arb_rows(),
        ops in prop::collection::vec((0usize..40, prop::option::of(1i64..=5)), 0..40),
    ) {
        let mut store = RosterStore::new();
        store.import_rows(&rows, ImportMode::Replace);
        assert_view_consistent(&store);

        let names: Vec<String> = store.players().map(|player| player.name.clone()).collect();
        for (pick, tier) in ops {
            store.set_tier(&names[pick % names.len()], tier).unwrap();
            assert_view_consistent(&store);
        }

        store.import_rows(&merge, ImportMode::Merge);
        assert_view_consistent(&store);
    }

    #[test]
    fn merge_without_tier_or_drafted_preserves_them(rows in arb_rows()) {
        let mut store = RosterStore::new();
        store.import_rows(&rows, ImportMode::Replace);
        let before: Vec<_> = store
            .players()
            .map(|player| (player.name.clone(), player.tier, player.drafted))
            .collect();

        let bare: Vec<RawRow> = rows
            .iter()
            .map(|row| RawRow::new(row.name.clone(), row.position.clone()).with_team("FA"))
            .collect();
        store.import_rows(&bare, ImportMode::Merge);

        for (name, tier, drafted) in before {
            let player = store.get(&name).unwrap();
            prop_assert_eq!(player.tier, tier);
            prop_assert_eq!(player.drafted, drafted);
            prop_assert_eq!(player.team.as_str(), "FA");
        }
    }
}
