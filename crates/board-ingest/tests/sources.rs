//! Integration tests for the row sources.

use std::io::Write;

use board_ingest::{
    IngestError, PastedText, RowSource, SourceKind, TextGrammar, open_source, parse_board_csv,
};
use tempfile::{Builder, NamedTempFile};

fn temp_with_suffix(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn csv_file_source_reads_all_columns() {
    let file = temp_with_suffix(
        ".csv",
        "\u{feff}Rank,Name,Team,Position,Tier,Drafted,Notes\n\
         1,Josh Allen,BUF,QB,1,yes,elite\n\
         2, Patrick Mahomes ,KC,QB2,,no,\n",
    );
    let batch = open_source(file.path(), None, TextGrammar::Any)
        .read_rows()
        .unwrap();

    assert_eq!(batch.kind, SourceKind::Csv);
    assert_eq!(batch.len(), 2);
    let allen = &batch.rows[0];
    assert_eq!(allen.rank.as_deref(), Some("1"));
    assert_eq!(allen.tier.as_deref(), Some("1"));
    assert_eq!(allen.drafted.as_deref(), Some("yes"));
    let mahomes = &batch.rows[1];
    assert_eq!(mahomes.name, "Patrick Mahomes");
    assert_eq!(mahomes.position, "QB2");
    assert_eq!(mahomes.tier, None);
}

#[test]
fn csv_missing_position_names_it() {
    let err = parse_board_csv("Name,Team\nJosh Allen,BUF\n".as_bytes(), "board.csv").unwrap_err();
    match err {
        IngestError::MissingRequiredColumn { columns, origin } => {
            assert_eq!(columns, vec!["Position"]);
            assert_eq!(origin, "board.csv");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn csv_missing_both_columns_names_both() {
    let err = parse_board_csv("Player,Pos\nJosh Allen,QB\n".as_bytes(), "board.csv").unwrap_err();
    assert_eq!(
        err.to_string(),
        "rejected batch: missing required column(s) Name, Position in board.csv"
    );
}

#[test]
fn session_file_source_restores_rows() {
    let file = temp_with_suffix(
        ".json",
        r#"{"version": 1, "players": [
            {"Name": "Josh Allen", "Position": "QB", "Team": "BUF", "Rank": 1, "Tier": 1, "Drafted": false}
        ]}"#,
    );
    let source = open_source(file.path(), None, TextGrammar::Any);
    assert!(source.kind().restores_session());
    let batch = source.read_rows().unwrap();
    assert_eq!(batch.rows[0].tier.as_deref(), Some("1"));
    assert_eq!(batch.rows[0].team.as_deref(), Some("BUF"));
}

#[test]
fn text_grammar_scenario() {
    let batch = PastedText::new("WIDE RECEIVERS\n15. CeeDee Lamb DAL WR2\n", TextGrammar::Any)
        .read_rows()
        .unwrap();

    assert_eq!(batch.len(), 1);
    let row = &batch.rows[0];
    assert_eq!(row.rank.as_deref(), Some("15"));
    assert_eq!(row.name, "CeeDee Lamb");
    assert_eq!(row.team.as_deref(), Some("DAL"));
    assert_eq!(row.position, "WR");
    assert!(batch.skipped.is_empty());
}

#[test]
fn text_file_source_uses_grammar() {
    let file = temp_with_suffix(".txt", "1 Josh Allen BUF QB 7 $45 A\n");
    let basic = open_source(file.path(), None, TextGrammar::Basic);
    assert!(matches!(
        basic.read_rows(),
        Err(IngestError::NoRowsMatched { skipped: 1 })
    ));

    let extended = open_source(file.path(), None, TextGrammar::Extended);
    let batch = extended.read_rows().unwrap();
    assert_eq!(batch.rows[0].tier.as_deref(), Some("1"));
}

#[test]
fn missing_file_is_reported() {
    let source = open_source(
        std::path::Path::new("/nonexistent/board.csv"),
        None,
        TextGrammar::Any,
    );
    assert!(matches!(
        source.read_rows(),
        Err(IngestError::FileNotFound { .. })
    ));
}
