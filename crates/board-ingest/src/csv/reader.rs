//! Structured CSV board reading.

use std::io::Read;
use std::path::Path;

use board_model::RawRow;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use super::header::BoardColumns;
use crate::batch::{RowBatch, SourceKind};
use crate::error::{IngestError, Result};
use crate::file::read_utf8;

/// Reads a CSV board file into a row batch.
pub fn read_board_csv(path: &Path) -> Result<RowBatch> {
    let text = read_utf8(path)?;
    parse_board_csv(text.as_bytes(), &path.display().to_string())
}

/// Parses CSV board data from any reader.
///
/// The header row must carry `Name` and `Position`; `Team`, `Rank`, `Tier`,
/// and `Drafted` are optional. Empty cells are treated as not supplied and
/// blank records are skipped.
pub fn parse_board_csv<R: Read>(input: R, origin: &str) -> Result<RowBatch> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let csv_error = |e: csv::Error| IngestError::CsvParse {
        origin: origin.to_string(),
        message: e.to_string(),
    };

    let headers = reader.headers().map_err(csv_error)?.clone();
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(IngestError::EmptyCsv {
            origin: origin.to_string(),
        });
    }

    let columns = BoardColumns::locate(headers.iter()).map_err(|missing| {
        warn!(origin, missing = ?missing, "CSV rejected: required columns missing");
        IngestError::MissingRequiredColumn {
            columns: missing.into_iter().map(String::from).collect(),
            origin: origin.to_string(),
        }
    })?;

    let mut batch = RowBatch::new(SourceKind::Csv, origin);
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record
            .position()
            .and_then(|pos| usize::try_from(pos.line()).ok())
            .unwrap_or(idx + 2);
        batch.rows.push(raw_row(&columns, &record, line));
    }

    debug!(origin, rows = batch.len(), "read CSV board");
    Ok(batch)
}

fn raw_row(columns: &BoardColumns, record: &StringRecord, line: usize) -> RawRow {
    let supplied = |index: Option<usize>| {
        index
            .and_then(|idx| record.get(idx))
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
    };

    RawRow {
        line,
        name: record.get(columns.name).unwrap_or_default().to_string(),
        position: record.get(columns.position).unwrap_or_default().to_string(),
        team: supplied(columns.team),
        rank: supplied(columns.rank),
        tier: supplied(columns.tier),
        drafted: supplied(columns.drafted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_board() {
        let batch = parse_board_csv("Name,Position\nJosh Allen,QB\n".as_bytes(), "t.csv").unwrap();
        assert_eq!(batch.len(), 1);
        let row = &batch.rows[0];
        assert_eq!(row.line, 2);
        assert_eq!(row.name, "Josh Allen");
        assert_eq!(row.team, None);
        assert_eq!(row.tier, None);
    }

    #[test]
    fn test_parse_empty_cells_not_supplied() {
        let csv = "Name,Position,Team,Rank,Tier,Drafted\nCeeDee Lamb,WR,DAL,,2,\n";
        let batch = parse_board_csv(csv.as_bytes(), "t.csv").unwrap();
        let row = &batch.rows[0];
        assert_eq!(row.team.as_deref(), Some("DAL"));
        assert_eq!(row.rank, None);
        assert_eq!(row.tier.as_deref(), Some("2"));
        assert_eq!(row.drafted, None);
    }

    #[test]
    fn test_parse_short_record_is_flexible() {
        let csv = "Name,Position,Team,Tier\nJosh Allen,QB\n";
        let batch = parse_board_csv(csv.as_bytes(), "t.csv").unwrap();
        assert_eq!(batch.rows[0].team, None);
        assert_eq!(batch.rows[0].tier, None);
    }

    #[test]
    fn test_parse_skips_blank_records() {
        let csv = "Name,Position\nJosh Allen,QB\n,\nJalen Hurts,QB\n";
        let batch = parse_board_csv(csv.as_bytes(), "t.csv").unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.rows[1].line, 4);
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse_board_csv("".as_bytes(), "t.csv").unwrap_err();
        assert!(matches!(err, IngestError::EmptyCsv { .. }));
    }

    #[test]
    fn test_parse_missing_position_column() {
        let err = parse_board_csv("Name,Team\nJosh Allen,BUF\n".as_bytes(), "t.csv").unwrap_err();
        match err {
            IngestError::MissingRequiredColumn { columns, .. } => {
                assert_eq!(columns, vec!["Position"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
