//! Table rendering for boards, player lists, and import results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use board_core::RosterStore;
use board_ingest::{TextScan, UnmatchedLine};
use board_model::{Player, RowIssue, Tier, format_rank};

use crate::commands::ImportReport;

/// Position rows by tier columns; drafted players are prefixed with `x`.
pub fn tier_board_table(store: &RosterStore, position: Option<&str>) -> Table {
    let board = store.tiers_by_position();
    let mut table = Table::new();
    let mut header = vec![header_cell("Position")];
    header.extend(Tier::ALL.iter().map(|tier| header_cell(&format!("Tier {tier}"))));
    table.set_header(header);
    apply_table_style(&mut table);

    for (pos, buckets) in board.iter() {
        if position.is_some_and(|wanted| !wanted.eq_ignore_ascii_case(pos.as_str())) {
            continue;
        }
        let mut row = vec![position_cell(pos.as_str())];
        for (_, names) in buckets.iter() {
            row.push(bucket_cell(store, names));
        }
        table.add_row(row);
    }
    table
}

/// Players in the given order with rank, team, tier, and drafted flag.
pub fn player_table(players: &[&Player]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Name"),
        header_cell("Pos"),
        header_cell("Team"),
        header_cell("Tier"),
        header_cell("Drafted"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Center);

    for player in players {
        let name = if player.drafted {
            Cell::new(&player.name)
                .fg(Color::DarkGrey)
                .add_attribute(Attribute::CrossedOut)
        } else {
            Cell::new(&player.name)
        };
        table.add_row(vec![
            player
                .rank
                .map_or_else(|| dim_cell("-"), |rank| Cell::new(format_rank(rank))),
            name,
            position_cell(player.position.as_str()),
            text_or_dash(&player.team),
            player
                .tier
                .map_or_else(|| dim_cell("-"), tier_cell),
            if player.drafted {
                Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                dim_cell("-")
            },
        ]);
    }
    table
}

/// One-line import result, e.g. `board.csv (csv, replace): 4 inserted, ...`.
pub fn import_summary_line(report: &ImportReport) -> String {
    let summary = &report.summary;
    format!(
        "{} ({}, {}): {} inserted, {} updated, {} rejected, {} coerced, {} skipped",
        report.origin,
        report.kind,
        summary.mode,
        summary.inserted,
        summary.updated,
        summary.rejected_count(),
        summary.coerced_count(),
        report.skipped.len(),
    )
}

/// Rejected rows, coerced rows, and skipped text lines; `None` when clean.
pub fn import_issue_table(report: &ImportReport) -> Option<Table> {
    let summary = &report.summary;
    if !summary.has_issues() && report.skipped.is_empty() {
        return None;
    }

    let mut rows: Vec<(usize, Cell, String)> = Vec::new();
    rows.extend(summary.rejected.iter().map(|issue| {
        (issue.line, outcome_cell("REJECTED", Color::Red), issue_message(issue))
    }));
    rows.extend(summary.coerced.iter().map(|issue| {
        (issue.line, outcome_cell("COERCED", Color::Yellow), issue_message(issue))
    }));
    rows.extend(report.skipped.iter().map(|UnmatchedLine { line, text }| {
        (*line, outcome_cell("SKIPPED", Color::DarkGrey), text.clone())
    }));
    rows.sort_by_key(|(line, _, _)| *line);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Outcome"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (line, outcome, detail) in rows {
        table.add_row(vec![Cell::new(line), outcome, Cell::new(detail)]);
    }
    Some(table)
}

/// Recognized lines of a text scan with every captured field.
pub fn text_scan_table(scan: &TextScan) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Rank"),
        header_cell("Name"),
        header_cell("Team"),
        header_cell("Pos"),
        header_cell("Bye"),
        header_cell("Value"),
        header_cell("Tier"),
    ]);
    apply_table_style(&mut table);
    for column in [0, 1, 5, 6] {
        align_column(&mut table, column, CellAlignment::Right);
    }

    for entry in &scan.entries {
        table.add_row(vec![
            dim_cell(entry.line),
            Cell::new(entry.rank),
            Cell::new(&entry.name),
            Cell::new(&entry.team),
            position_cell(&entry.position),
            entry.bye.map_or_else(|| dim_cell("-"), Cell::new),
            entry
                .value
                .map_or_else(|| dim_cell("-"), |value| Cell::new(format!("${value}"))),
            entry
                .tier_letter
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn bucket_cell(store: &RosterStore, names: &[String]) -> Cell {
    if names.is_empty() {
        return dim_cell("-");
    }
    let lines: Vec<String> = names
        .iter()
        .map(|name| {
            if store.get(name).is_some_and(|player| player.drafted) {
                format!("x {name}")
            } else {
                name.clone()
            }
        })
        .collect();
    Cell::new(lines.join("\n"))
}

fn issue_message(issue: &RowIssue) -> String {
    if issue.name.is_empty() {
        issue.kind.to_string()
    } else {
        format!("{}: {}", issue.name, issue.kind)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn position_cell(position: &str) -> Cell {
    Cell::new(position)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn tier_cell(tier: Tier) -> Cell {
    let color = match tier.get() {
        1 => Color::Green,
        2 => Color::Cyan,
        3 => Color::Yellow,
        4 => Color::Magenta,
        _ => Color::Red,
    };
    Cell::new(tier).fg(color)
}

fn outcome_cell(label: &str, color: Color) -> Cell {
    Cell::new(label).fg(color).add_attribute(Attribute::Bold)
}

fn text_or_dash(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
