use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use board_core::RosterStore;
use board_ingest::{
    IngestError, RowBatch, RowSource, SourceKind, TextGrammar, UnmatchedLine, open_source,
    read_utf8, scan_pasted_text,
};
use board_model::{ImportMode, ImportSummary};
use board_output::{ExportFormat, export_board};

use crate::cli::{ParseArgs, SessionArgs, ShowArgs};
use crate::session::Session;
use crate::summary::{
    import_issue_table, import_summary_line, player_table, text_scan_table, tier_board_table,
};

/// What one import did to the board.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub origin: String,
    pub kind: SourceKind,
    pub summary: ImportSummary,
    /// Text lines that started with a rank but matched no grammar.
    pub skipped: Vec<UnmatchedLine>,
}

/// Applies a batch to the store. Session blobs always replace the board.
pub fn import_batch(store: &mut RosterStore, batch: RowBatch, mode: ImportMode) -> ImportReport {
    let mode = if batch.kind.restores_session() && mode != ImportMode::Replace {
        info!(origin = %batch.origin, "session files replace the board");
        ImportMode::Replace
    } else {
        mode
    };
    let summary = store.import_rows(&batch.rows, mode);
    ImportReport {
        origin: batch.origin,
        kind: batch.kind,
        summary,
        skipped: batch.skipped,
    }
}

/// Reads a source and applies it to the store.
pub fn import_source(
    store: &mut RosterStore,
    source: &dyn RowSource,
    mode: ImportMode,
) -> std::result::Result<ImportReport, IngestError> {
    let batch = source.read_rows()?;
    Ok(import_batch(store, batch, mode))
}

/// Opens `path` and applies it to the store.
pub fn import_path(
    store: &mut RosterStore,
    path: &Path,
    kind: Option<SourceKind>,
    grammar: TextGrammar,
    mode: ImportMode,
) -> Result<ImportReport> {
    let source = open_source(path, kind, grammar);
    import_source(store, source.as_ref(), mode)
        .with_context(|| format!("{mode} import of {}", path.display()))
}

/// Writes the one-line summary and, when needed, the issue table.
pub fn write_import_report<W: Write>(out: &mut W, report: &ImportReport) -> io::Result<()> {
    writeln!(out, "{}", import_summary_line(report))?;
    if let Some(table) = import_issue_table(report) {
        writeln!(out, "{table}")?;
    }
    Ok(())
}

/// Exports the board, inferring the format from the path when not given.
pub fn export_store(
    store: &RosterStore,
    path: &Path,
    format: Option<ExportFormat>,
) -> Result<ExportFormat> {
    let format = match format {
        Some(format) => format,
        None => ExportFormat::from_path(path)?,
    };
    export_board(&store.export_rows(), path, format)
        .with_context(|| format!("export to {}", path.display()))?;
    Ok(format)
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let span = info_span!("show", input = %args.input.display());
    let _guard = span.enter();
    let kind = args.source.kind();
    let grammar = args.source.grammar();
    let mut out = io::stdout().lock();

    let mut store = RosterStore::new();
    let report = import_path(&mut store, &args.input, kind, grammar, ImportMode::Replace)?;
    write_import_report(&mut out, &report)?;
    for path in &args.merge {
        let report = import_path(&mut store, path, None, grammar, ImportMode::Merge)?;
        write_import_report(&mut out, &report)?;
    }

    for edit in &args.tier {
        store
            .set_tier(&edit.name, edit.tier)
            .with_context(|| format!("set tier for {}", edit.name))?;
    }
    for name in &args.draft {
        store
            .set_drafted(name, true)
            .with_context(|| format!("draft {name}"))?;
    }
    debug!(
        tiers = args.tier.len(),
        drafted = args.draft.len(),
        "applied edits"
    );

    writeln!(out, "{}", tier_board_table(&store, None))?;
    let players = if args.available {
        store.available()
    } else {
        store.players_by_rank()
    };
    writeln!(out, "{}", player_table(&players))?;

    if let Some(path) = &args.export {
        let format = export_store(&store, path, args.export_format.map(Into::into))?;
        writeln!(
            out,
            "Exported {} players to {} ({format})",
            store.len(),
            path.display()
        )?;
    }
    Ok(())
}

pub fn run_parse(args: &ParseArgs) -> Result<()> {
    let text = read_utf8(&args.file)?;
    let scan = scan_pasted_text(&text, args.grammar.into());
    let mut out = io::stdout().lock();

    if !scan.entries.is_empty() {
        writeln!(out, "{}", text_scan_table(&scan))?;
    }
    for UnmatchedLine { line, text } in &scan.unmatched {
        writeln!(out, "unmatched line {line}: {text}")?;
    }
    writeln!(
        out,
        "{} matched, {} unmatched, {} ignored",
        scan.entries.len(),
        scan.unmatched.len(),
        scan.ignored
    )?;

    if scan.entries.is_empty() {
        bail!(IngestError::NoRowsMatched {
            skipped: scan.skipped_count()
        });
    }
    Ok(())
}

pub fn run_session(args: &SessionArgs) -> Result<()> {
    let mut session = Session::new(
        args.source.grammar(),
        args.source.kind(),
        args.export_dir.clone(),
    );
    let mut out = io::stdout().lock();
    if let Some(input) = &args.input {
        let report = session.load_input(input)?;
        write_import_report(&mut out, &report)?;
    }
    session.run(io::stdin().lock(), out)?;
    Ok(())
}
