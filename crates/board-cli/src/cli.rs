//! CLI argument definitions for tierboard.

use std::path::PathBuf;

use board_ingest::{SourceKind, TextGrammar};
use board_output::ExportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tierboard",
    version,
    about = "Tier board for fantasy draft rankings",
    long_about = "Import player rankings, group them into position tiers, and track the draft.\n\n\
                  Reads CSV boards, JSON session files, and pasted ranking text.\n\
                  Exports CSV boards and JSON session files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a board, apply edits, render it, and optionally export it.
    Show(ShowArgs),

    /// Run an interactive session reading commands from stdin.
    Session(SessionArgs),

    /// Preview how a ranking text file is parsed.
    Parse(ParseArgs),
}

/// How input files are read.
#[derive(Args, Clone, Copy)]
pub struct SourceArgs {
    /// Input format (default: detect from the file extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<InputFormatArg>,

    /// Line grammar for ranking text.
    #[arg(long = "grammar", value_enum, default_value = "any")]
    pub grammar: GrammarArg,
}

impl SourceArgs {
    pub fn kind(&self) -> Option<SourceKind> {
        self.format.map(SourceKind::from)
    }

    pub fn grammar(&self) -> TextGrammar {
        self.grammar.into()
    }
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Board to load (replaces any prior state).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Additional rankings merged into the board, in order.
    #[arg(long = "merge", value_name = "INPUT")]
    pub merge: Vec<PathBuf>,

    /// Assign a tier, e.g. --tier "Josh Allen=1" (use =none to clear).
    #[arg(long = "tier", value_name = "NAME=TIER", value_parser = parse_tier_edit)]
    pub tier: Vec<TierEdit>,

    /// Mark a player as drafted.
    #[arg(long = "draft", value_name = "NAME")]
    pub draft: Vec<String>,

    /// Write the resulting board to this file.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format (default: detect from the export path).
    #[arg(long = "export-format", value_enum, requires = "export")]
    pub export_format: Option<ExportFormatArg>,

    /// List only undrafted players.
    #[arg(long = "available")]
    pub available: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Parser)]
pub struct SessionArgs {
    /// Board to load before reading commands.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Directory for relative export paths.
    #[arg(long = "export-dir", value_name = "DIR", env = "TIERBOARD_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Ranking text file.
    #[arg(value_name = "TEXTFILE")]
    pub file: PathBuf,

    /// Line grammar to match.
    #[arg(long = "grammar", value_enum, default_value = "any")]
    pub grammar: GrammarArg,
}

/// A `NAME=TIER` edit from the command line. `None` clears the tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierEdit {
    pub name: String,
    pub tier: Option<i64>,
}

/// Parses `NAME=TIER`, where TIER is an integer or `none`.
pub fn parse_tier_edit(value: &str) -> Result<TierEdit, String> {
    let (name, tier) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=TIER, got '{value}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing player name in '{value}'"));
    }
    let tier = tier.trim();
    let tier = if tier.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(
            tier.parse::<i64>()
                .map_err(|_| format!("tier must be a number or 'none', got '{tier}'"))?,
        )
    };
    Ok(TierEdit {
        name: name.to_string(),
        tier,
    })
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    Csv,
    Json,
    Text,
}

impl From<InputFormatArg> for SourceKind {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Csv => SourceKind::Csv,
            InputFormatArg::Json => SourceKind::SessionBlob,
            InputFormatArg::Text => SourceKind::Text,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GrammarArg {
    Basic,
    Extended,
    Any,
}

impl From<GrammarArg> for TextGrammar {
    fn from(arg: GrammarArg) -> Self {
        match arg {
            GrammarArg::Basic => TextGrammar::Basic,
            GrammarArg::Extended => TextGrammar::Extended,
            GrammarArg::Any => TextGrammar::Any,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Json => ExportFormat::Session,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
