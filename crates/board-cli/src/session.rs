//! Interactive session: one command per line over any reader/writer pair.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, error};

use board_core::RosterStore;
use board_ingest::{PastedText, SourceKind, TextGrammar};
use board_model::ImportMode;
use board_output::ExportFormat;

use crate::commands::{ImportReport, export_store, import_path, import_source, write_import_report};
use crate::summary::{player_table, tier_board_table};

const HELP: &str = "\
commands:
  load <file>              replace the board with a CSV, session, or text file
  merge <file>             merge a file into the board
  paste [merge|replace]    read ranking text until a line with a single '.'
  tier <name> <1-5>        assign a tier
  untier <name>            clear a tier
  draft <name>             mark drafted
  undraft <name>           mark available
  toggle <name>            flip the drafted flag
  board [position]         show the tier board
  list                     all players by rank
  available                undrafted players by rank
  drafted                  drafted players by rank
  export <file> [csv|json] write the board
  help                     this text
  quit                     leave the session";

/// Line that ends a `paste` block.
const PASTE_TERMINATOR: &str = ".";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Load(PathBuf),
    Merge(PathBuf),
    Paste(ImportMode),
    Tier { name: String, tier: i64 },
    Untier(String),
    Draft(String),
    Undraft(String),
    Toggle(String),
    Board(Option<String>),
    List,
    Available,
    Drafted,
    Export {
        path: PathBuf,
        format: Option<ExportFormat>,
    },
    Help,
    Quit,
}

/// A line that could not be read as a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("tier must be a number, got '{0}'")]
    InvalidTier(String),

    #[error("{0}")]
    InvalidMode(String),
}

impl SessionCommand {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let required = |usage: &'static str| {
            if rest.is_empty() {
                Err(CommandError::Usage(usage))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "load" => Self::Load(required("load <file>")?.into()),
            "merge" => Self::Merge(required("merge <file>")?.into()),
            "paste" => Self::Paste(if rest.is_empty() {
                ImportMode::Merge
            } else {
                rest.parse().map_err(CommandError::InvalidMode)?
            }),
            "tier" => {
                let (name, tier) = rest
                    .rsplit_once(char::is_whitespace)
                    .ok_or(CommandError::Usage("tier <name> <1-5>"))?;
                let tier = tier
                    .parse()
                    .map_err(|_| CommandError::InvalidTier(tier.to_string()))?;
                Self::Tier {
                    name: name.trim().to_string(),
                    tier,
                }
            }
            "untier" => Self::Untier(required("untier <name>")?),
            "draft" => Self::Draft(required("draft <name>")?),
            "undraft" => Self::Undraft(required("undraft <name>")?),
            "toggle" => Self::Toggle(required("toggle <name>")?),
            "board" => Self::Board((!rest.is_empty()).then(|| rest.to_string())),
            "list" => Self::List,
            "available" => Self::Available,
            "drafted" => Self::Drafted,
            "export" => {
                let rest = required("export <file> [csv|json]")?;
                match rest.rsplit_once(char::is_whitespace) {
                    Some((path, format)) => match format.parse::<ExportFormat>() {
                        Ok(format) => Self::Export {
                            path: path.trim().into(),
                            format: Some(format),
                        },
                        Err(_) => Self::Export {
                            path: rest.into(),
                            format: None,
                        },
                    },
                    None => Self::Export {
                        path: rest.into(),
                        format: None,
                    },
                }
            }
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Whether the session keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the store for the lifetime of an interactive session.
pub struct Session {
    store: RosterStore,
    grammar: TextGrammar,
    /// Format override for the main input only.
    kind: Option<SourceKind>,
    export_dir: Option<PathBuf>,
}

impl Session {
    pub fn new(grammar: TextGrammar, kind: Option<SourceKind>, export_dir: Option<PathBuf>) -> Self {
        Self {
            store: RosterStore::new(),
            grammar,
            kind,
            export_dir,
        }
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    /// Replaces the board with the session's main input, honoring the
    /// `--format` override.
    pub fn load_input(&mut self, path: &Path) -> Result<ImportReport> {
        import_path(&mut self.store, path, self.kind, self.grammar, ImportMode::Replace)
    }

    /// Imports a file named in a session command; its kind comes from the
    /// extension.
    pub fn load(&mut self, path: &Path, mode: ImportMode) -> Result<ImportReport> {
        import_path(&mut self.store, path, None, self.grammar, mode)
    }

    /// Relative export paths land in the configured export directory.
    pub fn export_path(&self, path: &Path) -> PathBuf {
        match &self.export_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Reads commands until `quit` or end of input. Command failures are
    /// reported and the session continues.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        writeln!(out, "tierboard session; type 'help' for commands")?;
        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let command = match SessionCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(out, "error: {err}")?;
                    continue;
                }
            };
            debug!(?command, "session command");
            match self.execute(command, &mut input, &mut out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => {
                    error!("{err:#}");
                    writeln!(out, "error: {err:#}")?;
                }
            }
        }
        Ok(())
    }

    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: SessionCommand,
        input: &mut R,
        out: &mut W,
    ) -> Result<Flow> {
        match command {
            SessionCommand::Load(path) => {
                let report = self.load(&path, ImportMode::Replace)?;
                write_import_report(out, &report)?;
            }
            SessionCommand::Merge(path) => {
                let report = self.load(&path, ImportMode::Merge)?;
                write_import_report(out, &report)?;
            }
            SessionCommand::Paste(mode) => {
                let text = read_paste_block(input)?;
                let source = PastedText::new(text, self.grammar);
                let report = import_source(&mut self.store, &source, mode)?;
                write_import_report(out, &report)?;
            }
            SessionCommand::Tier { name, tier } => {
                let name = self.resolve(&name);
                self.store.set_tier(&name, Some(tier))?;
                writeln!(out, "{name}: tier {tier}")?;
            }
            SessionCommand::Untier(name) => {
                let name = self.resolve(&name);
                self.store.set_tier(&name, None)?;
                writeln!(out, "{name}: no tier")?;
            }
            SessionCommand::Draft(name) => {
                let name = self.resolve(&name);
                let changed = self.store.set_drafted(&name, true)?;
                let note = if changed { "drafted" } else { "already drafted" };
                writeln!(out, "{name}: {note}")?;
            }
            SessionCommand::Undraft(name) => {
                let name = self.resolve(&name);
                let changed = self.store.set_drafted(&name, false)?;
                let note = if changed { "available" } else { "already available" };
                writeln!(out, "{name}: {note}")?;
            }
            SessionCommand::Toggle(name) => {
                let name = self.resolve(&name);
                let drafted = self.store.toggle_drafted(&name)?;
                let note = if drafted { "drafted" } else { "available" };
                writeln!(out, "{name}: {note}")?;
            }
            SessionCommand::Board(position) => {
                if self.store.is_empty() {
                    writeln!(out, "board is empty")?;
                } else {
                    writeln!(out, "{}", tier_board_table(&self.store, position.as_deref()))?;
                }
            }
            SessionCommand::List => {
                writeln!(out, "{}", player_table(&self.store.players_by_rank()))?;
            }
            SessionCommand::Available => {
                writeln!(out, "{}", player_table(&self.store.available()))?;
            }
            SessionCommand::Drafted => {
                writeln!(out, "{}", player_table(&self.store.drafted()))?;
            }
            SessionCommand::Export { path, format } => {
                let path = self.export_path(&path);
                let format = export_store(&self.store, &path, format)?;
                writeln!(
                    out,
                    "exported {} players to {} ({format})",
                    self.store.len(),
                    path.display()
                )?;
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Exact name when known, otherwise the single case-insensitive match.
    fn resolve(&self, name: &str) -> String {
        let name = name.trim();
        if self.store.contains(name) {
            return name.to_string();
        }
        let mut matches = self
            .store
            .players()
            .filter(|player| player.name.eq_ignore_ascii_case(name));
        match (matches.next(), matches.next()) {
            (Some(player), None) => player.name.clone(),
            _ => name.to_string(),
        }
    }
}

/// Collects lines up to the terminator line or end of input.
fn read_paste_block<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut text = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 || line.trim() == PASTE_TERMINATOR {
            break;
        }
        text.push_str(&line);
    }
    Ok(text)
}
