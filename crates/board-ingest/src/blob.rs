//! Session blob reading.

use std::path::Path;

use board_model::{RawRow, SESSION_VERSION};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::batch::{RowBatch, SourceKind};
use crate::error::{IngestError, Result};
use crate::file::read_utf8;

/// Envelope of a session file. Records stay loosely typed so a bad cell is
/// coerced by the store instead of failing the whole file.
#[derive(Debug, Deserialize)]
struct BlobFile {
    version: u32,
    #[serde(default)]
    saved_at: Option<Value>,
    #[serde(default)]
    players: Vec<BlobRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BlobRecord {
    #[serde(rename = "Name")]
    name: Value,
    #[serde(rename = "Position")]
    position: Value,
    #[serde(rename = "Team")]
    team: Value,
    #[serde(rename = "Rank")]
    rank: Value,
    #[serde(rename = "Tier")]
    tier: Value,
    #[serde(rename = "Drafted")]
    drafted: Value,
}

impl BlobRecord {
    /// Every record supplies team and drafted, so a replace import restores
    /// the saved state exactly.
    fn to_raw(&self, line: usize) -> RawRow {
        RawRow {
            line,
            name: cell_text(&self.name).unwrap_or_default(),
            position: cell_text(&self.position).unwrap_or_default(),
            team: Some(cell_text(&self.team).unwrap_or_default()),
            rank: cell_text(&self.rank),
            tier: cell_text(&self.tier),
            drafted: Some(cell_text(&self.drafted).unwrap_or_else(|| "false".to_string())),
        }
    }
}

/// JSON value as cell text; `null` means not supplied.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Reads a session blob file into a row batch.
pub fn read_session_blob(path: &Path) -> Result<RowBatch> {
    let text = read_utf8(path)?;
    parse_session_blob(&text, &path.display().to_string())
}

/// Parses a session blob.
///
/// Only the envelope is strict: malformed JSON or a newer version fails the
/// file. Out-of-range or mistyped cells reach the store as raw text.
pub fn parse_session_blob(json: &str, origin: &str) -> Result<RowBatch> {
    let blob: BlobFile = serde_json::from_str(json).map_err(|e| IngestError::SessionFormat {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;

    if blob.version > SESSION_VERSION {
        return Err(IngestError::UnsupportedVersion {
            found: blob.version,
            max_supported: SESSION_VERSION,
        });
    }

    let mut batch = RowBatch::new(SourceKind::SessionBlob, origin);
    batch.rows = blob
        .players
        .iter()
        .enumerate()
        .map(|(idx, record)| record.to_raw(idx + 1))
        .collect();
    debug!(
        origin,
        rows = batch.len(),
        saved_at = ?blob.saved_at,
        "read session blob"
    );
    Ok(batch)
}
