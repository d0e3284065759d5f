//! Session blob export.

use std::io::Write;
use std::path::Path;

use board_model::{BoardRow, SessionBlob};

use crate::atomic::write_atomic;
use crate::error::{OutputError, Result};

/// Writes rows as a pretty-printed session blob stamped with the current time.
pub fn write_session_blob<W: Write>(rows: &[BoardRow], mut writer: W) -> Result<()> {
    let blob = SessionBlob::new(rows.to_vec());
    serde_json::to_writer_pretty(&mut writer, &blob)?;
    writer.write_all(b"\n").map_err(|e| OutputError::Io {
        operation: "write",
        path: "<session>".into(),
        source: e,
    })
}

/// Exports rows to a session blob file.
pub fn export_session(rows: &[BoardRow], path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    write_session_blob(rows, &mut buffer)?;
    write_atomic(path, &buffer)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "exported session");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_model::SESSION_VERSION;

    #[test]
    fn test_session_blob_shape() {
        let rows = vec![BoardRow {
            name: "Josh Allen".to_string(),
            position: "QB".to_string(),
            team: "BUF".to_string(),
            rank: None,
            tier: None,
            drafted: false,
        }];
        let mut buffer = Vec::new();
        write_session_blob(&rows, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["version"], SESSION_VERSION);
        assert!(value["saved_at"].is_string());
        assert_eq!(value["players"][0]["Name"], "Josh Allen");
        assert!(value["players"][0]["Tier"].is_null());
    }
}
