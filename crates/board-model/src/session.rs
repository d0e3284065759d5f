//! Session blob: the structured full-state export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::row::BoardRow;

/// Current session blob schema version.
pub const SESSION_VERSION: u32 = 1;

/// Every player with its tier and drafted state, for a full session restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionBlob {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    pub players: Vec<BoardRow>,
}

impl SessionBlob {
    /// Wraps export rows, stamped with the current time.
    pub fn new(players: Vec<BoardRow>) -> Self {
        Self {
            version: SESSION_VERSION,
            saved_at: Some(Utc::now()),
            players,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::Tier;

    #[test]
    fn test_blob_without_timestamp_parses() {
        let json = r#"{"version": 1, "players": [{"Name": "Josh Allen", "Position": "QB", "Tier": 1, "Drafted": true}]}"#;
        let blob: SessionBlob = serde_json::from_str(json).unwrap();
        assert_eq!(blob.saved_at, None);
        assert_eq!(blob.players[0].tier.map(Tier::get), Some(1));
        assert!(blob.players[0].drafted);
    }

    #[test]
    fn test_new_blob_is_current_version() {
        let blob = SessionBlob::new(Vec::new());
        assert_eq!(blob.version, SESSION_VERSION);
        assert!(blob.saved_at.is_some());
    }
}
