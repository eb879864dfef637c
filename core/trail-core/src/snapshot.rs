//! Opaque snapshot encoding for persistence collaborators.
//!
//! The tracker hands out a [`TrackerSnapshot`] and takes one back; where the
//! encoded blob lives (editor global state, a key-value store) is the
//! caller's business.
//!
//! # Defensive Design
//!
//! Persisted blobs outlive the code that wrote them, so decoding handles:
//! - Empty input (empty snapshot)
//! - Corrupt JSON (empty snapshot, logged warning)
//! - A version newer than this build understands (empty snapshot, logged
//!   warning - guessing at a future format risks misreading it)
//! - Missing fields (serde defaults)

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, TrailError};
use crate::types::FileRecord;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Full tracker state as an exchangeable value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerSnapshot {
    /// Format version for forward compatibility.
    #[serde(default)]
    pub version: u32,
    /// Tracked files, front of the list most recent.
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

impl Default for TrackerSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl TrackerSnapshot {
    /// A current-version snapshot of nothing.
    pub fn empty() -> Self {
        TrackerSnapshot {
            version: SNAPSHOT_VERSION,
            files: Vec::new(),
        }
    }

    /// Encodes to a JSON blob for the caller's blob store.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TrailError::Json {
            context: "Failed to serialize snapshot".to_string(),
            source: e,
        })
    }

    /// Decodes a previously encoded blob.
    ///
    /// Never fails: anything unreadable degrades to an empty snapshot so a
    /// bad persisted blob costs the user their history, not their session.
    pub fn decode(content: &str) -> Self {
        if content.trim().is_empty() {
            return Self::empty();
        }

        match serde_json::from_str::<TrackerSnapshot>(content) {
            Ok(snapshot) if snapshot.version <= SNAPSHOT_VERSION => snapshot,
            Ok(snapshot) => {
                warn!(
                    version = snapshot.version,
                    "snapshot from a newer format, starting empty"
                );
                Self::empty()
            }
            Err(e) => {
                warn!(error = %e, "failed to parse snapshot, starting empty");
                Self::empty()
            }
        }
    }
}
