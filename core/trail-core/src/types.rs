//! Core model types for the activity trail.
//!
//! These types are what the presentation layer reads and what snapshots
//! serialize.
//!
//! Uses `#[serde(default)]` for forward compatibility - if future versions
//! add fields, old data will still parse correctly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A merged region of recent activity within a file, anchored at its
/// earliest touched line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Area {
    /// Earliest (smallest) zero-based line seen for this region. Only ever
    /// moves toward the file start as nearby activity merges in.
    #[serde(default)]
    pub line: u32,
    /// Preview of the source lines around `line`, rebuilt whenever the
    /// anchor moves. May span several lines; see [`crate::area_label`] for
    /// the single-line form.
    #[serde(default)]
    pub snippet: String,
    /// True once any edit (not just a selection) touched this region.
    #[serde(default)]
    pub edited: bool,
    /// Recency stamp, used only for ordering and eviction.
    #[serde(default)]
    pub last_touched: DateTime<Utc>,
}

/// Per-file container of areas plus file-level recency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FileRecord {
    /// Opaque stable identifier for the file (its location as the host
    /// reports it).
    #[serde(default)]
    pub file_id: String,
    /// Tracked areas. Bounded by `max_entries_per_file`; no two areas sit
    /// within `area_range` lines of each other.
    #[serde(default)]
    pub areas: Vec<Area>,
    /// Timestamp of the most recent activity anywhere in this file.
    #[serde(default)]
    pub last_touched: DateTime<Utc>,
}

impl FileRecord {
    /// Creates an empty record for a file first seen at `now`.
    pub fn new(file_id: &str, now: DateTime<Utc>) -> Self {
        FileRecord {
            file_id: file_id.to_string(),
            areas: Vec::new(),
            last_touched: now,
        }
    }
}
