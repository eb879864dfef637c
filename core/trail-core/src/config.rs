//! Tracker configuration and hot reload.
//!
//! The host owns and validates these values (non-negative, sensible sizes)
//! and pushes changes through [`TrackerConfig::apply`] when its settings
//! change. Changes take effect on the next operation; they do not
//! retroactively evict already-tracked state.

use serde::{Deserialize, Serialize};

fn default_max_files() -> usize {
    10
}

fn default_max_entries_per_file() -> usize {
    5
}

fn default_snippet_line_count() -> u32 {
    3
}

fn default_max_selection_lines() -> u32 {
    50
}

fn default_area_range() -> u32 {
    5
}

/// Settings governing how activity collapses into areas and when entries
/// get evicted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Max tracked files; the least recently touched file is evicted beyond
    /// this.
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    /// Max areas per file; the least recently touched area is evicted beyond
    /// this.
    #[serde(default = "default_max_entries_per_file")]
    pub max_entries_per_file: usize,
    /// Number of source lines captured per snippet window.
    #[serde(default = "default_snippet_line_count")]
    pub snippet_line_count: u32,
    /// Whether the host should persist snapshots across sessions. The
    /// tracker itself is agnostic; it always supports snapshot/restore.
    #[serde(default)]
    pub preserve_between_sessions: bool,
    /// Selections or edits spanning more lines than this never reach the
    /// tracker (enforced by [`crate::ActivityEvent::qualify`]).
    #[serde(default = "default_max_selection_lines")]
    pub max_selection_lines: u32,
    /// Max line distance for merging new activity into an existing area.
    #[serde(default = "default_area_range")]
    pub area_range: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            max_files: default_max_files(),
            max_entries_per_file: default_max_entries_per_file(),
            snippet_line_count: default_snippet_line_count(),
            preserve_between_sessions: false,
            max_selection_lines: default_max_selection_lines(),
            area_range: default_area_range(),
        }
    }
}

/// Partial configuration change. `None` fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub max_files: Option<usize>,
    pub max_entries_per_file: Option<usize>,
    pub snippet_line_count: Option<u32>,
    pub preserve_between_sessions: Option<bool>,
    pub max_selection_lines: Option<u32>,
    pub area_range: Option<u32>,
}

impl TrackerConfig {
    /// Applies a partial update in place.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(v) = update.max_files {
            self.max_files = v;
        }
        if let Some(v) = update.max_entries_per_file {
            self.max_entries_per_file = v;
        }
        if let Some(v) = update.snippet_line_count {
            self.snippet_line_count = v;
        }
        if let Some(v) = update.preserve_between_sessions {
            self.preserve_between_sessions = v;
        }
        if let Some(v) = update.max_selection_lines {
            self.max_selection_lines = v;
        }
        if let Some(v) = update.area_range {
            self.area_range = v;
        }
    }
}
