//! The activity tracker: bounded, recency-ordered areas per file.
//!
//! [`ActivityTracker`] owns the whole model. It is fed one qualifying
//! activity event at a time by the host's event dispatch (see
//! [`crate::events`]), read by the presentation layer through
//! [`list_files`](ActivityTracker::list_files) /
//! [`list_areas`](ActivityTracker::list_areas), and copied in and out by
//! persistence collaborators through
//! [`snapshot`](ActivityTracker::snapshot) /
//! [`restore`](ActivityTracker::restore).
//!
//! # Merge and eviction rules
//!
//! Activity within `area_range` lines of an existing area merges into it:
//! the anchor moves to the earlier line, the snippet is rebuilt there, and
//! the edited flag is sticky. When several areas are in range, the FIRST in
//! storage order wins. Past `max_entries_per_file` the least recently
//! touched area is dropped; past `max_files` the least recently touched
//! file is dropped.
//!
//! # Defensive Design
//!
//! Every operation is total: unknown file ids are created (on record) or
//! absorbed as no-ops (on clear), and nothing here performs I/O.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::config::{ConfigUpdate, TrackerConfig};
use crate::events::ActivityEvent;
use crate::snapshot::{TrackerSnapshot, SNAPSHOT_VERSION};
use crate::snippet::{build_snippet, LineSource};
use crate::types::{Area, FileRecord};

/// Tracks recent activity areas across files.
///
/// Create with [`ActivityTracker::new`] for a fresh session, or
/// [`ActivityTracker::from_snapshot`] to hydrate persisted state.
pub struct ActivityTracker {
    config: TrackerConfig,
    /// Most recently touched file at the front.
    files: Vec<FileRecord>,
    /// Bumped by every mutating operation. Collaborators poll this instead
    /// of receiving callbacks.
    revision: u64,
    /// Last recency stamp handed out; the next one is always later.
    last_issued: DateTime<Utc>,
}

impl ActivityTracker {
    /// Creates an empty tracker.
    pub fn new(config: TrackerConfig) -> Self {
        ActivityTracker {
            config,
            files: Vec::new(),
            revision: 0,
            last_issued: DateTime::<Utc>::default(),
        }
    }

    /// Creates a tracker hydrated from a persisted snapshot.
    pub fn from_snapshot(config: TrackerConfig, snapshot: TrackerSnapshot) -> Self {
        let mut tracker = Self::new(config);
        tracker.restore(snapshot);
        tracker
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Applies a partial configuration change. Takes effect on the next
    /// operation; already-tracked state is not re-evicted.
    pub fn update_config(&mut self, update: ConfigUpdate) {
        self.config.apply(update);
    }

    /// Monotonic change counter. Any difference between two reads means the
    /// tracked state may have changed in between (idempotent clears bump it
    /// too, mirroring the data-changed notification they always fired).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Issues a recency stamp strictly later than any issued before, even
    /// when the wall clock has not advanced between events.
    fn tick(&mut self) -> DateTime<Utc> {
        let mut now = Utc::now();
        if now <= self.last_issued {
            now = self.last_issued + Duration::microseconds(1);
        }
        self.last_issued = now;
        now
    }

    /// Records one qualifying activity event.
    ///
    /// Merges into the first area within `area_range` of `base_line` or
    /// creates a new one, bumps the file's recency and moves it to the
    /// front, and enforces both bounds. `base_line` is zero-based; callers
    /// pass the earliest line of the selection or change (see
    /// [`ActivityEvent::qualify`]).
    pub fn record(
        &mut self,
        lines: &dyn LineSource,
        file_id: &str,
        base_line: u32,
        is_edit: bool,
    ) {
        let now = self.tick();
        let snippet_lines = self.config.snippet_line_count;
        let area_range = self.config.area_range;

        let mut record = match self.files.iter().position(|f| f.file_id == file_id) {
            Some(index) => self.files.remove(index),
            None => FileRecord::new(file_id, now),
        };

        // First match in storage order, not the closest.
        match record
            .areas
            .iter_mut()
            .find(|a| a.line.abs_diff(base_line) <= area_range)
        {
            Some(area) => {
                // The anchor only ever moves toward the file start.
                area.line = area.line.min(base_line);
                area.snippet = build_snippet(lines, file_id, area.line, snippet_lines);
                area.edited = area.edited || is_edit;
                area.last_touched = now;
            }
            None => {
                record.areas.push(Area {
                    line: base_line,
                    snippet: build_snippet(lines, file_id, base_line, snippet_lines),
                    edited: is_edit,
                    last_touched: now,
                });
                if record.areas.len() > self.config.max_entries_per_file {
                    // Oldest-first order becomes the new storage order,
                    // which the first-match rule above observes.
                    record.areas.sort_by_key(|a| a.last_touched);
                    let evicted = record.areas.remove(0);
                    debug!(file_id, line = evicted.line, "evicted least recent area");
                }
            }
        }

        record.last_touched = now;
        self.files.insert(0, record);
        self.enforce_max_files();
        self.revision += 1;
    }

    /// Applies the qualifying-event filter and records the event if it
    /// passes. Returns whether anything was recorded.
    pub fn record_event(&mut self, lines: &dyn LineSource, event: &ActivityEvent) -> bool {
        let Some(activity) = event.qualify(&self.config) else {
            return false;
        };
        self.record(lines, activity.file_id, activity.base_line, activity.is_edit);
        true
    }

    fn enforce_max_files(&mut self) {
        while self.files.len() > self.config.max_files {
            if let Some(evicted) = self.files.pop() {
                debug!(file_id = %evicted.file_id, "evicted least recent file");
            }
        }
    }

    /// Tracked files, most recently touched first. Ties keep storage order.
    pub fn list_files(&self) -> Vec<&FileRecord> {
        let mut files: Vec<&FileRecord> = self.files.iter().collect();
        files.sort_by(|a, b| b.last_touched.cmp(&a.last_touched));
        files
    }

    /// Areas of one file, most recently touched first. Empty for files not
    /// being tracked.
    pub fn list_areas(&self, file_id: &str) -> Vec<&Area> {
        let Some(record) = self.files.iter().find(|f| f.file_id == file_id) else {
            return Vec::new();
        };
        let mut areas: Vec<&Area> = record.areas.iter().collect();
        areas.sort_by(|a, b| b.last_touched.cmp(&a.last_touched));
        areas
    }

    /// Drops one file's history. Unknown ids are absorbed as a no-op.
    pub fn clear_file(&mut self, file_id: &str) {
        self.files.retain(|f| f.file_id != file_id);
        self.revision += 1;
    }

    /// Drops everything.
    pub fn clear_all(&mut self) {
        self.files.clear();
        self.revision += 1;
    }

    /// Copies the full state out for a persistence collaborator.
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            version: SNAPSHOT_VERSION,
            files: self.files.clone(),
        }
    }

    /// Replaces the full state with a snapshot. Never a merge; whatever was
    /// tracked before is gone.
    pub fn restore(&mut self, snapshot: TrackerSnapshot) {
        self.files = snapshot.files;
        // Re-derive the monotonic clock so stamps issued after a restore
        // stay strictly increasing.
        self.last_issued = self
            .files
            .iter()
            .map(|f| f.last_touched)
            .chain(
                self.files
                    .iter()
                    .flat_map(|f| f.areas.iter().map(|a| a.last_touched)),
            )
            .max()
            .unwrap_or_default();
        self.revision += 1;
        debug!(files = self.files.len(), "restored tracker state");
    }
}
