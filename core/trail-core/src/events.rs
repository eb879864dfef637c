//! Activity events and the qualifying-event filter.
//!
//! The host forwards every selection change and document change as an
//! [`ActivityEvent`]; [`ActivityEvent::qualify`] decides which of them are
//! worth tracking. Bare cursor moves (empty selections) and sweeps larger
//! than `max_selection_lines` carry little intent, so they are dropped
//! before they reach the tracker.

use crate::config::TrackerConfig;

/// A raw activity event from the host editor.
///
/// Line numbers are zero-based. `start_line`/`end_line` may arrive in either
/// order; qualification takes the earliest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    /// The primary selection changed. `empty` means a cursor move with no
    /// selected text.
    Selection {
        file_id: String,
        start_line: u32,
        end_line: u32,
        empty: bool,
    },
    /// Document text changed within the given line range.
    Edit {
        file_id: String,
        start_line: u32,
        end_line: u32,
    },
}

/// An event that passed the filter, reduced to what `record` needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedActivity<'a> {
    pub file_id: &'a str,
    /// Earliest line of the selection or change.
    pub base_line: u32,
    pub is_edit: bool,
}

impl ActivityEvent {
    pub fn file_id(&self) -> &str {
        match self {
            ActivityEvent::Selection { file_id, .. } => file_id,
            ActivityEvent::Edit { file_id, .. } => file_id,
        }
    }

    /// Applies the qualifying-event filter: empty selections and events
    /// spanning more than `max_selection_lines` lines are dropped.
    pub fn qualify(&self, config: &TrackerConfig) -> Option<QualifiedActivity<'_>> {
        let (file_id, start, end, is_edit) = match self {
            ActivityEvent::Selection { empty: true, .. } => return None,
            ActivityEvent::Selection {
                file_id,
                start_line,
                end_line,
                ..
            } => (file_id, *start_line, *end_line, false),
            ActivityEvent::Edit {
                file_id,
                start_line,
                end_line,
            } => (file_id, *start_line, *end_line, true),
        };

        if start.abs_diff(end) > config.max_selection_lines {
            return None;
        }

        Some(QualifiedActivity {
            file_id,
            base_line: start.min(end),
            is_edit,
        })
    }
}
