//! # trail-core
//!
//! Core library for the recent-activity trail: collapses raw cursor and edit
//! events into a bounded, deduplicated, recency-ordered set of "areas of
//! interest" per file, and a bounded recency-ordered set of files overall,
//! with preview snippets for display as a navigable tree.
//!
//! ## Design Principles
//!
//! - **Synchronous**: invoked inline from the host's event dispatch loop. No
//!   async runtime dependency; no operation blocks or suspends.
//! - **Not thread-safe**: clients provide their own synchronization
//!   (`Mutex`, `RwLock`) if they need it.
//! - **Graceful degradation**: unknown ids are no-ops, unreadable documents
//!   get placeholder snippets, corrupt snapshots decode to an empty state.
//! - **Host-agnostic**: the editor supplies activity events and a
//!   [`LineSource`]; tree rendering and navigation stay on the host side.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trail_core::{ActivityTracker, TrackerConfig};
//!
//! let mut tracker = ActivityTracker::new(TrackerConfig::default());
//! tracker.record(&docs, "src/main.rs", 42, true);
//! for file in tracker.list_files() {
//!     for area in tracker.list_areas(&file.file_id) {
//!         println!("{}", trail_core::area_label(area));
//!     }
//! }
//! ```

// Public modules
pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod snapshot;
pub mod snippet;
pub mod tracker;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{ConfigUpdate, TrackerConfig};
pub use display::{area_label, short_file_name};
pub use error::{Result, TrailError};
pub use events::{ActivityEvent, QualifiedActivity};
pub use snapshot::{TrackerSnapshot, SNAPSHOT_VERSION};
pub use snippet::{build_snippet, LineSource, UNAVAILABLE_SNIPPET};
pub use tracker::ActivityTracker;
pub use types::{Area, FileRecord};
