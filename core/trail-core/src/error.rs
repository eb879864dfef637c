//! Error types for trail-core operations.
//!
//! The tracker API itself is total - lookups fail soft and mutations absorb
//! unknown ids - so errors only surface from snapshot encoding.

/// All errors that can occur in trail-core operations.
#[derive(Debug, thiserror::Error)]
pub enum TrailError {
    #[error("JSON serialization error: {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using TrailError.
pub type Result<T> = std::result::Result<T, TrailError>;
