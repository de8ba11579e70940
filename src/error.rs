//! Error types for the minvc library.

use thiserror::Error;

/// Errors that can occur while loading instances or writing results.
///
/// Solver timeouts are not errors: every solver returns its best-so-far
/// cover when the wall clock runs out.
#[derive(Error, Debug)]
pub enum VcError {
    /// Instance file missing or unreadable.
    #[error("cannot read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Header or neighbor token failed to parse.
    #[error("invalid instance: {0}")]
    InvalidFormat(String),

    /// Vertex count exceeds the edge-key packing capacity.
    #[error("instance has {vertices} vertices; edge keys support at most {max}")]
    SizeExceeded { vertices: u64, max: u64 },

    /// Trace or solution write failure.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for minvc operations.
pub type Result<T> = std::result::Result<T, VcError>;
