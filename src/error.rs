//! Error types for the hypernym library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`HypernymError`] enum. Errors are synchronous and atomic: a query either
//! fully succeeds or fails at the point of the offending call, never with a
//! partial result.

use std::io;

use thiserror::Error;

/// The main error type for hypernym operations.
#[derive(Error, Debug)]
pub enum HypernymError {
    /// I/O errors (reading graph or dictionary files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A vertex id outside `[0, V)`, or an empty vertex set where a
    /// non-empty one is required
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// A mandatory value that is absent or unusable (e.g. an unknown noun)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed input data (digraph, synset, or hypernym files)
    #[error("Format error: {0}")]
    Format(String),

    /// A graph that violates a required shape (cyclic or not single-rooted)
    #[error("Graph shape error: {0}")]
    GraphShape(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with HypernymError.
pub type Result<T> = std::result::Result<T, HypernymError>;

impl HypernymError {
    /// Create a new out-of-range error.
    pub fn out_of_range<S: Into<String>>(msg: S) -> Self {
        HypernymError::OutOfRange(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        HypernymError::InvalidArgument(msg.into())
    }

    /// Create a new format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        HypernymError::Format(msg.into())
    }

    /// Create a new graph shape error.
    pub fn graph_shape<S: Into<String>>(msg: S) -> Self {
        HypernymError::GraphShape(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        HypernymError::Other(msg.into())
    }
}
