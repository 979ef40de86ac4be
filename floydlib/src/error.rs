//! Error types for floydlib

use thiserror::Error;

/// Errors that can occur while building or emitting a triangle
#[derive(Error, Debug)]
pub enum FloydError {
    /// The last element of the requested triangle does not fit in a `u64`
    #[error("triangle size {size} is too large: its last element overflows u64")]
    SizeTooLarge { size: i64 },

    /// Failed to serialize a triangle table
    #[error("failed to serialize triangle: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
