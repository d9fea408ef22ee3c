//! Codec error types.

use thiserror::Error;

/// Errors that can occur when converting an order to or from JSON.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The order could not be serialized.
    #[error("Failed to encode order: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input was not a well-formed order document.
    #[error("Failed to decode order: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
