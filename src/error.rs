//! Error types for the detection client

use crate::streaming::frame::HEADER_SIZE;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Client error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection to the detection server could not be established
    #[error("connection failed: {0}")]
    Connect(#[source] std::io::Error),

    /// I/O error on an established connection
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame header bytes were not a parseable decimal length.
    ///
    /// Fatal for the session: the stream is framing-desynchronized and
    /// cannot be resumed. Carries the raw header bytes for diagnosis.
    #[error("malformed frame header {0:02X?}")]
    MalformedHeader([u8; HEADER_SIZE]),

    /// Declared payload length at or above the protocol limit.
    ///
    /// Fatal for the same desynchronization reason: a partial payload
    /// would be misread as the next header.
    #[error("oversized frame: declared {declared} bytes, limit {limit}")]
    OversizedFrame {
        /// Length declared by the header
        declared: usize,
        /// Maximum accepted payload length (exclusive)
        limit: usize,
    },

    /// Payload serialization or deserialization failure
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
