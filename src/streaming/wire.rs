//! Wire format serialization abstraction
//!
//! Two payload formats are supported, selected once at startup:
//!
//! - **Postcard** (default): compact binary, what detection servers stream
//!   in production.
//! - **JSON**: human-readable, for debugging and cross-language producers.
//!
//! Decoding borrows the payload buffer: the returned [`DetectionList`]
//! lives only as long as the bytes it was parsed from. A payload that fails
//! to decode is a [`Error::Serialization`]; framing is unaffected by it, so
//! callers may discard the payload and keep reading.

use crate::error::{Error, Result};
use crate::streaming::messages::DetectionList;

/// Supported wire formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
    /// Binary format using postcard - fast and compact
    #[default]
    Postcard,
    /// JSON format - human-readable for debugging
    Json,
}

impl std::str::FromStr for WireFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postcard" => Ok(WireFormat::Postcard),
            "json" => Ok(WireFormat::Json),
            other => Err(format!("unknown wire format '{}' (postcard, json)", other)),
        }
    }
}

impl std::fmt::Display for WireFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireFormat::Postcard => write!(f, "postcard"),
            WireFormat::Json => write!(f, "json"),
        }
    }
}

/// Serializer that can handle both formats
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    format: WireFormat,
}

impl Serializer {
    /// Create a new serializer for the given format
    pub fn new(format: WireFormat) -> Self {
        Self { format }
    }

    /// The configured wire format
    pub fn format(&self) -> WireFormat {
        self.format
    }

    /// Serialize a detection list to payload bytes
    pub fn encode(&self, list: &DetectionList<'_>) -> Result<Vec<u8>> {
        match self.format {
            WireFormat::Postcard => {
                postcard::to_allocvec(list).map_err(|e| Error::Serialization(e.to_string()))
            }
            WireFormat::Json => {
                serde_json::to_vec(list).map_err(|e| Error::Serialization(e.to_string()))
            }
        }
    }

    /// Deserialize payload bytes into a detection list borrowing `bytes`
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<DetectionList<'a>> {
        match self.format {
            WireFormat::Postcard => {
                postcard::from_bytes(bytes).map_err(|e| Error::Serialization(e.to_string()))
            }
            WireFormat::Json => {
                serde_json::from_slice(bytes).map_err(|e| Error::Serialization(e.to_string()))
            }
        }
    }
}
