//! DrishtiClient - TCP client for streaming object detections
//!
//! This library provides the components for subscribing to a detection
//! server and receiving its stream of classified bounding boxes: a
//! length-prefixed frame protocol over a pluggable transport, payload
//! decoding into borrowed detection records, and operator-facing report
//! rendering.
//!
//! ## Features
//!
//! - `mock`: Enable the in-memory mock transport for socket-free testing

pub mod error;
pub mod report;
pub mod session;
pub mod streaming;
pub mod transport;

// Re-export commonly used types
pub use error::{Error, Result};
pub use session::{Session, SessionSummary};
pub use streaming::{Detection, DetectionList, FrameReader, Rect, Serializer, WireFormat};
pub use transport::{TcpTransport, Transport};
