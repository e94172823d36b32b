//! Detection streaming protocol

pub mod frame;
pub mod messages;
pub mod receiver;
pub mod wire;

pub use frame::{Frame, HEADER_SIZE, MAX_MESSAGE_SIZE};
pub use messages::{Detection, DetectionList, Rect};
pub use receiver::FrameReader;
pub use wire::{Serializer, WireFormat};
