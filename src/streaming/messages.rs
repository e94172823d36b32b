//! Record types carried by the detection stream
//!
//! A [`DetectionList`] describes one producer-side image frame: when it was
//! captured, its pixel dimensions, and the classified bounding boxes found
//! in it. Decoded lists are read-only views that borrow the payload buffer
//! they were parsed from (class names stay zero-copy where the wire format
//! allows), so the buffer must outlive the view.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One decoded detection record for a single image frame
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DetectionList<'a> {
    /// Producer-side capture instant, milliseconds since the Unix epoch
    pub timestamp_ms: u64,

    /// Source image width in pixels
    pub image_width: i32,

    /// Source image height in pixels
    pub image_height: i32,

    /// Classified bounding boxes, in producer order (never re-sorted)
    #[serde(borrow)]
    pub detections: Vec<Detection<'a>>,
}

/// One classified bounding box within a detection list
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Detection<'a> {
    /// Classifier class index
    pub class_id: i32,

    /// Human-readable label for the class
    #[serde(borrow)]
    pub class_name: Cow<'a, str>,

    /// Bounding rectangle in image pixel coordinates
    pub rect: Rect,

    /// Classification confidence score, semantically in [0, 1]
    pub confidence: f32,
}

/// Axis-aligned rectangle in pixel units
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}
