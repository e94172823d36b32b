//! Rendering of decoded detection lists for the operator
//!
//! Pure formatting: no I/O, no mutation. The output is display-only and is
//! never parsed back into structured data.

use crate::streaming::messages::DetectionList;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Write;

/// Calendar format used for both producer and receipt timestamps
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Render one detection list as a multi-line report.
///
/// `received_at` is the local receipt instant, captured by the caller when
/// the frame arrived. The producer timestamp is converted from milliseconds
/// since the epoch to local calendar time.
pub fn render(list: &DetectionList<'_>, received_at: DateTime<Local>) -> String {
    let mut out = String::new();

    // Infallible: fmt::Write on String never errors
    let _ = writeln!(out, "Detection list");
    let _ = writeln!(out, "  TX TS = {}", format_producer_timestamp(list.timestamp_ms));
    let _ = writeln!(out, "  RX TS = {}", received_at.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out, "  Image:");
    let _ = writeln!(out, "    WIDTH = {}", list.image_width);
    let _ = writeln!(out, "    HEIGHT = {}", list.image_height);
    let _ = writeln!(out, "  Detections:");

    if list.detections.is_empty() {
        let _ = writeln!(out, "    NONE");
    } else {
        for detection in &list.detections {
            let _ = writeln!(out, "    Detection:");
            let _ = writeln!(out, "      ID = {}", detection.class_id);
            let _ = writeln!(out, "      NAME = {}", detection.class_name);
            let _ = writeln!(out, "      CONFIDENCE = {}", detection.confidence);
            let _ = writeln!(
                out,
                "      RECT = ({},{},{},{})",
                detection.rect.x, detection.rect.y, detection.rect.width, detection.rect.height
            );
        }
    }

    out
}

fn format_producer_timestamp(timestamp_ms: u64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms as i64).single() {
        Some(instant) => instant.format(TIMESTAMP_FORMAT).to_string(),
        // Unrepresentable instant; show the raw value rather than guessing
        None => format!("{} ms since epoch", timestamp_ms),
    }
}
