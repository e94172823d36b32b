//! Wire framing for the detection stream
//!
//! Every message on the wire is one frame:
//!
//! ```text
//! ┌──────────────────┬──────────────────────────┐
//! │ Header (4 bytes) │ Payload (variable)       │
//! │ ASCII decimal    │ Serialized DetectionList │
//! └──────────────────┴──────────────────────────┘
//! ```
//!
//! The header encodes the payload length as a decimal numeral in text form,
//! back-to-back with the payload and with no delimiter between frames.
//! Producers differ in padding (the reference server space-pads via `"%4d"`,
//! other emitters zero-pad), so parsing tolerates surrounding ASCII
//! whitespace. Declared lengths must stay strictly below
//! [`MAX_MESSAGE_SIZE`]; anything at or above it is rejected before a single
//! payload byte is read, because a partial payload would be misread as the
//! next header.

use crate::error::{Error, Result};

/// Fixed size of the length header in bytes
pub const HEADER_SIZE: usize = 4;

/// Maximum message size; declared payload lengths must be strictly smaller
pub const MAX_MESSAGE_SIZE: usize = 4096;

/// One fully assembled frame of the wire protocol.
///
/// Borrows the reader's payload buffer; the frame is either fully assembled
/// or does not exist; partial frames are never exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    payload: &'a [u8],
}

impl<'a> Frame<'a> {
    pub(crate) fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    /// The payload bytes, exactly as declared by the header
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// True for a zero-length payload
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// Parse a length header into the declared payload length.
///
/// Returns [`Error::MalformedHeader`] when the bytes are not a parseable
/// non-negative decimal (an explicit outcome, never conflated with a
/// zero-length frame), and [`Error::OversizedFrame`] when the declared
/// length is at or above [`MAX_MESSAGE_SIZE`].
pub fn parse_header(raw: &[u8; HEADER_SIZE]) -> Result<usize> {
    let text = std::str::from_utf8(raw).map_err(|_| Error::MalformedHeader(*raw))?;
    let declared: usize = text
        .trim()
        .parse()
        .map_err(|_| Error::MalformedHeader(*raw))?;

    if declared >= MAX_MESSAGE_SIZE {
        return Err(Error::OversizedFrame {
            declared,
            limit: MAX_MESSAGE_SIZE,
        });
    }

    Ok(declared)
}

/// Encode a payload length as a zero-padded 4-digit header.
pub fn encode_header(len: usize) -> Result<[u8; HEADER_SIZE]> {
    if len >= MAX_MESSAGE_SIZE {
        return Err(Error::OversizedFrame {
            declared: len,
            limit: MAX_MESSAGE_SIZE,
        });
    }

    let text = format!("{:04}", len);
    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(text.as_bytes());
    Ok(header)
}

/// Encode a complete frame (header + payload) ready for the wire.
pub fn encode_frame(payload: &[u8]) -> Result<Vec<u8>> {
    let header = encode_header(payload.len())?;
    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.extend_from_slice(&header);
    frame.extend_from_slice(payload);
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_padded_header() {
        assert_eq!(parse_header(b"0010").unwrap(), 10);
    }

    #[test]
    fn parses_space_padded_header() {
        // The reference server pads with "%4d"
        assert_eq!(parse_header(b"  10").unwrap(), 10);
        assert_eq!(parse_header(b"   7").unwrap(), 7);
    }

    #[test]
    fn parses_zero_length() {
        assert_eq!(parse_header(b"0000").unwrap(), 0);
    }

    #[test]
    fn accepts_largest_valid_length() {
        assert_eq!(parse_header(b"4095").unwrap(), 4095);
    }

    #[test]
    fn rejects_length_at_limit() {
        match parse_header(b"4096") {
            Err(Error::OversizedFrame { declared, limit }) => {
                assert_eq!(declared, 4096);
                assert_eq!(limit, MAX_MESSAGE_SIZE);
            }
            other => panic!("expected OversizedFrame, got {:?}", other),
        }
    }

    #[test]
    fn rejects_oversized_length() {
        match parse_header(b"9999") {
            Err(Error::OversizedFrame { declared, .. }) => assert_eq!(declared, 9999),
            other => panic!("expected OversizedFrame, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_header() {
        match parse_header(b"abcd") {
            Err(Error::MalformedHeader(raw)) => assert_eq!(&raw, b"abcd"),
            other => panic!("expected MalformedHeader, got {:?}", other),
        }
    }

    #[test]
    fn rejects_negative_length() {
        assert!(matches!(
            parse_header(b"-001"),
            Err(Error::MalformedHeader(_))
        ));
    }

    #[test]
    fn rejects_non_utf8_header() {
        assert!(matches!(
            parse_header(&[0xFF, 0xFE, 0x30, 0x30]),
            Err(Error::MalformedHeader(_))
        ));
    }

    #[test]
    fn encodes_zero_padded() {
        assert_eq!(&encode_header(10).unwrap(), b"0010");
        assert_eq!(&encode_header(0).unwrap(), b"0000");
        assert_eq!(&encode_header(4095).unwrap(), b"4095");
    }

    #[test]
    fn encode_rejects_oversized() {
        assert!(matches!(
            encode_header(4096),
            Err(Error::OversizedFrame { .. })
        ));
    }

    #[test]
    fn encoded_frame_parses_back() {
        let frame = encode_frame(b"hello").unwrap();
        assert_eq!(&frame[..HEADER_SIZE], b"0005");
        let mut header = [0u8; HEADER_SIZE];
        header.copy_from_slice(&frame[..HEADER_SIZE]);
        assert_eq!(parse_header(&header).unwrap(), 5);
        assert_eq!(&frame[HEADER_SIZE..], b"hello");
    }
}
