//! Frame reader for the detection stream
//!
//! Pulls length-prefixed frames off a [`Transport`], one at a time. This is
//! the only component with protocol state: the transport's read cursor.
//!
//! A graceful close by the server (at a frame boundary, mid-header, or
//! mid-payload) reads as end-of-stream (`Ok(None)`), not an error. A
//! header that fails to parse or declares an oversized payload ends the
//! session: once the length is unknown the stream cannot be re-synchronized.

use crate::error::Result;
use crate::streaming::frame::{self, Frame, HEADER_SIZE};
use crate::transport::Transport;

/// Initial capacity for the payload buffer (typical detection list size)
const INITIAL_BUFFER_CAPACITY: usize = 256;

/// Reads length-prefixed frames from a transport.
///
/// Owns the transport (single-reader discipline) and a reusable payload
/// buffer; each returned [`Frame`] borrows that buffer and is valid until
/// the next read.
pub struct FrameReader<T: Transport> {
    transport: T,
    payload: Vec<u8>,
}

impl<T: Transport> FrameReader<T> {
    /// Create a frame reader owning `transport`
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            payload: Vec::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Read the next frame, blocking until it is fully assembled.
    ///
    /// Returns `Ok(None)` when the server closes the stream, at any offset.
    pub fn read_frame(&mut self) -> Result<Option<Frame<'_>>> {
        let mut header = [0u8; HEADER_SIZE];
        if !read_full(&mut self.transport, &mut header)? {
            log::debug!("End of stream while waiting for header");
            return Ok(None);
        }

        // Rejects malformed and oversized headers before any payload read
        let len = frame::parse_header(&header)?;

        self.payload.clear();
        self.payload.resize(len, 0);
        if !read_full(&mut self.transport, &mut self.payload)? {
            log::debug!("End of stream mid-payload (expected {} bytes)", len);
            return Ok(None);
        }

        Ok(Some(Frame::new(&self.payload)))
    }

    /// Shared reference to the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable reference to the underlying transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

/// Read exactly `buf.len()` bytes, looping over partial reads.
///
/// Returns `Ok(false)` if the stream ends before the buffer fills.
fn read_full<T: Transport>(transport: &mut T, buf: &mut [u8]) -> Result<bool> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = transport.read(&mut buf[filled..])?;
        if n == 0 {
            return Ok(false);
        }
        filled += n;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transport::MockTransport;

    fn reader_with(data: &[u8]) -> FrameReader<MockTransport> {
        let mut mock = MockTransport::new();
        mock.inject(data);
        FrameReader::new(mock)
    }

    #[test]
    fn reads_single_frame() {
        let mut reader = reader_with(b"0005hello");
        let frame = reader.read_frame().unwrap().expect("frame");
        assert_eq!(frame.payload(), b"hello");
        assert_eq!(frame.len(), 5);
    }

    #[test]
    fn reads_consecutive_frames_back_to_back() {
        let mut reader = reader_with(b"0005hello0002hi");
        assert_eq!(reader.read_frame().unwrap().unwrap().payload(), b"hello");
        assert_eq!(reader.read_frame().unwrap().unwrap().payload(), b"hi");
        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn assembles_frame_across_partial_reads() {
        let mut mock = MockTransport::new();
        mock.inject(b"0012detection-ok");
        mock.set_chunk_limit(3);
        let mut reader = FrameReader::new(mock);
        let frame = reader.read_frame().unwrap().expect("frame");
        assert_eq!(frame.payload(), b"detection-ok");
    }

    #[test]
    fn empty_stream_is_clean_end() {
        let mut reader = reader_with(b"");
        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn eof_mid_header_is_clean_end() {
        let mut reader = reader_with(b"00");
        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn eof_mid_payload_is_clean_end() {
        let mut reader = reader_with(b"0100only-a-few-bytes");
        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn zero_length_frame_is_valid() {
        let mut reader = reader_with(b"0000");
        let frame = reader.read_frame().unwrap().expect("frame");
        assert!(frame.is_empty());
        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn malformed_header_is_fatal_and_consumes_nothing_further() {
        let mut reader = reader_with(b"abcdtrailing-bytes");
        match reader.read_frame() {
            Err(Error::MalformedHeader(raw)) => assert_eq!(&raw, b"abcd"),
            other => panic!("expected MalformedHeader, got {:?}", other.map(|_| ())),
        }
        assert_eq!(reader.transport().remaining(), b"trailing-bytes".len());
    }

    #[test]
    fn oversized_header_rejected_before_payload_read() {
        let mut reader = reader_with(b"9999would-be-payload");
        match reader.read_frame() {
            Err(Error::OversizedFrame { declared, .. }) => assert_eq!(declared, 9999),
            other => panic!("expected OversizedFrame, got {:?}", other.map(|_| ())),
        }
        assert_eq!(reader.transport().remaining(), b"would-be-payload".len());
    }

    #[test]
    fn transport_failure_surfaces_as_io_error() {
        let mut mock = MockTransport::new();
        mock.fail_next_read();
        let mut reader = FrameReader::new(mock);
        assert!(matches!(reader.read_frame(), Err(Error::Io(_))));
    }

    #[test]
    fn payload_buffer_is_reused_between_frames() {
        let mut reader = reader_with(b"0005first0003two");
        assert_eq!(reader.read_frame().unwrap().unwrap().payload(), b"first");
        // Shorter follow-up frame must not see stale bytes
        assert_eq!(reader.read_frame().unwrap().unwrap().payload(), b"two");
    }
}
