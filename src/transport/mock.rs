//! Mock transport for testing

use super::Transport;
use crate::error::{Error, Result};
use std::collections::VecDeque;

/// In-memory mock transport.
///
/// Reads are served from an injected byte buffer; an exhausted buffer reads
/// as a graceful end-of-stream. `chunk_limit` caps the bytes returned per
/// read call to exercise partial-read handling, and `fail_next_read` injects
/// an I/O error.
pub struct MockTransport {
    read_buffer: VecDeque<u8>,
    chunk_limit: Option<usize>,
    fail_next_read: bool,
    shutdown_calls: usize,
}

impl MockTransport {
    /// Create a new mock transport with an empty read buffer
    pub fn new() -> Self {
        MockTransport {
            read_buffer: VecDeque::new(),
            chunk_limit: None,
            fail_next_read: false,
            shutdown_calls: 0,
        }
    }

    /// Inject data to be read
    pub fn inject(&mut self, data: &[u8]) {
        self.read_buffer.extend(data);
    }

    /// Cap the number of bytes returned by a single read call
    pub fn set_chunk_limit(&mut self, limit: usize) {
        self.chunk_limit = Some(limit);
    }

    /// Make the next read call fail with an I/O error
    pub fn fail_next_read(&mut self) {
        self.fail_next_read = true;
    }

    /// Bytes still queued for reading
    pub fn remaining(&self) -> usize {
        self.read_buffer.len()
    }

    /// Number of times `shutdown` has been called
    pub fn shutdown_calls(&self) -> usize {
        self.shutdown_calls
    }
}

impl Transport for MockTransport {
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "injected read failure",
            )));
        }

        let mut limit = self.read_buffer.len().min(buffer.len());
        if let Some(chunk) = self.chunk_limit {
            limit = limit.min(chunk);
        }

        for slot in buffer.iter_mut().take(limit) {
            *slot = self.read_buffer.pop_front().unwrap();
        }

        Ok(limit)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.shutdown_calls += 1;
        Ok(())
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}
