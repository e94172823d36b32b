//! Receive session against a detection server
//!
//! Drives the frame reader in a purely receive-driven loop: frame → decode →
//! render → deliver, until the server closes the stream or a fatal framing
//! error occurs. The session owns the transport through its frame reader and
//! guarantees it is shut down exactly once, on every exit path, including
//! drop.
//!
//! A payload that fails to decode does not end the session: the frame
//! boundary was still read correctly, so the stream stays synchronized and
//! the payload is logged and discarded.

use crate::error::{Error, Result};
use crate::report;
use crate::streaming::receiver::FrameReader;
use crate::streaming::wire::{Serializer, WireFormat};
use crate::transport::{ShutdownHandle, TcpTransport, Transport};
use chrono::Local;
use std::net::ToSocketAddrs;
use std::time::Duration;

/// Counters describing a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Detection lists decoded and delivered
    pub frames: u64,
    /// Payloads discarded because they failed to decode
    pub decode_failures: u64,
}

/// One receive session over a transport.
pub struct Session<T: Transport> {
    reader: FrameReader<T>,
    serializer: Serializer,
    closed: bool,
}

impl Session<TcpTransport> {
    /// Connect to the detection server at `addr`.
    ///
    /// Surfaces [`Error::Connect`] without creating a session when the
    /// transport cannot be established.
    pub fn connect<A: ToSocketAddrs>(addr: A, format: WireFormat) -> Result<Self> {
        let transport = TcpTransport::connect(addr)?;
        Ok(Self::new(transport, Serializer::new(format)))
    }

    /// Set the read timeout on the underlying connection.
    ///
    /// Off by default (fully blocking reads); a timeout that fires ends the
    /// session as a transport failure. Framing semantics are unchanged.
    pub fn set_read_timeout(&mut self, timeout: Option<Duration>) -> Result<()> {
        self.reader.transport_mut().set_read_timeout(timeout)
    }

    /// Handle for shutting the connection down from another thread
    pub fn shutdown_handle(&self) -> Result<ShutdownHandle> {
        self.reader.transport().shutdown_handle()
    }
}

impl<T: Transport> Session<T> {
    /// Create a session over an already-established transport
    pub fn new(transport: T, serializer: Serializer) -> Self {
        Self {
            reader: FrameReader::new(transport),
            serializer,
            closed: false,
        }
    }

    /// Run the receive loop until the stream ends or a fatal error occurs.
    ///
    /// Each rendered report is handed to `deliver`. The transport is shut
    /// down before this returns, on success and error paths alike.
    pub fn run<F: FnMut(&str)>(&mut self, mut deliver: F) -> Result<SessionSummary> {
        let result = self.receive_loop(&mut deliver);
        self.close();
        result
    }

    fn receive_loop<F: FnMut(&str)>(&mut self, deliver: &mut F) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            match self.reader.read_frame() {
                Ok(Some(frame)) => {
                    let received_at = Local::now();
                    match self.serializer.decode(frame.payload()) {
                        Ok(list) => {
                            let rendered = report::render(&list, received_at);
                            deliver(&rendered);
                            summary.frames += 1;
                        }
                        Err(Error::Serialization(reason)) => {
                            // Framing is still synchronized; drop the payload
                            log::warn!(
                                "Discarding undecodable payload ({} bytes): {}",
                                frame.len(),
                                reason
                            );
                            summary.decode_failures += 1;
                        }
                        Err(e) => return Err(e),
                    }
                }
                Ok(None) => {
                    log::info!("Server closed the connection");
                    return Ok(summary);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Shut the transport down. Called automatically by [`Session::run`]
    /// and on drop; safe to call again.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.reader.transport_mut().shutdown() {
            log::warn!("Transport shutdown failed: {}", e);
        }
    }
}

impl<T: Transport> Drop for Session<T> {
    fn drop(&mut self) {
        self.close();
    }
}
