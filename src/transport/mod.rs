//! Transport layer for I/O abstraction

use crate::error::Result;

mod tcp;
pub use tcp::{ShutdownHandle, TcpTransport};

#[cfg(any(test, feature = "mock"))]
mod mock;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;

/// Byte-stream transport to the detection server.
///
/// The receive path is single-reader: whoever owns the transport owns its
/// read cursor, and no other component may read from it.
pub trait Transport {
    /// Read data into buffer, returns number of bytes read.
    ///
    /// A return of `Ok(0)` means the remote endpoint closed the stream
    /// gracefully. Partial reads are normal; callers that need an exact
    /// byte count must loop.
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize>;

    /// Shut the transport down.
    ///
    /// Safe to call more than once; repeated calls are no-ops.
    fn shutdown(&mut self) -> Result<()>;
}
