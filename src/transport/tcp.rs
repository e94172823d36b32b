//! TCP transport over a blocking stream socket

use crate::error::{Error, Result};
use std::io::Read;
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use super::Transport;

/// Blocking TCP transport to the detection server.
pub struct TcpTransport {
    stream: TcpStream,
    closed: bool,
}

impl TcpTransport {
    /// Connect to the server at `addr` (e.g. `"192.168.1.20:5600"`).
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        let stream = TcpStream::connect(addr).map_err(Error::Connect)?;
        Ok(Self {
            stream,
            closed: false,
        })
    }

    /// Set the read timeout for the connection.
    ///
    /// Pass `None` to restore fully blocking reads (the default). A timeout
    /// that fires surfaces as an I/O error from [`Transport::read`].
    pub fn set_read_timeout(&mut self, timeout: Option<Duration>) -> Result<()> {
        self.stream.set_read_timeout(timeout)?;
        Ok(())
    }

    /// Peer address of the connection.
    pub fn peer_addr(&self) -> Result<std::net::SocketAddr> {
        Ok(self.stream.peer_addr()?)
    }

    /// Obtain a handle that can shut this connection down from another
    /// thread (e.g. a signal handler), unblocking any read in progress.
    pub fn shutdown_handle(&self) -> Result<ShutdownHandle> {
        Ok(ShutdownHandle {
            stream: self.stream.try_clone()?,
        })
    }
}

impl Transport for TcpTransport {
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        Ok(self.stream.read(buffer)?)
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        // NotConnected means the peer tore the socket down first.
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(Error::Io(e)),
        }
    }
}

/// Cloned handle for shutting a [`TcpTransport`] down out-of-band.
pub struct ShutdownHandle {
    stream: TcpStream,
}

impl ShutdownHandle {
    /// Shut the underlying connection down. Blocking reads on the owning
    /// transport observe end-of-stream.
    pub fn shutdown(&self) {
        let _ = self.stream.shutdown(Shutdown::Both);
    }
}
