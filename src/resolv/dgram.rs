//! Datagram transport.
//!
//! The resolver performs all network traffic through the narrow
//! [`DgramTransport`] trait: hand over the query octets and a server
//! address, get back the raw octets of the next reply datagram. The
//! [`Udp`] type implements the trait on plain blocking UDP sockets and is
//! what the resolver uses unless told otherwise. Tests substitute their
//! own implementation to script entire delegation walks without touching
//! the network.

use super::error::ResolveError;
use bytes::Bytes;
use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;
use tracing::trace;

/// The largest reply accepted over UDP.
///
/// RFC 1035 limits messages carried over plain UDP to 512 octets;
/// anything longer is truncated by the server and flagged with the TC
/// bit.
const RECV_SIZE: usize = 512;

//------------ DgramTransport ------------------------------------------------

/// One synchronous request/response exchange with a name server.
pub trait DgramTransport {
    /// Sends `query` to `server` and returns the next reply datagram.
    ///
    /// The call blocks until a reply arrives or the implementation gives
    /// up waiting.
    fn request(
        &self,
        query: &[u8],
        server: SocketAddr,
    ) -> Result<Bytes, ResolveError>;
}

//------------ Udp -----------------------------------------------------------

/// The UDP datagram transport.
///
/// Each exchange runs over a freshly bound socket which is closed again
/// when the exchange is over, successful or not. There is no retry: one
/// datagram goes out, one comes back, and a reply not arriving within the
/// configured time surfaces as [`ResolveError::Timeout`].
#[derive(Clone, Debug)]
pub struct Udp {
    /// How long `request` waits for the reply.
    timeout: Duration,
}

impl Udp {
    /// Creates a new UDP transport with the given receive timeout.
    pub fn new(timeout: Duration) -> Self {
        Udp { timeout }
    }
}

impl DgramTransport for Udp {
    fn request(
        &self,
        query: &[u8],
        server: SocketAddr,
    ) -> Result<Bytes, ResolveError> {
        let sock = UdpSocket::bind(("0.0.0.0", 0))?;
        sock.connect(server)?;
        sock.set_read_timeout(Some(self.timeout))?;
        sock.send(query)?;
        let mut buf = vec![0; RECV_SIZE];
        let len = sock.recv(&mut buf)?;
        buf.truncate(len);
        trace!("received {} octets from {}", len, server);
        Ok(buf.into())
    }
}
