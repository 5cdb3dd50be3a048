//! Resolver errors.

use crate::base::wire::ParseError;
use core::fmt;
use std::io;

//------------ ResolveError --------------------------------------------------

/// An error terminating a resolution.
///
/// Nothing is retried or recovered: every variant is fatal for the whole
/// resolution and surfaces immediately at the caller. There are no
/// partial results, either a complete address is produced or resolution
/// fails outright.
#[derive(Debug)]
pub enum ResolveError {
    /// Sending or receiving on the network failed.
    Transport(io::Error),

    /// A name server did not reply within the configured time.
    Timeout,

    /// A reply could not be decoded.
    Malformed(ParseError),

    /// A reply contained neither an answer nor a usable referral.
    NoReferral,

    /// The chain of referrals exceeded the configured hop limit.
    DepthExceeded,

    /// A referral pointed back at a server already asked.
    ReferralCycle,
}

//--- From

impl From<io::Error> for ResolveError {
    fn from(err: io::Error) -> Self {
        // An elapsed read timeout comes out of the socket as WouldBlock
        // on Unix and TimedOut on Windows.
        match err.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
                ResolveError::Timeout
            }
            _ => ResolveError::Transport(err),
        }
    }
}

impl From<ParseError> for ResolveError {
    fn from(err: ParseError) -> Self {
        ResolveError::Malformed(err)
    }
}

//--- Display and Error

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ResolveError::Transport(ref err) => {
                write!(f, "network error: {}", err)
            }
            ResolveError::Timeout => {
                f.write_str("name server did not reply in time")
            }
            ResolveError::Malformed(ref err) => {
                write!(f, "malformed reply: {}", err)
            }
            ResolveError::NoReferral => {
                f.write_str("reply carried no answer and no referral")
            }
            ResolveError::DepthExceeded => {
                f.write_str("referral chain exceeded the hop limit")
            }
            ResolveError::ReferralCycle => {
                f.write_str("referral chain looped back on itself")
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            ResolveError::Transport(ref err) => Some(err),
            ResolveError::Malformed(ref err) => Some(err),
            _ => None,
        }
    }
}
