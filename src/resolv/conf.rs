//! Resolver configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// The root name server asked first unless configured otherwise.
///
/// This is a.root-servers.net.
const ROOT_SERVER: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(198, 41, 0, 4)), 53);

/// How long to wait for each reply unless configured otherwise.
const TIMEOUT: Duration = Duration::from_secs(5);

/// How many name servers to ask unless configured otherwise.
const MAX_HOPS: usize = 16;

//------------ ResolvConf ----------------------------------------------------

/// Resolver configuration.
///
/// This type collects all the knobs the resolver recognizes. A fresh value
/// with the defaults described on each field comes out of `Default`; the
/// fields are public and meant to be set directly before the value is
/// handed to the resolver.
#[derive(Clone, Debug)]
pub struct ResolvConf {
    /// The name server the walk starts at.
    ///
    /// By default this is a.root-servers.net on port 53.
    pub root_server: SocketAddr,

    /// Whether the first query asks the server to recurse.
    ///
    /// Referral hops always query non-recursively, since they address a
    /// specific authoritative or referring server directly. Disabled by
    /// default.
    pub recursion_desired: bool,

    /// The maximum number of name servers asked before resolution fails.
    ///
    /// The limit keeps a chain of referrals from going on forever. By
    /// default 16 servers are asked at most.
    pub max_hops: usize,

    /// How long to wait for each reply.
    ///
    /// A server not replying within this time fails the resolution. Five
    /// seconds by default.
    pub timeout: Duration,
}

impl ResolvConf {
    /// Creates a new configuration with the default values.
    pub fn new() -> Self {
        Default::default()
    }
}

//--- Default

impl Default for ResolvConf {
    fn default() -> Self {
        ResolvConf {
            root_server: ROOT_SERVER,
            recursion_desired: false,
            max_hops: MAX_HOPS,
            timeout: TIMEOUT,
        }
    }
}
