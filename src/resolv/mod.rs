//! An iterative resolver.
//!
//! This module provides a resolver that finds the IPv4 address for a
//! domain name by walking the delegation hierarchy on its own. Starting
//! from a configured root name server, it sends the same query to one
//! server after another: a server that knows the answer returns it, a
//! server that does not points at a server closer to the authoritative
//! data through an address record in the additional section of its reply.
//! The walk ends with the first answer, or fails when a reply offers no
//! usable referral, when the configured hop limit is reached, or when a
//! referral leads back to a server already asked.
//!
//! The central type is [`IterativeResolver`]. It is configured through a
//! [`ResolvConf`] value and performs all network traffic through an
//! implementation of the [`DgramTransport`] trait, normally the plain
//! UDP transport [`Udp`]. One resolution is one synchronous sequence of
//! query exchanges; nothing is cached and nothing is shared between
//! resolutions.

pub mod conf;
pub mod dgram;
pub mod error;
pub mod iterative;

pub use self::conf::ResolvConf;
pub use self::dgram::{DgramTransport, Udp};
pub use self::error::ResolveError;
pub use self::iterative::IterativeResolver;
