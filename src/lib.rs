//! An iterative DNS stub resolver.
//!
//! This crate resolves a domain name to an IPv4 address by walking the DNS
//! delegation hierarchy itself: it asks a root name server, follows the
//! referral hints that servers hand back in the additional section of their
//! replies, and keeps going until some server produces an answer or the
//! walk runs out of road. It builds and parses the raw wire format and
//! drives plain blocking UDP sockets. Neither the operating system's
//! resolver nor an upstream recursive resolver is involved.
//!
//! # Modules
//!
//! * [base] contains the DNS data types and the wire format codec:
//!   message headers, domain names, questions, resource records, and the
//!   means to compose queries and parse replies.
//! * [resolv] contains the resolver itself: its configuration, the
//!   datagram transport, and the driver that walks the delegations.
//!
//! # Example
//!
//! ```no_run
//! use rootwalk::base::name::Name;
//! use rootwalk::resolv::{IterativeResolver, ResolvConf};
//!
//! let name: Name = "dns.google.com".parse().unwrap();
//! let resolver = IterativeResolver::new(ResolvConf::default());
//! let addr = resolver.resolve(&name).unwrap();
//! println!("{}", addr);
//! ```

pub mod base;
pub mod resolv;
