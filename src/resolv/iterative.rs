//! The resolution driver.
//!
//! This module provides [`IterativeResolver`], the state machine at the
//! heart of the crate. A resolution is in one of two states: it has a
//! destination and awaits that server's reply, or it is done, either with
//! an address or with an error. Each reply moves the machine along: an
//! answer finishes the walk, a reply without answers but with an address
//! record among its additionals names the next destination, and anything
//! else is the end of the road.

use super::conf::ResolvConf;
use super::dgram::{DgramTransport, Udp};
use super::error::ResolveError;
use crate::base::header::Header;
use crate::base::iana::Rtype;
use crate::base::message::Message;
use crate::base::message_builder::MessageBuilder;
use crate::base::name::Name;
use crate::base::question::Question;
use crate::base::record::Record;
use crate::base::wire::FormError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::{debug, warn};

//------------ IterativeResolver ---------------------------------------------

/// A resolver that walks the delegation hierarchy itself.
///
/// The resolver is created from a [`ResolvConf`] via [`new`][Self::new],
/// or via [`with_transport`][Self::with_transport] if network traffic
/// should go through something other than a plain UDP socket. It can then
/// be asked to resolve domain names to IPv4 addresses through
/// [`resolve`][Self::resolve].
///
/// A resolver value keeps no state between resolutions. It can be used
/// for any number of lookups, one after another.
#[derive(Clone, Debug)]
pub struct IterativeResolver<T = Udp> {
    /// The configuration of the resolver.
    conf: ResolvConf,

    /// The transport queries are exchanged through.
    transport: T,
}

impl IterativeResolver<Udp> {
    /// Creates a resolver using the given configuration.
    pub fn new(conf: ResolvConf) -> Self {
        let transport = Udp::new(conf.timeout);
        IterativeResolver { conf, transport }
    }
}

impl<T: DgramTransport> IterativeResolver<T> {
    /// Creates a resolver atop the given transport.
    pub fn with_transport(conf: ResolvConf, transport: T) -> Self {
        IterativeResolver { conf, transport }
    }

    /// Returns a reference to the configuration of the resolver.
    pub fn conf(&self) -> &ResolvConf {
        &self.conf
    }

    /// Returns a reference to the transport of the resolver.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves a domain name to an IPv4 address.
    ///
    /// Builds an A query for `qname` and sends it to the configured root
    /// name server. As long as replies carry no answer but name a further
    /// server through an address record in their additional section, the
    /// same query octets are sent on to that server, with recursion no
    /// longer requested. The first record of the first non-empty answer
    /// section is the result.
    ///
    /// The walk fails with a [`ResolveError`] if a reply can neither be
    /// answered nor followed, if decoding a reply fails, if a server does
    /// not reply in time, or if the chain of referrals exceeds the
    /// configured hop limit or revisits a server.
    pub fn resolve(&self, qname: &Name) -> Result<Ipv4Addr, ResolveError> {
        let (mut query, id) = self.build_query(qname);
        let mut server = self.conf.root_server;
        let mut visited = Vec::new();

        loop {
            if visited.len() >= self.conf.max_hops {
                return Err(ResolveError::DepthExceeded);
            }
            if visited.contains(&server) {
                return Err(ResolveError::ReferralCycle);
            }
            visited.push(server);

            debug!(hop = visited.len(), %server, "querying name server");
            let reply = self.transport.request(&query, server)?;
            let msg = Message::from_octets(reply)?;
            if !msg.is_answer_to(id) {
                warn!(
                    id,
                    reply_id = msg.header().id(),
                    "reply does not match query"
                );
            }
            debug!(
                rcode = %msg.header().rcode(),
                answers = msg.answers().len(),
                authorities = msg.authorities().len(),
                additionals = msg.additionals().len(),
                "received reply"
            );

            if let Some(record) = msg.answers().first() {
                return record.ipv4_addr().ok_or_else(|| {
                    ResolveError::Malformed(
                        FormError::new(
                            "first answer is not an address record",
                        )
                        .into(),
                    )
                });
            }

            server = match referral(&msg) {
                Some(record) => match record.ipv4_addr() {
                    Some(addr) => SocketAddr::new(IpAddr::V4(addr), 53),
                    None => {
                        return Err(ResolveError::Malformed(
                            FormError::new(
                                "malformed address record in referral",
                            )
                            .into(),
                        ))
                    }
                },
                None => return Err(ResolveError::NoReferral),
            };
            // Referral hops address a specific authoritative or referring
            // server directly and never ask it to recurse, whatever the
            // first hop did.
            Header::for_message_slice_mut(&mut query).set_rd(false);
            debug!(%server, "following referral");
        }
    }

    /// Builds the query message for `qname`.
    ///
    /// Returns the assembled octets together with the randomly chosen
    /// message ID so replies can be checked against it.
    fn build_query(&self, qname: &Name) -> (Vec<u8>, u16) {
        let mut msg = MessageBuilder::new_vec();
        msg.header_mut().set_random_id();
        msg.header_mut().set_rd(self.conf.recursion_desired);
        msg.push(&Question::new_in(qname.clone(), Rtype::A));
        let id = msg.header().id();
        (msg.finish(), id)
    }
}

/// Returns the first address type record of the additional section.
fn referral(msg: &Message) -> Option<&Record> {
    msg.additionals()
        .iter()
        .find(|record| record.rtype() == Rtype::A)
}
