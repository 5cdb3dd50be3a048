//! Driving the resolver over a scripted transport.
//!
//! These tests replace the UDP transport with one replaying canned
//! replies, so entire delegation walks run without touching the network.
//! Replies are built by hand since the crate itself only ever composes
//! queries.

use bytes::Bytes;
use rootwalk::base::iana::{Class, Rtype};
use rootwalk::base::name::Name;
use rootwalk::base::wire::{compose_u16, compose_u32};
use rootwalk::resolv::{
    DgramTransport, IterativeResolver, ResolvConf, ResolveError,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

//------------ Script --------------------------------------------------------

/// A transport replaying a fixed sequence of replies.
///
/// Every request pops the next scripted reply; requesting more replies
/// than scripted fails the test. The servers asked are recorded so tests
/// can check where queries went and how many there were.
struct Script {
    replies: RefCell<VecDeque<Reply>>,
    queried: RefCell<Vec<SocketAddr>>,
    queries: RefCell<Vec<Vec<u8>>>,
}

enum Reply {
    Datagram(Vec<u8>),
    Timeout,
}

impl Script {
    fn new(replies: Vec<Reply>) -> Self {
        Script {
            replies: RefCell::new(replies.into()),
            queried: RefCell::new(Vec::new()),
            queries: RefCell::new(Vec::new()),
        }
    }

    fn queried(&self) -> Vec<SocketAddr> {
        self.queried.borrow().clone()
    }

    fn queries(&self) -> Vec<Vec<u8>> {
        self.queries.borrow().clone()
    }
}

impl DgramTransport for Script {
    fn request(
        &self,
        query: &[u8],
        server: SocketAddr,
    ) -> Result<Bytes, ResolveError> {
        self.queried.borrow_mut().push(server);
        self.queries.borrow_mut().push(query.to_vec());
        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Datagram(mut reply)) => {
                // Echo the query ID like a real server does.
                reply[..2].copy_from_slice(&query[..2]);
                Ok(reply.into())
            }
            Some(Reply::Timeout) => Err(ResolveError::Timeout),
            None => panic!("resolver sent more queries than scripted"),
        }
    }
}

//------------ Reply construction --------------------------------------------

/// Appends a resource record with a compressed name to `target`.
fn push_record(target: &mut Vec<u8>, rtype: Rtype, data: &[u8]) {
    target.extend_from_slice(b"\xC0\x0C");
    compose_u16(target, rtype.to_int());
    compose_u16(target, Class::IN.to_int());
    compose_u32(target, 172800);
    compose_u16(target, data.len() as u16);
    target.extend_from_slice(data);
}

/// Builds a reply carrying the given answer and additional records.
///
/// The ID field is left at zero; the scripted transport patches in the
/// query's ID on delivery.
fn build_reply(
    answers: &[(Rtype, &[u8])],
    additionals: &[(Rtype, &[u8])],
) -> Reply {
    let mut target = Vec::new();
    compose_u16(&mut target, 0);
    compose_u16(&mut target, 0x8000);
    compose_u16(&mut target, 1);
    compose_u16(&mut target, answers.len() as u16);
    compose_u16(&mut target, 0);
    compose_u16(&mut target, additionals.len() as u16);
    "www.example.com".parse::<Name>().unwrap().compose(&mut target);
    compose_u16(&mut target, Rtype::A.to_int());
    compose_u16(&mut target, Class::IN.to_int());
    for &(rtype, data) in answers {
        push_record(&mut target, rtype, data);
    }
    for &(rtype, data) in additionals {
        push_record(&mut target, rtype, data);
    }
    Reply::Datagram(target)
}

/// Builds a reply referring to the given address.
fn build_referral(addr: Ipv4Addr) -> Reply {
    build_reply(&[], &[(Rtype::A, &addr.octets())])
}

/// Builds a reply answering with the given address.
fn build_answer(addr: Ipv4Addr) -> Reply {
    build_reply(&[(Rtype::A, &addr.octets())], &[])
}

fn server(addr: Ipv4Addr) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(addr), 53)
}

fn resolver(
    conf: ResolvConf,
    replies: Vec<Reply>,
) -> IterativeResolver<Script> {
    IterativeResolver::with_transport(conf, Script::new(replies))
}

fn qname() -> Name {
    "www.example.com".parse().unwrap()
}

//------------ Tests ---------------------------------------------------------

#[test]
fn walk_follows_referral() {
    let tld = Ipv4Addr::new(192, 5, 6, 30);
    let answer = Ipv4Addr::new(142, 250, 4, 139);
    let conf = ResolvConf::new();
    let root = conf.root_server;
    let resolver = resolver(
        conf,
        vec![build_referral(tld), build_answer(answer)],
    );

    assert_eq!(resolver.resolve(&qname()).unwrap(), answer);
    // One referral means exactly one further query.
    assert_eq!(resolver.transport().queried(), [root, server(tld)]);
}

#[test]
fn first_address_additional_wins() {
    let first = Ipv4Addr::new(192, 5, 6, 30);
    let second = Ipv4Addr::new(192, 33, 14, 30);
    let answer = Ipv4Addr::new(142, 250, 4, 139);
    let resolver = resolver(
        ResolvConf::new(),
        vec![
            build_reply(
                &[],
                &[
                    (Rtype::NS, b"\x02ns\x00"),
                    (Rtype::A, &first.octets()),
                    (Rtype::A, &second.octets()),
                ],
            ),
            build_answer(answer),
        ],
    );

    assert_eq!(resolver.resolve(&qname()).unwrap(), answer);
    assert_eq!(resolver.transport().queried()[1], server(first));
}

#[test]
fn no_referral_fails_without_further_queries() {
    let resolver = resolver(
        ResolvConf::new(),
        vec![build_reply(&[], &[(Rtype::NS, b"\x02ns\x00")])],
    );

    assert!(matches!(
        resolver.resolve(&qname()),
        Err(ResolveError::NoReferral)
    ));
    assert_eq!(resolver.transport().queried().len(), 1);
}

#[test]
fn referral_cycle_is_detected() {
    let conf = ResolvConf::new();
    let root = match conf.root_server.ip() {
        IpAddr::V4(addr) => addr,
        IpAddr::V6(_) => unreachable!(),
    };
    let resolver = resolver(conf, vec![build_referral(root)]);

    assert!(matches!(
        resolver.resolve(&qname()),
        Err(ResolveError::ReferralCycle)
    ));
    assert_eq!(resolver.transport().queried().len(), 1);
}

#[test]
fn hop_limit_is_enforced() {
    let mut conf = ResolvConf::new();
    conf.max_hops = 3;
    let resolver = resolver(
        conf,
        vec![
            build_referral(Ipv4Addr::new(10, 0, 0, 1)),
            build_referral(Ipv4Addr::new(10, 0, 0, 2)),
            build_referral(Ipv4Addr::new(10, 0, 0, 3)),
        ],
    );

    assert!(matches!(
        resolver.resolve(&qname()),
        Err(ResolveError::DepthExceeded)
    ));
    assert_eq!(resolver.transport().queried().len(), 3);
}

#[test]
fn referral_hops_never_request_recursion() {
    let mut conf = ResolvConf::new();
    conf.recursion_desired = true;
    let resolver = resolver(
        conf,
        vec![
            build_referral(Ipv4Addr::new(192, 5, 6, 30)),
            build_answer(Ipv4Addr::new(142, 250, 4, 139)),
        ],
    );
    resolver.resolve(&qname()).unwrap();

    let queries = resolver.transport().queries();
    assert_eq!(queries.len(), 2);
    // The RD bit is the low bit of the third header octet.
    assert_eq!(queries[0][2] & 0x01, 0x01);
    assert_eq!(queries[1][2] & 0x01, 0x00);
    // Apart from the flag the referral hop repeats the query unchanged.
    assert_eq!(queries[0][..2], queries[1][..2]);
    assert_eq!(queries[0][3..], queries[1][3..]);
}

#[test]
fn same_query_repeated_when_not_recursing() {
    let resolver = resolver(
        ResolvConf::new(),
        vec![
            build_referral(Ipv4Addr::new(192, 5, 6, 30)),
            build_answer(Ipv4Addr::new(142, 250, 4, 139)),
        ],
    );
    resolver.resolve(&qname()).unwrap();

    let queries = resolver.transport().queries();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[0], queries[1]);
}

#[test]
fn timeout_surfaces() {
    let resolver = resolver(ResolvConf::new(), vec![Reply::Timeout]);
    assert!(matches!(
        resolver.resolve(&qname()),
        Err(ResolveError::Timeout)
    ));
}

#[test]
fn malformed_reply_fails() {
    let resolver = resolver(
        ResolvConf::new(),
        vec![Reply::Datagram(b"\x00\x00\x81\x80\x00".to_vec())],
    );
    assert!(matches!(
        resolver.resolve(&qname()),
        Err(ResolveError::Malformed(_))
    ));
}

#[test]
fn answer_of_wrong_type_fails() {
    let resolver = resolver(
        ResolvConf::new(),
        vec![build_reply(&[(Rtype::CNAME, b"\x03www\xC0\x0C")], &[])],
    );
    assert!(matches!(
        resolver.resolve(&qname()),
        Err(ResolveError::Malformed(_))
    ));
}
