//! The rootwalk command line tool.
//!
//! Resolves a domain name to an IPv4 address by walking the delegation
//! hierarchy, printing the address to standard output. Diagnostics go to
//! standard error; set `RUST_LOG=debug` to watch the walk hop by hop.

use rootwalk::base::name::Name;
use rootwalk::resolv::{IterativeResolver, ResolvConf};
use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;
use std::{env, io};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut recurse = false;
    let mut rest = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "-r" {
            recurse = true;
        } else {
            rest.push(arg);
        }
    }
    let (domain, server) = match rest.len() {
        1 => (rest[0].as_str(), None),
        2 => (rest[0].as_str(), Some(rest[1].as_str())),
        _ => {
            eprintln!("Usage: rootwalk [-r] <domain> [server]");
            return ExitCode::from(2);
        }
    };

    let qname: Name = match domain.parse() {
        Ok(name) => name,
        Err(err) => {
            eprintln!("rootwalk: bad domain name '{}': {}", domain, err);
            return ExitCode::from(2);
        }
    };

    let mut conf = ResolvConf::new();
    conf.recursion_desired = recurse;
    if let Some(server) = server {
        conf.root_server = match parse_server(server) {
            Some(addr) => addr,
            None => {
                eprintln!("rootwalk: bad server address '{}'", server);
                return ExitCode::from(2);
            }
        };
    }

    match IterativeResolver::new(conf).resolve(&qname) {
        Ok(addr) => {
            println!("{}", addr);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("rootwalk: failed to resolve {}: {}", qname, err);
            ExitCode::FAILURE
        }
    }
}

/// Parses a server argument, with or without a port.
///
/// A bare IP address gets the conventional port 53.
fn parse_server(s: &str) -> Option<SocketAddr> {
    if let Ok(addr) = s.parse::<SocketAddr>() {
        return Some(addr);
    }
    s.parse::<IpAddr>().ok().map(|ip| SocketAddr::new(ip, 53))
}
