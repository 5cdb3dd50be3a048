//! Resource records.
//!
//! All information available through the DNS is stored in resource
//! records. A record appears in the answer, authority, or additional
//! section of a message; the structure is the same in all three, only the
//! semantic role differs.
//!
//! Record data is kept in its raw form. Its interpretation depends on the
//! record type and this resolver only ever looks inside one kind: the
//! four address octets of an A record.

use super::iana::{Class, Rtype};
use super::name::ParsedName;
use super::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::parse::Parser;
use std::net::Ipv4Addr;

//------------ Record --------------------------------------------------------

/// A resource record taken from a received message.
///
/// A record has a three part key of the domain name it pertains to, its
/// record type, and its class, plus the time to live stating how long the
/// record may be kept around. The payload is the record data, kept here
/// as the raw octets found on the wire.
#[derive(Clone, Debug)]
pub struct Record {
    /// The name of the node the record pertains to.
    name: ParsedName,

    /// The record type.
    rtype: Rtype,

    /// The class of the record.
    class: Class,

    /// How long the record may be cached, in seconds.
    ttl: u32,

    /// The raw record data.
    data: Bytes,
}

/// # Field Access
///
impl Record {
    /// Returns a reference to the name of the record.
    pub fn name(&self) -> &ParsedName {
        &self.name
    }

    /// Returns the type of the record.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the time to live of the record in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns a reference to the raw record data.
    pub fn rdata(&self) -> &Bytes {
        &self.data
    }

    /// Returns the record data as an IPv4 address.
    ///
    /// This succeeds only for an A record whose data has the correct
    /// length of four octets.
    pub fn ipv4_addr(&self) -> Option<Ipv4Addr> {
        if self.rtype != Rtype::A {
            return None;
        }
        <[u8; 4]>::try_from(self.data.as_ref()).ok().map(Ipv4Addr::from)
    }
}

/// # Parsing
///
impl Record {
    /// Takes a record from the beginning of a parser.
    ///
    /// The name has to be taken off the parser first since its length
    /// varies; only then are the fixed fields and the data, whose length
    /// the RDLENGTH field provides, at known positions.
    pub fn parse(parser: &mut Parser<'_, Bytes>) -> Result<Self, ParseError> {
        let name = ParsedName::parse(parser)?;
        let rtype = Rtype::from_int(parser.parse_u16_be()?);
        let class = Class::from_int(parser.parse_u16_be()?);
        let ttl = parser.parse_u32_be()?;
        let rdlen = parser.parse_u16_be()?;
        let data = parser.parse_octets(usize::from(rdlen))?;
        Ok(Record {
            name,
            rtype,
            class,
            ttl,
            data,
        })
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} octets",
            self.ttl,
            self.class,
            self.rtype,
            self.data.len()
        )?;
        if let Some(addr) = self.ipv4_addr() {
            write!(f, " {}", addr)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::name::Name;

    #[test]
    fn parse_plain_name() {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"\x03www\x07example\x03com\x00");
        buf.extend_from_slice(b"\x00\x01\x00\x01");
        buf.extend_from_slice(&3600u32.to_be_bytes());
        buf.extend_from_slice(b"\x00\x04\x5D\xB8\xD8\x22");
        let octets = Bytes::from(buf);

        let mut parser = Parser::from_ref(&octets);
        let record = Record::parse(&mut parser).unwrap();
        assert_eq!(
            record.name().as_name(),
            Some(&"www.example.com".parse::<Name>().unwrap())
        );
        assert_eq!(record.rtype(), Rtype::A);
        assert_eq!(record.class(), Class::IN);
        assert_eq!(record.ttl(), 3600);
        assert_eq!(record.rdata().as_ref(), b"\x5D\xB8\xD8\x22");
        assert_eq!(
            record.ipv4_addr(),
            Some(Ipv4Addr::new(93, 184, 216, 34))
        );
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn parse_compressed_name() {
        // NAME is a pointer: two octets, then the ten fixed octets, then
        // the data.
        let octets = Bytes::from_static(
            b"\xC0\x0C\x00\x01\x00\x01\x00\x00\x0E\x10\x00\x04\x08\x08\x08\x08",
        );
        let mut parser = Parser::from_ref(&octets);
        let record = Record::parse(&mut parser).unwrap();
        assert!(record.name().is_compressed());
        assert_eq!(record.name().pointer(), Some(0x0C));
        assert_eq!(record.ipv4_addr(), Some(Ipv4Addr::new(8, 8, 8, 8)));
        assert_eq!(parser.pos(), 16);
    }

    #[test]
    fn addr_formatting() {
        use std::net::SocketAddr;

        let octets = Bytes::from_static(
            b"\xC0\x0C\x00\x01\x00\x01\x00\x00\x0E\x10\x00\x04\x08\x08\x08\x08",
        );
        let mut parser = Parser::from_ref(&octets);
        let addr = Record::parse(&mut parser).unwrap().ipv4_addr().unwrap();
        assert_eq!(addr.to_string(), "8.8.8.8");
        assert_eq!(
            SocketAddr::new(addr.into(), 53).to_string(),
            "8.8.8.8:53"
        );
    }

    #[test]
    fn ipv4_addr_needs_a_record() {
        let octets = Bytes::from_static(
            // An NS record whose data happens to be four octets long.
            b"\xC0\x0C\x00\x02\x00\x01\x00\x00\x0E\x10\x00\x04\x08\x08\x08\x08",
        );
        let mut parser = Parser::from_ref(&octets);
        let record = Record::parse(&mut parser).unwrap();
        assert_eq!(record.rtype(), Rtype::NS);
        assert_eq!(record.ipv4_addr(), None);
    }

    #[test]
    fn parse_short_data() {
        // RDLENGTH claims four octets but only three are left.
        let octets = Bytes::from_static(
            b"\xC0\x0C\x00\x01\x00\x01\x00\x00\x0E\x10\x00\x04\x08\x08\x08",
        );
        let mut parser = Parser::from_ref(&octets);
        assert_eq!(
            Record::parse(&mut parser).unwrap_err(),
            ParseError::ShortInput
        );
    }
}
