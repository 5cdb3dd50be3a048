//! A single question in a DNS message.
//!
//! This module defines the type [`Question`] which represents an entry in
//! the question section of a DNS message.

use super::iana::{Class, Rtype};
use super::name::{Name, ParsedName};
use super::wire::{compose_u16, ParseError};
use core::fmt;
use octseq::parse::Parser;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// A question describes what is requested in a query. It consists of
/// three elements: a domain name, a record type, and a class. The
/// messages built by this crate carry exactly one question.
///
/// The type is generic over the domain name: questions built for an
/// outgoing query use [`Name`] while questions read from a received
/// message use [`ParsedName`], since the name may have been compressed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question<N> {
    /// The domain name of the question.
    qname: N,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the question.
    qclass: Class,
}

/// # Creation and Conversion
///
impl<N> Question<N> {
    /// Creates a new question from its three componets.
    pub fn new(qname: N, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname,
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming
    /// class IN.
    pub fn new_in(qname: N, qtype: Rtype) -> Self {
        Question {
            qname,
            qtype,
            qclass: Class::IN,
        }
    }

    /// Converts the question into the qname.
    pub fn into_qname(self) -> N {
        self.qname
    }
}

/// # Field Access
///
impl<N> Question<N> {
    /// Returns a reference to the domain name in the question.
    pub fn qname(&self) -> &N {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

/// # Parsing and Composing
///
impl Question<ParsedName> {
    /// Takes a question from the beginning of a parser.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        Ok(Question {
            qname: ParsedName::parse(parser)?,
            qtype: Rtype::from_int(parser.parse_u16_be()?),
            qclass: Class::from_int(parser.parse_u16_be()?),
        })
    }
}

impl Question<Name> {
    /// Appends the question to a message under construction.
    pub fn compose(&self, target: &mut Vec<u8>) {
        self.qname.compose(target);
        compose_u16(target, self.qtype.to_int());
        compose_u16(target, self.qclass.to_int());
    }
}

//--- From

impl<N> From<(N, Rtype, Class)> for Question<N> {
    fn from((qname, qtype, qclass): (N, Rtype, Class)) -> Self {
        Question::new(qname, qtype, qclass)
    }
}

impl<N> From<(N, Rtype)> for Question<N> {
    fn from((qname, qtype): (N, Rtype)) -> Self {
        Question::new_in(qname, qtype)
    }
}

//--- Display

impl<N: fmt::Display> fmt::Display for Question<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.qname, self.qclass, self.qtype)
    }
}

//============ Testing =======================================================
