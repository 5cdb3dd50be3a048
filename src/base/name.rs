//! Domain names.
//!
//! Domain names appear in messages as a sequence of labels, each preceded
//! by a one octet length, terminated by the zero length root label. Names
//! in a received message may additionally be shortened through name
//! compression: a two octet field whose top two bits are both set points
//! at an earlier occurence of the remaining labels within the same
//! message.
//!
//! Two types deal with these two situations. [`Name`] is an owned,
//! uncompressed name, the form needed for building questions. It can be
//! created from the usual dotted representation and validates label and
//! name lengths while doing so. [`ParsedName`] is a name as encountered
//! while walking a message and may be compressed. Since nothing in this
//! crate ever needs the text hiding behind a compression pointer, a
//! compressed name keeps the raw pointer target instead of chasing it;
//! what matters is that the wire length of the name field is accounted
//! for exactly.

use super::wire::{FormError, ParseError};
use core::{fmt, str};
use octseq::parse::Parser;

/// The maximum length of a label.
const MAX_LABEL_LEN: usize = 63;

/// The maximum length of the wire format of a name.
const MAX_NAME_LEN: usize = 255;

//------------ Name ----------------------------------------------------------

/// An absolute, uncompressed domain name.
///
/// The name is kept in its wire format: for each label a length octet
/// followed by that many octets of content, with the empty root label at
/// the end.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Name {
    /// The octets of the name in wire representation.
    octets: Vec<u8>,
}

/// # Creation and Conversion
///
impl Name {
    /// Creates the name consisting of the root label only.
    pub fn root() -> Self {
        Name { octets: vec![0] }
    }

    /// Returns whether the name consists of the root label only.
    pub fn is_root(&self) -> bool {
        self.octets.len() == 1
    }

    /// Returns the wire format of the name.
    pub fn as_slice(&self) -> &[u8] {
        &self.octets
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The iterator does not produce the final root label.
    pub fn iter_labels(&self) -> Labels<'_> {
        Labels {
            slice: &self.octets,
        }
    }
}

/// # Parsing and Composing
///
impl Name {
    /// Takes an uncompressed name from the beginning of a parser.
    ///
    /// A name that starts with or runs into a compression pointer is
    /// refused with a form error. Use [`ParsedName::parse`] where
    /// compressed names are acceptable.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        match ParsedName::parse(parser)? {
            ParsedName::Plain(name) => Ok(name),
            ParsedName::Compressed(_) => {
                Err(FormError::new("compressed domain name").into())
            }
        }
    }

    /// Appends the name to a message under construction.
    pub fn compose(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(&self.octets)
    }
}

//--- FromStr

impl str::FromStr for Name {
    type Err = NameError;

    /// Creates a name from its dotted textual representation.
    ///
    /// The name may or may not end in a dot. Labels have to consist of
    /// printable ASCII identifier symbols and must not be longer than 63
    /// octets each.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "." {
            return Ok(Self::root());
        }
        let s = s.strip_suffix('.').unwrap_or(s);
        let mut octets = Vec::with_capacity(s.len() + 2);
        for label in s.split('.') {
            if label.is_empty() {
                return Err(NameError::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(NameError::LongLabel);
            }
            if let Some(ch) = label
                .chars()
                .find(|&ch| !ch.is_ascii_alphanumeric() && ch != '-' && ch != '_')
            {
                return Err(NameError::BadSymbol(ch));
            }
            octets.push(label.len() as u8);
            octets.extend_from_slice(label.as_bytes());
        }
        octets.push(0);
        if octets.len() > MAX_NAME_LEN {
            return Err(NameError::LongName);
        }
        Ok(Name { octets })
    }
}

//--- Display

impl fmt::Display for Name {
    /// Formats the name in its dotted representation.
    ///
    /// The root name is formatted as a sole dot, all other names without
    /// a trailing dot. Unusual octets in labels are escaped.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        let mut first = true;
        for label in self.iter_labels() {
            if first {
                first = false;
            } else {
                f.write_str(".")?;
            }
            for &ch in label {
                if ch == b'.' || ch == b'\\' {
                    write!(f, "\\{}", ch as char)?;
                } else if ch.is_ascii_graphic() {
                    write!(f, "{}", ch as char)?;
                } else {
                    write!(f, "\\{:03}", ch)?;
                }
            }
        }
        Ok(())
    }
}

//------------ Labels --------------------------------------------------------

/// An iterator over the labels of a name.
///
/// Created through [`Name::iter_labels`]. The root label is not produced.
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    /// The portion of the name not yet walked over.
    slice: &'a [u8],
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, rest) = self.slice.split_first()?;
        if len == 0 {
            self.slice = &[];
            return None;
        }
        let (label, rest) = rest.split_at(usize::from(len));
        self.slice = rest;
        Some(label)
    }
}

//------------ ParsedName ----------------------------------------------------

/// A domain name taken from a received message.
///
/// The name either appeared as a plain label sequence or it ended in a
/// compression pointer. In the latter case only the pointer target is
/// kept. The labels behind the pointer are never read: all the resolver
/// needs from a record's name field is how many octets it occupied so
/// that the fields after it can be located, and a pointer occupies
/// exactly two.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ParsedName {
    /// The name appeared as a full label sequence.
    Plain(Name),

    /// The name ended in a compression pointer to the given offset.
    ///
    /// Any labels preceding the pointer have already been discarded.
    Compressed(u16),
}

impl ParsedName {
    /// Takes a name from the beginning of a parser.
    ///
    /// The parser is advanced over exactly the octets the name field
    /// occupies in the message: up to and including the root label for a
    /// plain name, or up to and including the two pointer octets for a
    /// compressed one.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        let mut octets = Vec::new();
        loop {
            let len = parser.parse_u8()?;
            match len & 0xC0 {
                0x00 => {
                    if len == 0 {
                        octets.push(0);
                        return Ok(ParsedName::Plain(Name { octets }));
                    }
                    if octets.len() + usize::from(len) + 2 > MAX_NAME_LEN {
                        return Err(
                            FormError::new("long domain name").into()
                        );
                    }
                    octets.push(len);
                    let start = octets.len();
                    octets.resize(start + usize::from(len), 0);
                    parser.parse_buf(&mut octets[start..])?;
                }
                0xC0 => {
                    let target = u16::from(len & 0x3F) << 8
                        | u16::from(parser.parse_u8()?);
                    return Ok(ParsedName::Compressed(target));
                }
                _ => {
                    return Err(FormError::new("unknown label type").into())
                }
            }
        }
    }

    /// Returns whether the name ended in a compression pointer.
    pub fn is_compressed(&self) -> bool {
        matches!(*self, ParsedName::Compressed(_))
    }

    /// Returns the name if it was not compressed.
    pub fn as_name(&self) -> Option<&Name> {
        match *self {
            ParsedName::Plain(ref name) => Some(name),
            ParsedName::Compressed(_) => None,
        }
    }

    /// Returns the pointer target if the name was compressed.
    pub fn pointer(&self) -> Option<u16> {
        match *self {
            ParsedName::Plain(_) => None,
            ParsedName::Compressed(target) => Some(target),
        }
    }
}

//============ Error Types ===================================================

//------------ NameError -----------------------------------------------------

/// An error happened while creating a name from its textual form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// A label was empty.
    EmptyLabel,

    /// A label was longer than 63 octets.
    LongLabel,

    /// The name as a whole was longer than 255 octets.
    LongName,

    /// The name contained a symbol outside the plain identifier set.
    BadSymbol(char),
}

//--- Display and Error

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NameError::EmptyLabel => f.write_str("empty label"),
            NameError::LongLabel => f.write_str("label exceeds 63 octets"),
            NameError::LongName => f.write_str("name exceeds 255 octets"),
            NameError::BadSymbol(ch) => {
                write!(f, "unexpected symbol '{}'", ch)
            }
        }
    }
}

impl std::error::Error for NameError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn name(s: &str) -> Name {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            name("www.example.com").as_slice(),
            b"\x03www\x07example\x03com\x00"
        );
        assert_eq!(
            name("www.example.com.").as_slice(),
            b"\x03www\x07example\x03com\x00"
        );
        assert_eq!(name(".").as_slice(), b"\x00");
        assert_eq!("com".parse::<Name>().unwrap().as_slice(), b"\x03com\x00");
    }

    #[test]
    fn from_str_errors() {
        assert_eq!(
            "www..com".parse::<Name>(),
            Err(NameError::EmptyLabel)
        );
        assert_eq!("".parse::<Name>(), Err(NameError::EmptyLabel));
        assert_eq!(
            format!("{}.com", "x".repeat(64)).parse::<Name>(),
            Err(NameError::LongLabel)
        );
        assert!(format!("{}.com", "x".repeat(63)).parse::<Name>().is_ok());
        assert_eq!(
            "foo bar.com".parse::<Name>(),
            Err(NameError::BadSymbol(' '))
        );
        let label = "x".repeat(63);
        assert_eq!(
            format!("{0}.{0}.{0}.{0}", label).parse::<Name>(),
            Err(NameError::LongName)
        );
    }

    #[test]
    fn encode_decode_roundtrip() {
        for text in ["dns.google.com", "a.root-servers.net", "com", "."] {
            let encoded = name(text);
            let mut parser = Parser::from_ref(encoded.as_slice());
            let decoded = Name::parse(&mut parser).unwrap();
            assert_eq!(decoded, encoded);
            assert_eq!(parser.pos(), encoded.as_slice().len());
        }
    }

    #[test]
    fn display() {
        assert_eq!(name("www.Example.com").to_string(), "www.Example.com");
        assert_eq!(name("com.").to_string(), "com");
        assert_eq!(name(".").to_string(), ".");
    }

    #[test]
    fn parse_compressed() {
        // A pointer field occupies exactly two octets, whatever follows.
        let buf = b"\xC0\x0C\x03www\x00";
        let mut parser = Parser::from_ref(buf.as_slice());
        assert_eq!(
            ParsedName::parse(&mut parser),
            Ok(ParsedName::Compressed(0x0C))
        );
        assert_eq!(parser.pos(), 2);

        let mut parser = Parser::from_ref(b"\xFF\xFF".as_slice());
        assert_eq!(
            ParsedName::parse(&mut parser),
            Ok(ParsedName::Compressed(0x3FFF))
        );
        assert_eq!(parser.pos(), 2);
    }

    #[test]
    fn parse_labels_then_pointer() {
        let buf = b"\x03www\xC0\x10rest";
        let mut parser = Parser::from_ref(buf.as_slice());
        assert_eq!(
            ParsedName::parse(&mut parser),
            Ok(ParsedName::Compressed(0x10))
        );
        assert_eq!(parser.pos(), 6);
    }

    #[test]
    fn parse_errors() {
        let mut parser = Parser::from_ref(b"\x03ww".as_slice());
        assert_eq!(
            ParsedName::parse(&mut parser),
            Err(ParseError::ShortInput)
        );

        // Missing root label.
        let mut parser = Parser::from_ref(b"\x03www".as_slice());
        assert_eq!(
            ParsedName::parse(&mut parser),
            Err(ParseError::ShortInput)
        );

        // A pointer cut off after its first octet.
        let mut parser = Parser::from_ref(b"\xC0".as_slice());
        assert_eq!(
            ParsedName::parse(&mut parser),
            Err(ParseError::ShortInput)
        );

        // The 0b01 and 0b10 label types have never been deployed.
        let mut parser = Parser::from_ref(b"\x43abc\x00".as_slice());
        assert!(matches!(
            ParsedName::parse(&mut parser),
            Err(ParseError::Form(_))
        ));

        let mut parser = Parser::from_ref(b"\x03www\x00".as_slice());
        assert_eq!(
            Name::parse(&mut parser).unwrap(),
            name("www")
        );
        let mut parser = Parser::from_ref(b"\xC0\x0C".as_slice());
        assert!(matches!(
            Name::parse(&mut parser),
            Err(ParseError::Form(_))
        ));
    }
}
