//! Accessing received DNS messages.

use super::header::{Header, HeaderCounts, HeaderSection};
use super::name::ParsedName;
use super::question::Question;
use super::record::Record;
use super::wire::ParseError;
use bytes::Bytes;
use octseq::parse::Parser;

//------------ Message -------------------------------------------------------

/// A DNS message received from a server, taken apart into its sections.
///
/// The message is decoded eagerly by [`from_octets`][Self::from_octets]:
/// the header section first, then as many questions as the QDCOUNT field
/// announces, then the three record sections with as many records each as
/// their counter announces. The counts are trusted to know how many
/// entries to decode, but every read along the way is bounds checked, so
/// a header lying about its counts relative to the actual buffer length
/// surfaces as a [`ParseError`] rather than a wild read.
///
/// Octets after the last announced record are ignored.
#[derive(Clone, Debug)]
pub struct Message {
    /// The header section.
    header: HeaderSection,

    /// The questions of the question section.
    questions: Vec<Question<ParsedName>>,

    /// The records of the answer section.
    answers: Vec<Record>,

    /// The records of the authority section.
    authorities: Vec<Record>,

    /// The records of the additional section.
    additionals: Vec<Record>,
}

/// # Creation
///
impl Message {
    /// Creates a message by parsing an octets sequence.
    pub fn from_octets(octets: Bytes) -> Result<Self, ParseError> {
        let mut parser = Parser::from_ref(&octets);
        let header = HeaderSection::parse(&mut parser)?;
        let counts = *header.counts();
        let mut questions = Vec::new();
        for _ in 0..counts.qdcount() {
            questions.push(Question::parse(&mut parser)?);
        }
        let answers = Self::parse_records(&mut parser, counts.ancount())?;
        let authorities = Self::parse_records(&mut parser, counts.nscount())?;
        let additionals = Self::parse_records(&mut parser, counts.arcount())?;
        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    /// Parses `count` resource records appearing back to back.
    fn parse_records(
        parser: &mut Parser<'_, Bytes>,
        count: u16,
    ) -> Result<Vec<Record>, ParseError> {
        let mut records = Vec::new();
        for _ in 0..count {
            records.push(Record::parse(parser)?);
        }
        Ok(records)
    }
}

/// # Header Section
///
impl Message {
    /// Returns the message header.
    pub fn header(&self) -> Header {
        *self.header.header()
    }

    /// Returns the header counts of the message.
    pub fn header_counts(&self) -> HeaderCounts {
        *self.header.counts()
    }

    /// Returns whether this message is a response to a query with the
    /// given message ID.
    ///
    /// The method checks that the QR bit is set and that the ID field
    /// echoes the one of the query.
    pub fn is_answer_to(&self, id: u16) -> bool {
        self.header().qr() && self.header().id() == id
    }
}

/// # Access to Sections
///
impl Message {
    /// Returns the questions of the question section.
    pub fn questions(&self) -> &[Question<ParsedName>] {
        &self.questions
    }

    /// Returns the first question, if there is any.
    pub fn first_question(&self) -> Option<&Question<ParsedName>> {
        self.questions.first()
    }

    /// Returns the records of the answer section.
    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    /// Returns the records of the authority section.
    pub fn authorities(&self) -> &[Record] {
        &self.authorities
    }

    /// Returns the records of the additional section.
    pub fn additionals(&self) -> &[Record] {
        &self.additionals
    }
}

//============ Testing =======================================================
