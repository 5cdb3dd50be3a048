//! Building a DNS query message.

use super::header::{Header, HeaderCounts};
use super::name::Name;
use super::question::Question;

//------------ MessageBuilder ------------------------------------------------

/// A builder for a DNS query message.
///
/// The builder starts out with an all zero header section on top of an
/// empty message. Header fields can be modified in place at any time
/// through [`header_mut`][Self::header_mut]; appending a question through
/// [`push`][Self::push] bumps the QDCOUNT field in the assembled octets.
///
/// Only queries are ever built, i.e., messages consisting of a header and
/// a question section. Composing records into the three record sections
/// is not provided for since a query does not carry any.
#[derive(Clone, Debug)]
pub struct MessageBuilder {
    /// The message under construction.
    target: Vec<u8>,
}

/// # Creation
///
impl MessageBuilder {
    /// Creates a new message builder atop an empty message.
    pub fn new_vec() -> Self {
        MessageBuilder {
            target: vec![0; 12],
        }
    }
}

/// # Access to the Header
///
impl MessageBuilder {
    /// Returns the message header.
    pub fn header(&self) -> Header {
        *Header::for_message_slice(&self.target)
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        Header::for_message_slice_mut(&mut self.target)
    }

    /// Returns the header counts of the message.
    pub fn counts(&self) -> HeaderCounts {
        *HeaderCounts::for_message_slice(&self.target)
    }

    /// Returns a mutable reference to the header counts.
    fn counts_mut(&mut self) -> &mut HeaderCounts {
        HeaderCounts::for_message_slice_mut(&mut self.target)
    }
}

/// # Building
///
impl MessageBuilder {
    /// Appends a question to the message.
    pub fn push(&mut self, question: &Question<Name>) {
        question.compose(&mut self.target);
        self.counts_mut().inc_qdcount();
    }

    /// Returns the octets of the message as assembled so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.target
    }

    /// Finishes the message, returning its octets.
    pub fn finish(self) -> Vec<u8> {
        self.target
    }
}

//--- Default

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new_vec()
    }
}

//============ Testing =======================================================
