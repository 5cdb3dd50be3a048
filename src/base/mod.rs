//! DNS data and the wire format.
//!
//! This module provides the types needed to build a query message and to
//! take a reply message apart again. Parsing and composing both happen on
//! buffers holding a complete DNS message, which is the natural unit given
//! that domain names inside a message may refer back to earlier parts of
//! the same message.
//!
//! The types in here follow the message structure laid out in section 4 of
//! [RFC 1035]: a fixed size [`HeaderSection`] followed by a question
//! section of [`Question`]s and three sections of resource [`Record`]s.
//! A received message is taken apart by [`Message::from_octets`]; a query
//! is put together through a [`MessageBuilder`].
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

pub mod header;
pub mod iana;
pub mod message;
pub mod message_builder;
pub mod name;
pub mod question;
pub mod record;
pub mod wire;

pub use self::header::{Header, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::Message;
pub use self::message_builder::MessageBuilder;
pub use self::name::{Name, ParsedName};
pub use self::question::Question;
pub use self::record::Record;
pub use self::wire::{FormError, ParseError};
