//! IANA definitions for the parts of the DNS this crate deals with.
//!
//! The parameter types in this module wrap the raw integer found on the
//! wire. Well-known values are provided as associated constants carrying
//! their registered mnemonics; unknown values are kept as they are, since
//! a resolver must be able to pass through record types it has never heard
//! of. The currently assigned values are maintained in the
//! [IANA registry].
//!
//! [IANA registry]: https://www.iana.org/assignments/dns-parameters/

/// Creates a standard IANA type wrapping an integer.
///
/// This adds impls for `From`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`,
/// `Hash`, and `Display` via the mnemonic.
macro_rules! int_enum {
    ( $(#[$attr:meta])* =>
      $ianatype:ident, $inttype:path;
      $( $(#[$variant_attr:meta])* ( $variant:ident =>
                                        $value:expr, $mnemonic:expr) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $ianatype($inttype);

        impl $ianatype {
            $(
                $(#[$variant_attr])*
                pub const $variant: $ianatype = $ianatype($value);
            )*
        }

        impl $ianatype {
            /// Returns a value from its raw integer value.
            #[must_use]
            pub const fn from_int(value: $inttype) -> Self {
                Self(value)
            }

            /// Returns the raw integer value for a value.
            #[must_use]
            pub const fn to_int(self) -> $inttype {
                self.0
            }

            /// Returns the mnemonic for this value if there is one.
            #[must_use]
            pub const fn to_mnemonic_str(self) -> Option<&'static str> {
                match self {
                    $(
                        $ianatype::$variant => Some($mnemonic),
                    )*
                    _ => None
                }
            }
        }

        //--- From

        impl From<$inttype> for $ianatype {
            fn from(value: $inttype) -> Self {
                $ianatype::from_int(value)
            }
        }

        impl From<$ianatype> for $inttype {
            fn from(value: $ianatype) -> Self {
                value.to_int()
            }
        }

        //--- Display

        impl core::fmt::Display for $ianatype {
            fn fmt(
                &self, f: &mut core::fmt::Formatter
            ) -> core::fmt::Result {
                match self.to_mnemonic_str() {
                    Some(m) => f.write_str(m),
                    None => write!(f, "{}", self.0),
                }
            }
        }
    }
}

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource record types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind
    /// of information is represented by the record. A query includes the
    /// type of record information requested. Only a handful of the
    /// registered types matter to this resolver; everything else travels
    /// through as an opaque value.
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// IPv6 address.
    (AAAA => 28, "AAAA")

    /// Container for EDNS OPT pseudo records.
    (OPT => 41, "OPT")
}

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASS values.
    ///
    /// The DNS was intended to be used for networks other than the
    /// Internet as well; the class of a record states which network it
    /// applies to. In practice, the only relevant class is IN.
    =>
    Class, u16;

    /// The Internet.
    (IN => 1, "IN")

    /// The CHAOS network.
    (CH => 3, "CH")

    /// Hesiod.
    (HS => 4, "HS")
}

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS opcodes.
    ///
    /// The opcode specifies the kind of query carried in a message. It is
    /// set by the originator of a query and copied into the response.
    =>
    Opcode, u8;

    /// A standard query.
    (QUERY => 0, "QUERY")

    /// An inverse query.
    ///
    /// (Obsoleted by RFC 3425.)
    (IQUERY => 1, "IQUERY")

    /// A server status request.
    (STATUS => 2, "STATUS")

    /// A zone change notification.
    (NOTIFY => 4, "NOTIFY")

    /// A dynamic update.
    (UPDATE => 5, "UPDATE")
}

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS response codes.
    ///
    /// The response code of a message states why a server answered the
    /// way it did. The driver in this crate does not branch on the rcode,
    /// but callers inspecting a reply will want to.
    =>
    Rcode, u8;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// The server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// The server ran into trouble processing the query.
    (SERVFAIL => 2, "SERVFAIL")

    /// The queried domain name does not exist.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// The server does not implement this kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// The server refuses to answer for policy reasons.
    (REFUSED => 5, "REFUSED")
}
