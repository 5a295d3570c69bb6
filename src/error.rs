//! Library error types.

use crate::field::FieldId;
use std::fmt;

/// A veriform Result, normally returning a veriform [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A veriform error. Encompasses any issue that can happen while decoding,
/// parsing, or assembling a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A varint was truncated, or was not the shortest possible encoding of
    /// its value.
    MalformedVarint,
    /// Top-level message was greater than the maximum allowed size.
    Oversize {
        /// The maximum allowed size
        max: usize,
        /// The message's actual size
        actual: usize,
    },
    /// Nesting would exceed the maximum allowed depth.
    TooDeep {
        /// The maximum allowed depth
        max: usize,
    },
    /// Wire type is reserved (anything other than 0, 2, or 3).
    BadWireType(u64),
    /// A length-prefixed run declared more bytes than remain in the message.
    Truncated {
        /// The declared length of the run
        expected: usize,
        /// The remaining length of the message
        actual: usize,
    },
    /// The same field ID appeared twice in one message scope.
    DuplicateField(FieldId),
    /// Parsing was finished while nested message scopes were still open.
    Incomplete {
        /// Number of scopes still being parsed
        open_scopes: usize,
    },
    /// A nested message ended without a matching beginning, or parsing
    /// finished with the scope stack in an impossible state.
    Unbalanced,
    /// A field lookup found no field with the given ID.
    MissingField(FieldId),
    /// A field lookup found a value of a different shape than requested.
    WrongType {
        /// The field that was loaded
        field: FieldId,
        /// The requested value type
        expected: &'static str,
        /// The value type actually stored
        actual: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MalformedVarint => write!(f, "malformed varint"),
            Error::Oversize { max, actual } => {
                write!(f, "oversized message: {} bytes (max {})", actual, max)
            }
            Error::TooDeep { max } => {
                write!(f, "max depth of {} nested messages exceeded", max)
            }
            Error::BadWireType(wire_type) => write!(f, "unknown wiretype: {}", wire_type),
            Error::Truncated { expected, actual } => write!(
                f,
                "message truncated: want {} bytes (have {})",
                expected, actual
            ),
            Error::DuplicateField(field) => write!(f, "duplicate field ID: {}", field),
            Error::Incomplete { open_scopes } => write!(
                f,
                "not finished parsing: {} message(s) still open",
                open_scopes
            ),
            Error::Unbalanced => write!(f, "nested message ended without beginning"),
            Error::MissingField(field) => write!(f, "message has no such field: {}", field),
            Error::WrongType {
                field,
                expected,
                actual,
            } => write!(
                f,
                "field {} has type {} (expected {})",
                field, actual, expected
            ),
        }
    }
}

impl std::error::Error for Error {}
