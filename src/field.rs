//! Fields (i.e. ID/value pairs) in a veriform message.

use crate::error::{Error, Result};
use crate::vint64;
use std::convert::TryFrom;

/// Unsigned 64-bit identifier naming a field within one message scope.
///
/// Field IDs share a varint with the 3-bit wire type, so they are limited to
/// 61 bits in practice.
pub type FieldId = u64;

/// The 3-bit tag selecting a field's payload shape. Values 1 and 4-7 are
/// reserved and rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WireType {
    /// Unsigned 64-bit integer, stored as a varint
    UInt64 = 0,
    /// Nested message, length-prefixed and recursively parsed
    Message = 2,
    /// Opaque byte string, length-prefixed and not interpreted
    Bytes = 3,
}

impl TryFrom<u64> for WireType {
    type Error = Error;

    fn try_from(encoded: u64) -> Result<Self> {
        match encoded {
            0 => Ok(WireType::UInt64),
            2 => Ok(WireType::Message),
            3 => Ok(WireType::Bytes),
            other => Err(Error::BadWireType(other)),
        }
    }
}

/// The header each field starts with: one varint packing the field ID and
/// wire type as `(field_id << 3) | wire_type`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Header {
    /// ID which identifies the field
    pub field_id: FieldId,
    /// Encoded value type for the field
    pub wire_type: WireType,
}

impl Header {
    /// Decode a header from the front of the buffer, advancing it.
    pub fn decode(buf: &mut &[u8]) -> Result<Self> {
        let encoded = vint64::decode(buf)?;
        let wire_type = WireType::try_from(encoded & 0b111)?;
        Ok(Header {
            field_id: encoded >> 3,
            wire_type,
        })
    }

    /// Append the encoded header to the buffer.
    pub fn encode(self, buf: &mut Vec<u8>) {
        assert!(self.field_id < (1 << 61), "field ID does not fit in 61 bits");
        vint64::encode(buf, (self.field_id << 3) | self.wire_type as u64);
    }
}
