//! Values held in message fields.

use crate::object::Object;
use serde::{Deserialize, Serialize};

/// A single decoded field value: one of the three shapes a veriform field
/// can take on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Unsigned 64-bit integer
    UInt64(u64),
    /// Opaque byte string
    Bytes(#[serde(with = "serde_bytes")] Vec<u8>),
    /// Nested message
    Message(Object),
}

impl Value {
    /// Name of this value's shape, for error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::UInt64(_) => "uint64",
            Value::Bytes(_) => "bytes",
            Value::Message(_) => "message",
        }
    }

    /// Returns the integer if this value is a `UInt64`, or else `None`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt64(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the byte string if this value is `Bytes`, or else `None`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the nested object if this value is a `Message`, or else `None`.
    pub fn as_message(&self) -> Option<&Object> {
        match self {
            Value::Message(object) => Some(object),
            _ => None,
        }
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt64(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(data: Vec<u8>) -> Self {
        Value::Bytes(data)
    }
}

impl From<&[u8]> for Value {
    fn from(data: &[u8]) -> Self {
        Value::Bytes(data.to_vec())
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Message(object)
    }
}
