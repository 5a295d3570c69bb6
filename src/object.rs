//! Field-keyed object trees decoded from veriform messages.

use crate::encoder::Encoder;
use crate::error::{Error, Result};
use crate::field::FieldId;
use crate::value::Value;
use num_traits::NumCast;
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};

/// A deserialized veriform message: a mapping from field IDs to values in
/// which every field appears at most once.
///
/// Objects are assembled by [`Decoder`](crate::Decoder) while parsing, and
/// can be serialized back to the wire form with [`encode`](Object::encode).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    fields: BTreeMap<FieldId, Value>,
}

impl Object {
    /// Create a new, empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields in this object.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if this object has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields in ascending field ID order.
    pub fn iter(&self) -> btree_map::Iter<'_, FieldId, Value> {
        self.fields.iter()
    }

    /// Store a value under the given field ID, failing if the field is
    /// already present.
    pub fn store(&mut self, field_id: FieldId, value: Value) -> Result<()> {
        match self.fields.entry(field_id) {
            btree_map::Entry::Occupied(_) => Err(Error::DuplicateField(field_id)),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Retrieve a field by ID, failing if it's absent.
    pub fn load(&self, field_id: FieldId) -> Result<&Value> {
        self.fields
            .get(&field_id)
            .ok_or(Error::MissingField(field_id))
    }

    /// Load a `u64` value at the given field ID.
    pub fn load_u64(&self, field_id: FieldId) -> Result<u64> {
        match self.load(field_id)? {
            Value::UInt64(value) => Ok(*value),
            other => Err(wrong_type(field_id, "uint64", other)),
        }
    }

    /// Load a `u32` value at the given field ID. Fails if the stored integer
    /// doesn't fit.
    pub fn load_u32(&self, field_id: FieldId) -> Result<u32> {
        self.load_narrow(field_id, "u32")
    }

    /// Load a `u16` value at the given field ID. Fails if the stored integer
    /// doesn't fit.
    pub fn load_u16(&self, field_id: FieldId) -> Result<u16> {
        self.load_narrow(field_id, "u16")
    }

    /// Load a `u8` value at the given field ID. Fails if the stored integer
    /// doesn't fit.
    pub fn load_u8(&self, field_id: FieldId) -> Result<u8> {
        self.load_narrow(field_id, "u8")
    }

    /// Load a byte string at the given field ID.
    pub fn load_bytes(&self, field_id: FieldId) -> Result<&[u8]> {
        match self.load(field_id)? {
            Value::Bytes(data) => Ok(data),
            other => Err(wrong_type(field_id, "bytes", other)),
        }
    }

    /// Load a nested message at the given field ID.
    pub fn load_message(&self, field_id: FieldId) -> Result<&Object> {
        match self.load(field_id)? {
            Value::Message(object) => Ok(object),
            other => Err(wrong_type(field_id, "message", other)),
        }
    }

    /// Convert to a plain field-ID-keyed map, cloning the values. Nested
    /// objects stay nested inside [`Value::Message`].
    pub fn to_map(&self) -> BTreeMap<FieldId, Value> {
        self.fields.clone()
    }

    /// Serialize this object as a veriform message.
    ///
    /// Fields are written in ascending field ID order, so equal objects
    /// always produce identical bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut encoder = Encoder::new();
        for (&field_id, value) in &self.fields {
            match value {
                Value::UInt64(value) => encoder.uint64(field_id, *value),
                Value::Bytes(data) => encoder.bytes(field_id, data),
                Value::Message(child) => encoder.message(field_id, &child.encode()),
            }
        }
        encoder.finish()
    }

    fn load_narrow<T: NumCast>(&self, field_id: FieldId, expected: &'static str) -> Result<T> {
        NumCast::from(self.load_u64(field_id)?).ok_or(Error::WrongType {
            field: field_id,
            expected,
            actual: "uint64",
        })
    }
}

fn wrong_type(field_id: FieldId, expected: &'static str, actual: &Value) -> Error {
    Error::WrongType {
        field: field_id,
        expected,
        actual: actual.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Object {
        let mut nested = Object::new();
        nested.store(7, Value::UInt64(1000)).unwrap();

        let mut object = Object::new();
        object.store(1, Value::UInt64(42)).unwrap();
        object.store(2, Value::from(&b"data"[..])).unwrap();
        object.store(3, Value::Message(nested)).unwrap();
        object
    }

    #[test]
    fn store_and_load() {
        let object = sample();
        assert_eq!(object.len(), 3);
        assert_eq!(object.load_u64(1).unwrap(), 42);
        assert_eq!(object.load_bytes(2).unwrap(), b"data");
        assert_eq!(object.load_message(3).unwrap().load_u64(7).unwrap(), 1000);
    }

    #[test]
    fn duplicate_store() {
        let mut object = sample();
        assert_eq!(
            object.store(1, Value::UInt64(43)),
            Err(Error::DuplicateField(1))
        );
        // The original value is untouched
        assert_eq!(object.load_u64(1).unwrap(), 42);
    }

    #[test]
    fn missing_field() {
        assert_eq!(sample().load(99), Err(Error::MissingField(99)));
    }

    #[test]
    fn shape_mismatch() {
        let object = sample();
        assert_eq!(
            object.load_u64(2),
            Err(Error::WrongType {
                field: 2,
                expected: "uint64",
                actual: "bytes"
            })
        );
        assert_eq!(
            object.load_bytes(3),
            Err(Error::WrongType {
                field: 3,
                expected: "bytes",
                actual: "message"
            })
        );
        assert_eq!(
            object.load_message(1),
            Err(Error::WrongType {
                field: 1,
                expected: "message",
                actual: "uint64"
            })
        );
    }

    #[test]
    fn narrowing_loads() {
        let mut object = Object::new();
        object.store(1, Value::UInt64(300)).unwrap();
        object.store(2, Value::UInt64(70_000)).unwrap();
        object.store(3, Value::UInt64(1 << 40)).unwrap();

        assert_eq!(object.load_u16(1).unwrap(), 300);
        assert_eq!(object.load_u32(2).unwrap(), 70_000);
        assert_eq!(object.load_u64(3).unwrap(), 1 << 40);

        assert!(object.load_u8(1).is_err());
        assert!(object.load_u16(2).is_err());
        assert!(object.load_u32(3).is_err());
    }

    #[test]
    fn to_map_clones_fields() {
        let object = sample();
        let map = object.to_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map[&1], Value::UInt64(42));
        assert_eq!(map[&2].as_bytes().unwrap(), b"data");
    }
}
