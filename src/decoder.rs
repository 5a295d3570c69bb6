//! Decoder for self-describing veriform messages.

use crate::error::{Error, Result};
use crate::field::FieldId;
use crate::handler::Handler;
use crate::object::Object;
use crate::value::Value;

/// The reference [`Handler`]: assembles parse events into an [`Object`]
/// tree.
///
/// Holds a stack of objects, one per open message scope, seeded with the
/// (initially empty) root. Byte payloads are stored by value.
#[derive(Clone, Debug)]
pub struct Decoder {
    stack: Vec<Object>,
}

impl Decoder {
    /// Create a new decoder containing an empty root object.
    pub fn new() -> Self {
        Self {
            stack: vec![Object::new()],
        }
    }

    fn current(&mut self) -> Result<&mut Object> {
        self.stack.last_mut().ok_or(Error::Unbalanced)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for Decoder {
    type Output = Object;

    fn uint64(&mut self, field_id: FieldId, value: u64) -> Result<()> {
        self.current()?.store(field_id, Value::UInt64(value))
    }

    fn bytes(&mut self, field_id: FieldId, data: &[u8]) -> Result<()> {
        self.current()?.store(field_id, Value::Bytes(data.to_vec()))
    }

    fn begin_nested(&mut self) -> Result<()> {
        self.stack.push(Object::new());
        Ok(())
    }

    fn end_nested(&mut self, field_id: FieldId) -> Result<()> {
        let child = self.stack.pop().ok_or(Error::Unbalanced)?;
        self.current()?.store(field_id, Value::Message(child))
    }

    fn finish(&mut self) -> Result<Object> {
        if self.stack.len() != 1 {
            return Err(Error::Unbalanced);
        }
        self.stack.pop().ok_or(Error::Unbalanced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_objects() {
        let mut decoder = Decoder::new();
        decoder.uint64(1, 42).unwrap();
        decoder.begin_nested().unwrap();
        decoder.bytes(1, b"inner").unwrap();
        decoder.end_nested(2).unwrap();

        let object = decoder.finish().unwrap();
        assert_eq!(object.load_u64(1).unwrap(), 42);
        assert_eq!(object.load_message(2).unwrap().load_bytes(1).unwrap(), b"inner");
    }

    #[test]
    fn duplicate_field_in_scope() {
        let mut decoder = Decoder::new();
        decoder.uint64(1, 42).unwrap();
        assert_eq!(decoder.bytes(1, b"x"), Err(Error::DuplicateField(1)));
    }

    #[test]
    fn end_without_begin() {
        let mut decoder = Decoder::new();
        // Popping the root leaves nothing to store the child into
        assert_eq!(decoder.end_nested(1), Err(Error::Unbalanced));
    }

    #[test]
    fn finish_with_open_scope() {
        let mut decoder = Decoder::new();
        decoder.begin_nested().unwrap();
        assert_eq!(decoder.finish(), Err(Error::Unbalanced));
    }
}
