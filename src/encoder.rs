//! Veriform message encoder.

use crate::field::{FieldId, Header, WireType};
use crate::vint64;

/// Appends complete veriform fields to a growable buffer.
///
/// The encoder always emits canonical bytes: varints in shortest form and
/// exact length prefixes. Nested messages are encoded separately (their
/// length prefix has to be exact) and attached with
/// [`message`](Encoder::message).
///
/// Field IDs must fit in 61 bits; larger IDs are a programmer error and
/// panic.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    buffer: Vec<u8>,
}

impl Encoder {
    /// Create a new encoder with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a field containing an unsigned 64-bit integer.
    pub fn uint64(&mut self, field_id: FieldId, value: u64) {
        self.header(field_id, WireType::UInt64);
        vint64::encode(&mut self.buffer, value);
    }

    /// Write a field containing opaque bytes.
    pub fn bytes(&mut self, field_id: FieldId, data: &[u8]) {
        self.header(field_id, WireType::Bytes);
        vint64::encode(&mut self.buffer, data.len() as u64);
        self.buffer.extend_from_slice(data);
    }

    /// Write a field containing an already-encoded nested message.
    pub fn message(&mut self, field_id: FieldId, body: &[u8]) {
        self.header(field_id, WireType::Message);
        vint64::encode(&mut self.buffer, body.len() as u64);
        self.buffer.extend_from_slice(body);
    }

    /// Finish the message, returning the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    fn header(&mut self, field_id: FieldId, wire_type: WireType) {
        Header {
            field_id,
            wire_type,
        }
        .encode(&mut self.buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;
    use crate::object::Object;
    use crate::parser::Parser;
    use crate::value::Value;

    #[test]
    fn known_encodings() {
        let mut encoder = Encoder::new();
        encoder.uint64(1, 42);
        assert_eq!(encoder.finish(), &[0x11, 0x55]);

        let mut encoder = Encoder::new();
        encoder.bytes(1, b"Hello, world!");
        let mut expected = vec![0x17, 0x1b];
        expected.extend_from_slice(b"Hello, world!");
        assert_eq!(encoder.finish(), expected);

        let mut encoder = Encoder::new();
        encoder.message(1, &[]);
        assert_eq!(encoder.finish(), &[0x15, 0x01]);
    }

    #[test]
    fn encode_then_parse() {
        let mut inner = Encoder::new();
        inner.uint64(7, u64::MAX);
        let inner = inner.finish();

        let mut encoder = Encoder::new();
        encoder.uint64(1, 42);
        encoder.bytes(2, b"foobar");
        encoder.message(3, &inner);
        let message = encoder.finish();

        let mut parser = Parser::new(Decoder::new());
        parser.parse(&message).unwrap();
        let object = parser.finish().unwrap();

        assert_eq!(object.load_u64(1).unwrap(), 42);
        assert_eq!(object.load_bytes(2).unwrap(), b"foobar");
        assert_eq!(
            object.load_message(3).unwrap().load_u64(7).unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn object_encoding_is_deterministic() {
        // Same fields, different insertion order, identical bytes
        let mut nested = Object::new();
        nested.store(1, Value::UInt64(7)).unwrap();

        let mut a = Object::new();
        a.store(2, Value::from(&b"xy"[..])).unwrap();
        a.store(1, Value::UInt64(42)).unwrap();
        a.store(3, Value::Message(nested.clone())).unwrap();

        let mut b = Object::new();
        b.store(3, Value::Message(nested)).unwrap();
        b.store(1, Value::UInt64(42)).unwrap();
        b.store(2, Value::from(&b"xy"[..])).unwrap();

        assert_eq!(a.encode(), b.encode());
    }

    #[test]
    fn object_roundtrip() {
        let mut nested = Object::new();
        nested.store(1, Value::UInt64(1000)).unwrap();
        nested.store(2, Value::from(&b"inner"[..])).unwrap();

        let mut object = Object::new();
        object.store(1, Value::UInt64(42)).unwrap();
        object.store(2, Value::from(&b"outer"[..])).unwrap();
        object.store(3, Value::Message(nested)).unwrap();

        let encoded = object.encode();
        let mut parser = Parser::new(Decoder::new());
        parser.parse(&encoded).unwrap();
        assert_eq!(parser.finish().unwrap(), object);
    }
}
