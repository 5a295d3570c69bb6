//! Little-endian 64-bit unsigned prefix varints.
//!
//! Values occupy 1 to 9 bytes. The first byte is a unary length prefix: the
//! number of trailing zero bits, plus one, is the total encoded length, with
//! an all-zero first byte marking the 9-byte form (a raw little-endian `u64`
//! follows). The remaining bits hold the value itself, little-endian.
//!
//! | Value range     | Bytes |
//! |-----------------|-------|
//! | `[0, 2^7)`      | 1     |
//! | `[2^7, 2^14)`   | 2     |
//! | ...             | ...   |
//! | `[2^49, 2^56)`  | 8     |
//! | `[2^56, 2^64)`  | 9     |
//!
//! Every value has exactly one accepted encoding: the shortest. Longer
//! encodings of the same value are rejected on decode, so byte-equal
//! messages imply equal values.

use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};

/// Maximum length of an encoded varint in bytes
pub const MAX_BYTES: usize = 9;

/// Get the encoded length in bytes for the given value.
pub fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    ((bits + 6) / 7).clamp(1, MAX_BYTES)
}

/// Get the total encoded length of a varint from its first byte.
pub fn decoded_len(prefix: u8) -> usize {
    prefix.trailing_zeros() as usize + 1
}

/// Append the canonical encoding of `value` to the buffer.
pub fn encode(buf: &mut Vec<u8>, value: u64) {
    let length = encoded_len(value);
    if length == MAX_BYTES {
        // 9-byte special case: all-zero prefix, then the raw value
        buf.push(0);
        buf.extend_from_slice(&value.to_le_bytes());
    } else {
        let marked = (value << 1 | 1) << (length - 1);
        buf.extend_from_slice(&marked.to_le_bytes()[..length]);
    }
}

/// Decode a varint from the front of the buffer, advancing it past the
/// consumed bytes.
///
/// Truncated input and encodings longer than the canonical form both fail
/// with [`Error::MalformedVarint`].
pub fn decode(buf: &mut &[u8]) -> Result<u64> {
    let prefix = buf.read_u8().map_err(|_| Error::MalformedVarint)?;

    if prefix == 0 {
        // 9-byte special case
        let value = buf
            .read_u64::<LittleEndian>()
            .map_err(|_| Error::MalformedVarint)?;
        if value < (1 << 56) {
            return Err(Error::MalformedVarint);
        }
        return Ok(value);
    }

    let length = decoded_len(prefix);
    if buf.len() < length - 1 {
        return Err(Error::MalformedVarint);
    }

    let mut bytes = [0u8; 8];
    bytes[0] = prefix;
    bytes[1..length].copy_from_slice(&buf[..length - 1]);
    let (_, rest) = buf.split_at(length - 1);
    *buf = rest;

    let value = u64::from_le_bytes(bytes) >> length;
    if length > 1 && value < (1 << (7 * (length - 1))) {
        return Err(Error::MalformedVarint);
    }
    Ok(value)
}
