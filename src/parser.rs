//! Veriform message parser.

use crate::error::{Error, Result};
use crate::field::{Header, WireType};
use crate::handler::Handler;
use crate::vint64;
use crate::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH};

/// Parser for veriform messages: walks a complete in-memory buffer and
/// pushes decoded fields into a [`Handler`].
///
/// The parser enforces two bounds as its defense against malicious input:
/// a maximum top-level message length and a maximum nesting depth. Byte
/// payloads are handed to the handler as sub-slices of the input without
/// copying.
///
/// All parse failures are terminal; a parser that has returned an error
/// should be discarded.
#[derive(Clone, Debug)]
pub struct Parser<H> {
    /// Maximum length message we'll accept
    max_length: usize,
    /// Maximum depth of nested messages allowed
    max_depth: usize,
    /// Number of message scopes currently being parsed
    depth: usize,
    /// Callbacks invoked to construct the parse result
    handler: H,
}

impl<H: Handler> Parser<H> {
    /// Create a new parser with the default length and depth limits.
    pub fn new(handler: H) -> Self {
        Self::with_limits(handler, DEFAULT_MAX_LENGTH, DEFAULT_MAX_DEPTH)
    }

    /// Create a new parser with the given length and depth limits.
    pub fn with_limits(handler: H, max_length: usize, max_depth: usize) -> Self {
        Self {
            max_length,
            max_depth,
            depth: 0,
            handler,
        }
    }

    /// Parse the given veriform message, invoking handler callbacks as
    /// fields are decoded.
    pub fn parse(&mut self, message: &[u8]) -> Result<()> {
        if message.len() > self.max_length {
            return Err(Error::Oversize {
                max: self.max_length,
                actual: message.len(),
            });
        }
        self.parse_scope(message)
    }

    /// Finish parsing, returning the result assembled by the handler.
    pub fn finish(mut self) -> Result<H::Output> {
        if self.depth != 0 {
            return Err(Error::Incomplete {
                open_scopes: self.depth,
            });
        }
        self.handler.finish()
    }

    // Parse one message scope. Nested message bodies re-enter here: their
    // length is already bounded by the parent's, so only the depth limit is
    // re-checked. The depth counter unwinds only when the scope completes,
    // leaving an interrupted parse visible to `finish`.
    fn parse_scope(&mut self, message: &[u8]) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Error::TooDeep {
                max: self.max_depth,
            });
        }
        self.depth += 1;

        let mut remaining = message;
        while !remaining.is_empty() {
            let header = Header::decode(&mut remaining)?;

            match header.wire_type {
                WireType::UInt64 => {
                    let value = vint64::decode(&mut remaining)?;
                    self.handler.uint64(header.field_id, value)?;
                }
                WireType::Message => {
                    let nested = read_length_prefixed(&mut remaining)?;
                    self.handler.begin_nested()?;
                    self.parse_scope(nested)?;
                    self.handler.end_nested(header.field_id)?;
                }
                WireType::Bytes => {
                    let data = read_length_prefixed(&mut remaining)?;
                    self.handler.bytes(header.field_id, data)?;
                }
            }
        }

        self.depth -= 1;
        Ok(())
    }
}

// Split a length-prefixed run of bytes off the front of the buffer.
fn read_length_prefixed<'a>(remaining: &mut &'a [u8]) -> Result<&'a [u8]> {
    let length = vint64::decode(remaining)?;
    if length > remaining.len() as u64 {
        return Err(Error::Truncated {
            expected: length as usize,
            actual: remaining.len(),
        });
    }
    let (data, rest) = remaining.split_at(length as usize);
    *remaining = rest;
    Ok(data)
}
