//! Veriform: a self-describing, deterministic binary message format,
//! intended primarily as a credential-carrying envelope.
//!
//! Messages are flat sequences of `(field ID, value)` pairs, where values
//! are unsigned 64-bit integers, opaque byte strings, or nested messages.
//! Every value has exactly one accepted encoding: varints must be in
//! shortest form and duplicate field IDs are rejected, so byte-equal
//! messages imply equal content. The parser is bounded in both input length
//! and nesting depth, with conservative credential-sized defaults.
//!
//! ```
//! use veriform::{Decoder, Encoder, Parser};
//!
//! let mut encoder = Encoder::new();
//! encoder.uint64(1, 42);
//! encoder.bytes(2, b"Hello, world!");
//! let message = encoder.finish();
//!
//! let mut parser = Parser::new(Decoder::new());
//! parser.parse(&message)?;
//! let object = parser.finish()?;
//! assert_eq!(object.load_u64(1)?, 42);
//! # Ok::<(), veriform::Error>(())
//! ```

mod decoder;
mod encoder;
mod error;
pub mod field;
mod handler;
mod object;
mod parser;
mod value;
pub mod vint64;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use field::{FieldId, Header, WireType};
pub use handler::Handler;
pub use object::Object;
pub use parser::Parser;
pub use value::Value;

/// Default maximum length of a veriform message: 1kB. This is conservative,
/// as veriform's main intended use case is a credential format.
pub const DEFAULT_MAX_LENGTH: usize = 1024;

/// Default maximum depth (i.e. default max level of nested messages)
pub const DEFAULT_MAX_DEPTH: usize = 8;
