//! Callback API used by the parser to process parsed data.

use crate::error::Result;
use crate::field::FieldId;

/// Receives events from the [`Parser`](crate::Parser) as fields are decoded,
/// and assembles the parse result.
///
/// The reference implementation is [`Decoder`](crate::Decoder), which builds
/// an [`Object`](crate::Object) tree; schema-directed handlers are equally
/// valid consumers. Every callback may fail, and a failure aborts the parse
/// with the returned error.
pub trait Handler {
    /// The fully assembled parse result returned by [`finish`](Handler::finish).
    type Output;

    /// An unsigned 64-bit integer field was parsed.
    fn uint64(&mut self, field_id: FieldId, value: u64) -> Result<()>;

    /// A binary data field was parsed. The data is borrowed from the input
    /// buffer; copy it to retain it beyond the parse.
    fn bytes(&mut self, field_id: FieldId, data: &[u8]) -> Result<()>;

    /// A nested message begins; field IDs seen inside it form a fresh scope.
    fn begin_nested(&mut self) -> Result<()>;

    /// The current nested message is complete, and becomes the value of the
    /// given field in its parent scope.
    fn end_nested(&mut self, field_id: FieldId) -> Result<()>;

    /// Parsing succeeded; return the assembled result.
    fn finish(&mut self) -> Result<Self::Output>;
}
