//! Composition seams: pluggable per-type readers and writers.
//!
//! Type-specific decoders are built from these traits plus the token-level
//! primitives of [`JsonReader`] / [`JsonWriter`]. A decoder value is
//! immutable and stateless, so one instance can serve unboundedly many
//! independent decode calls (and threads, given one reader per call).

use crate::error::DecodeError;
use crate::reader::JsonReader;
use crate::writer::JsonWriter;

/// Decodes one value of a specific type from a token stream.
///
/// The reader must be positioned at the first token of the value. `None`
/// means the stream held the null literal (absence); implementations that
/// do not tolerate null report an error instead.
pub trait ReadValue {
    type Value;

    fn read(&self, reader: &mut JsonReader<'_>) -> Result<Option<Self::Value>, DecodeError>;
}

/// Encodes one value of a specific type onto a token stream.
///
/// `None` writes the null marker.
pub trait WriteValue {
    type Value: ?Sized;

    fn write(&self, writer: &mut JsonWriter, value: Option<&Self::Value>);
}
