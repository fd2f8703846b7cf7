//! Boolean codec: scalar literals, fixed-size arrays, and bulk
//! collections, each with null-tolerant variants.
//!
//! The structure here is the template every other scalar codec in the
//! library follows: free read/write functions over the token primitives,
//! plus unit-struct [`ReadValue`]/[`WriteValue`] adapters for composition.

use crate::codec::{ReadValue, WriteValue};
use crate::error::DecodeError;
use crate::reader::JsonReader;
use crate::writer::{JsonWriter, ARRAY_END, ARRAY_START};

/// Initial scratch-buffer capacity for array decoding. A tuning default,
/// not an invariant; see [`read_bool_array_with_capacity`].
pub const DEFAULT_ARRAY_CAPACITY: usize = 4;

/// Decodes a single boolean literal at the current token.
pub fn read_bool(reader: &mut JsonReader<'_>) -> Result<bool, DecodeError> {
    if reader.was_true()? {
        Ok(true)
    } else if reader.was_false()? {
        Ok(false)
    } else {
        Err(DecodeError::InvalidLiteral {
            position: reader.position(),
        })
    }
}

/// Writes a boolean as its unquoted ASCII literal.
pub fn write_bool(writer: &mut JsonWriter, value: bool) {
    if value {
        writer.ascii("true");
    } else {
        writer.ascii("false");
    }
}

/// Writes a boolean, with absence as the null marker.
pub fn write_bool_nullable(writer: &mut JsonWriter, value: Option<bool>) {
    match value {
        None => writer.null(),
        Some(value) => write_bool(writer, value),
    }
}

/// Strict scalar reader: the null literal is not a boolean.
pub struct BoolReader;

impl ReadValue for BoolReader {
    type Value = bool;

    fn read(&self, reader: &mut JsonReader<'_>) -> Result<Option<bool>, DecodeError> {
        read_bool(reader).map(Some)
    }
}

/// Null-tolerant scalar reader: null yields absence without inspecting
/// the literal further.
pub struct NullableBoolReader;

impl ReadValue for NullableBoolReader {
    type Value = bool;

    fn read(&self, reader: &mut JsonReader<'_>) -> Result<Option<bool>, DecodeError> {
        if reader.was_null()? {
            return Ok(None);
        }
        read_bool(reader).map(Some)
    }
}

/// Decodes a boolean array body with the default initial capacity.
///
/// Precondition: the cursor already sits past a confirmed `[`.
pub fn read_bool_array(reader: &mut JsonReader<'_>) -> Result<Box<[bool]>, DecodeError> {
    read_bool_array_with_capacity(reader, DEFAULT_ARRAY_CAPACITY)
}

/// Decodes a boolean array body into a scratch buffer that starts at
/// `initial_capacity` slots and doubles on overflow. The result is
/// trimmed to the exact element count.
pub fn read_bool_array_with_capacity(
    reader: &mut JsonReader<'_>,
    initial_capacity: usize,
) -> Result<Box<[bool]>, DecodeError> {
    if reader.last() == b']' {
        return Ok(Box::default());
    }
    let mut buffer = vec![false; initial_capacity.max(1)];
    buffer[0] = read_bool(reader)?;
    let mut len = 1;
    while reader.next_token()? == b',' {
        reader.next_token()?;
        if len == buffer.len() {
            buffer.resize(buffer.len() << 1, false);
        }
        buffer[len] = read_bool(reader)?;
        len += 1;
    }
    reader.check_array_end()?;
    buffer.truncate(len);
    Ok(buffer.into_boxed_slice())
}

/// Array reader handling the null/`[` preamble before the body.
pub struct BoolArrayReader;

impl ReadValue for BoolArrayReader {
    type Value = Box<[bool]>;

    fn read(&self, reader: &mut JsonReader<'_>) -> Result<Option<Box<[bool]>>, DecodeError> {
        if reader.was_null()? {
            return Ok(None);
        }
        if reader.last() != b'[' {
            return Err(reader.expecting("["));
        }
        reader.next_token()?;
        read_bool_array(reader).map(Some)
    }
}

/// Writes a boolean array. Subsequent elements are emitted as one
/// `,literal` token each to keep write calls to a minimum.
pub fn write_bool_array(writer: &mut JsonWriter, value: &[bool]) {
    if value.is_empty() {
        writer.ascii("[]");
        return;
    }
    writer.byte(ARRAY_START);
    writer.ascii(if value[0] { "true" } else { "false" });
    for &element in &value[1..] {
        writer.ascii(if element { ",true" } else { ",false" });
    }
    writer.byte(ARRAY_END);
}

/// Writes a boolean array, with absence as the null marker.
pub fn write_bool_array_nullable(writer: &mut JsonWriter, value: Option<&[bool]>) {
    match value {
        None => writer.null(),
        Some(value) => write_bool_array(writer, value),
    }
}

pub struct BoolWriter;

impl WriteValue for BoolWriter {
    type Value = bool;

    fn write(&self, writer: &mut JsonWriter, value: Option<&bool>) {
        write_bool_nullable(writer, value.copied());
    }
}

pub struct BoolArrayWriter;

impl WriteValue for BoolArrayWriter {
    type Value = [bool];

    fn write(&self, writer: &mut JsonWriter, value: Option<&[bool]>) {
        write_bool_array_nullable(writer, value);
    }
}

/// Decodes a boolean sequence into a fresh `Vec`. Precondition: cursor
/// past a confirmed `[`.
pub fn read_bool_collection(reader: &mut JsonReader<'_>) -> Result<Vec<bool>, DecodeError> {
    reader.read_collection(&BoolReader)
}

/// Appends a boolean sequence into a caller-supplied `Vec`.
pub fn read_bool_collection_into(
    reader: &mut JsonReader<'_>,
    res: &mut Vec<bool>,
) -> Result<(), DecodeError> {
    reader.read_collection_into(&BoolReader, res)
}

/// Decodes a boolean sequence whose elements may be null.
pub fn read_nullable_bool_collection(
    reader: &mut JsonReader<'_>,
) -> Result<Vec<Option<bool>>, DecodeError> {
    reader.read_nullable_collection(&BoolReader)
}

/// Appends a nullable-element boolean sequence into a caller-supplied
/// `Vec`.
pub fn read_nullable_bool_collection_into(
    reader: &mut JsonReader<'_>,
    res: &mut Vec<Option<bool>>,
) -> Result<(), DecodeError> {
    reader.read_nullable_collection_into(&BoolReader, res)
}
