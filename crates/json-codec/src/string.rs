//! Minimal string reader, primarily for keyed-container keys.

use crate::codec::ReadValue;
use crate::error::DecodeError;
use crate::reader::JsonReader;

/// Null-tolerant quoted-string reader.
pub struct StringReader;

impl ReadValue for StringReader {
    type Value = String;

    fn read(&self, reader: &mut JsonReader<'_>) -> Result<Option<String>, DecodeError> {
        if reader.was_null()? {
            return Ok(None);
        }
        reader.read_string().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_quoted_string() {
        let mut reader = JsonReader::new(b"\"key\"").unwrap();
        assert_eq!(StringReader.read(&mut reader).unwrap().as_deref(), Some("key"));
    }

    #[test]
    fn null_is_absence() {
        let mut reader = JsonReader::new(b"null").unwrap();
        assert_eq!(StringReader.read(&mut reader).unwrap(), None);
    }

    #[test]
    fn unquoted_token_is_rejected() {
        let mut reader = JsonReader::new(b"key").unwrap();
        assert!(StringReader.read(&mut reader).is_err());
    }
}
