//! `JsonWriter` — token-level writer emitting UTF-8 JSON text.
//!
//! Thin shell over [`json_codec_buffers::Writer`]: type-specific encoders
//! drive it through the null/ascii/byte primitives and the token byte
//! constants below.

use json_codec_buffers::Writer;

pub const OBJECT_START: u8 = b'{';
pub const OBJECT_END: u8 = b'}';
pub const ARRAY_START: u8 = b'[';
pub const ARRAY_END: u8 = b']';
pub const COMMA: u8 = b',';
pub const SEMI: u8 = b':';

pub struct JsonWriter {
    pub writer: Writer,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Writes the null marker as a single four-byte word.
    pub fn null(&mut self) {
        self.writer.u32(0x6e75_6c6c); // "null"
    }

    /// Writes an ASCII token verbatim.
    pub fn ascii(&mut self, s: &str) {
        self.writer.ascii(s);
    }

    /// Writes a single token byte.
    pub fn byte(&mut self, b: u8) {
        self.writer.u8(b);
    }

    /// Discards anything written since the last flush.
    pub fn reset(&mut self) {
        self.writer.reset();
    }

    /// Returns the bytes written since the last flush.
    pub fn flush(&mut self) -> Vec<u8> {
        self.writer.flush()
    }
}
