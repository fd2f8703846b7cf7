//! `JsonReader` — token-level pull cursor over a complete JSON input.
//!
//! Exposes the primitives type-specific decoders are built from: current
//! token inspection, advance, literal recognition, and a monotonically
//! increasing byte position used only for diagnostics. Whitespace between
//! tokens is skipped on advance; everything inside tokens is the caller's
//! concern (string bodies are scanned by [`JsonReader::read_string`]).
//!
//! A reader is a mutable cursor owned by exactly one decode call at a
//! time. Decoders themselves stay immutable and shareable.

use crate::codec::ReadValue;
use crate::error::DecodeError;

#[derive(Debug)]
pub struct JsonReader<'a> {
    buf: &'a [u8],
    /// Index of the byte after the current token.
    x: usize,
    /// Current token byte.
    last: u8,
}

impl<'a> JsonReader<'a> {
    /// Creates a reader positioned at the first token of `buf`.
    pub fn new(buf: &'a [u8]) -> Result<Self, DecodeError> {
        let mut reader = Self { buf, x: 0, last: 0 };
        reader.next_token()?;
        Ok(reader)
    }

    /// The current token byte.
    #[inline]
    pub fn last(&self) -> u8 {
        self.last
    }

    /// Diagnostic byte offset: number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.x
    }

    /// Advances to the next token, skipping insignificant whitespace, and
    /// returns it. Fails when the input is exhausted.
    pub fn next_token(&mut self) -> Result<u8, DecodeError> {
        loop {
            if self.x >= self.buf.len() {
                return Err(DecodeError::UnexpectedEnd { position: self.x });
            }
            let b = self.buf[self.x];
            self.x += 1;
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => {}
                _ => {
                    self.last = b;
                    return Ok(b);
                }
            }
        }
    }

    /// Returns true and consumes the literal if the current token starts
    /// `null`. A token starting with `n` that is not `null` is an error.
    pub fn was_null(&mut self) -> Result<bool, DecodeError> {
        if self.last != b'n' {
            return Ok(false);
        }
        self.literal_tail(b"ull", "null")?;
        Ok(true)
    }

    /// Returns true and consumes the literal if the current token starts
    /// `true`. A token starting with `t` that is not `true` is an error.
    pub fn was_true(&mut self) -> Result<bool, DecodeError> {
        if self.last != b't' {
            return Ok(false);
        }
        self.literal_tail(b"rue", "true")?;
        Ok(true)
    }

    /// Returns true and consumes the literal if the current token starts
    /// `false`. A token starting with `f` that is not `false` is an error.
    pub fn was_false(&mut self) -> Result<bool, DecodeError> {
        if self.last != b'f' {
            return Ok(false);
        }
        self.literal_tail(b"alse", "false")?;
        Ok(true)
    }

    fn literal_tail(&mut self, tail: &[u8], whole: &str) -> Result<(), DecodeError> {
        let end = self.x + tail.len();
        if end > self.buf.len() {
            return Err(DecodeError::UnexpectedEnd {
                position: self.buf.len(),
            });
        }
        if &self.buf[self.x..end] != tail {
            return Err(self.expecting(whole));
        }
        self.x = end;
        Ok(())
    }

    /// Fails unless the current token closes an array.
    pub fn check_array_end(&self) -> Result<(), DecodeError> {
        if self.last != b']' {
            return Err(self.expecting("]"));
        }
        Ok(())
    }

    /// Builds a syntax error citing the expected description, the actual
    /// token, and the current position.
    pub fn expecting(&self, expected: &str) -> DecodeError {
        DecodeError::Syntax {
            expected: expected.to_owned(),
            found: self.last as char,
            position: self.x,
        }
    }

    /// Reads a quoted string body. The current token must be the opening
    /// quote; on return the cursor sits past the closing quote.
    ///
    /// Escape-free bodies are decoded directly; bodies with escapes fall
    /// back to serde_json for proper unescaping.
    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        if self.last != b'"' {
            return Err(self.expecting("\""));
        }
        let start = self.x;
        let mut i = start;
        let mut escaped = false;
        loop {
            if i >= self.buf.len() {
                return Err(DecodeError::UnexpectedEnd { position: i });
            }
            match self.buf[i] {
                b'"' => break,
                b'\\' => {
                    escaped = true;
                    i += 2;
                }
                _ => i += 1,
            }
        }
        let body = &self.buf[start..i];
        self.x = i + 1;
        if !escaped {
            return std::str::from_utf8(body)
                .map(str::to_owned)
                .map_err(|_| DecodeError::InvalidUtf8 { position: start });
        }
        let mut quoted = Vec::with_capacity(body.len() + 2);
        quoted.push(b'"');
        quoted.extend_from_slice(body);
        quoted.push(b'"');
        serde_json::from_slice::<String>(&quoted)
            .map_err(|_| DecodeError::InvalidEscape { position: start })
    }

    /// Decodes a sequence into a fresh `Vec`, one element per `decoder`
    /// call. The cursor must already sit past a confirmed `[`.
    pub fn read_collection<D: ReadValue>(
        &mut self,
        decoder: &D,
    ) -> Result<Vec<D::Value>, DecodeError> {
        let mut res = Vec::new();
        self.read_collection_into(decoder, &mut res)?;
        Ok(res)
    }

    /// Like [`JsonReader::read_collection`], appending into a
    /// caller-supplied sequence.
    ///
    /// An element decoding to null is rejected; use the nullable variants
    /// when absence is a legal element.
    pub fn read_collection_into<D: ReadValue>(
        &mut self,
        decoder: &D,
        res: &mut Vec<D::Value>,
    ) -> Result<(), DecodeError> {
        if self.last == b']' {
            return Ok(());
        }
        loop {
            match decoder.read(self)? {
                Some(value) => res.push(value),
                None => return Err(self.expecting("value")),
            }
            if self.next_token()? != b',' {
                break;
            }
            self.next_token()?;
        }
        self.check_array_end()
    }

    /// Decodes a sequence whose elements may be null into a fresh `Vec`.
    /// The cursor must already sit past a confirmed `[`.
    pub fn read_nullable_collection<D: ReadValue>(
        &mut self,
        decoder: &D,
    ) -> Result<Vec<Option<D::Value>>, DecodeError> {
        let mut res = Vec::new();
        self.read_nullable_collection_into(decoder, &mut res)?;
        Ok(res)
    }

    /// Like [`JsonReader::read_nullable_collection`], appending into a
    /// caller-supplied sequence. Null elements are stored as `None`
    /// without invoking the element decoder.
    pub fn read_nullable_collection_into<D: ReadValue>(
        &mut self,
        decoder: &D,
        res: &mut Vec<Option<D::Value>>,
    ) -> Result<(), DecodeError> {
        if self.last == b']' {
            return Ok(());
        }
        loop {
            if self.was_null()? {
                res.push(None);
            } else {
                res.push(decoder.read(self)?);
            }
            if self.next_token()? != b',' {
                break;
            }
            self.next_token()?;
        }
        self.check_array_end()
    }
}
