//! Streaming JSON codec layer: a token-level reader/writer pair and the
//! composition seams type-specific codecs are built from.
//!
//! The two worked-out codecs — the keyed-container decoder in [`map`] and
//! the boolean scalar/array/collection codec in [`boolean`] — define the
//! decode state machine, buffer-growth, and error-reporting contract the
//! rest of a codec suite follows.
//!
//! Decoders are immutable, stateless values, safe to share across threads;
//! each decode call exclusively owns its [`JsonReader`] cursor and either
//! returns a fully built value or fails with a [`DecodeError`], never a
//! partial one.

pub mod boolean;
pub mod codec;
pub mod error;
pub mod map;
pub mod reader;
pub mod string;
pub mod writer;

pub use codec::{ReadValue, WriteValue};
pub use error::{BoxError, DecodeError};
pub use map::{Keyed, MapDecoder};
pub use reader::JsonReader;
pub use string::StringReader;
pub use writer::JsonWriter;
