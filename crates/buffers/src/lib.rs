//! Byte buffer primitives for the json-codec workspace.

mod writer;

pub use writer::Writer;
