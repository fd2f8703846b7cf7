//! Error types for the streaming JSON codec layer.

use thiserror::Error;

/// Arbitrary underlying cause of an instance-factory failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while decoding a token stream.
///
/// Every variant is fail-fast: the current `read` call aborts and no
/// partially populated value is ever returned to the caller.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// An expected delimiter, separator, or literal was not found.
    #[error("expecting '{expected}' at position {position}, found '{found}'")]
    Syntax {
        expected: String,
        found: char,
        position: usize,
    },

    /// A keyed-container key decoded to null.
    #[error("null value detected for key element of {label} at position {position}")]
    NullKey { label: String, position: usize },

    /// The instance factory failed to produce a fresh container.
    #[error("unable to create a new instance of {label}")]
    InstanceCreation {
        label: String,
        #[source]
        source: BoxError,
    },

    /// A boolean position held neither the `true` nor the `false` literal.
    #[error("found invalid boolean value at position {position}")]
    InvalidLiteral { position: usize },

    /// A string body contained an invalid escape sequence.
    #[error("invalid string escape at position {position}")]
    InvalidEscape { position: usize },

    /// A string body was not valid UTF-8.
    #[error("invalid utf-8 in string at position {position}")]
    InvalidUtf8 { position: usize },

    /// The input ended before the current token could be completed.
    #[error("unexpected end of input at position {position}")]
    UnexpectedEnd { position: usize },
}

impl DecodeError {
    /// Byte offset in the stream where the error was raised, when the
    /// variant carries one.
    pub fn position(&self) -> Option<usize> {
        match self {
            DecodeError::Syntax { position, .. }
            | DecodeError::NullKey { position, .. }
            | DecodeError::InvalidLiteral { position }
            | DecodeError::InvalidEscape { position }
            | DecodeError::InvalidUtf8 { position }
            | DecodeError::UnexpectedEnd { position } => Some(*position),
            DecodeError::InstanceCreation { .. } => None,
        }
    }
}
