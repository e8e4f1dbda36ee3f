//! Error types for id parsing, decoding, and storage reads.

use std::fmt;

use thiserror::Error;

/// The textual encoding an id was being parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Hyphenated lowercase hex, `8-4-4-4-12`.
    Canonical,
    /// Fixed-width base-N text over an [`Alphabet`](crate::Alphabet).
    Short,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Canonical => f.write_str("canonical"),
            Encoding::Short => f.write_str("short"),
        }
    }
}

/// Errors that can occur when parsing, decoding, or reading IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input text does not follow the grammar of its encoding.
    #[error("invalid {encoding} id: {reason}")]
    InvalidFormat { encoding: Encoding, reason: String },

    /// A storage value has a shape that cannot hold an id.
    #[error("cannot read storage value of type {found} as an id")]
    TypeMismatch { found: String },

    /// A custom alphabet was rejected.
    #[error("invalid alphabet: {reason}")]
    InvalidAlphabet { reason: String },
}

impl IdError {
    pub(crate) fn invalid_canonical(reason: impl Into<String>) -> Self {
        IdError::InvalidFormat {
            encoding: Encoding::Canonical,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_short(reason: impl Into<String>) -> Self {
        IdError::InvalidFormat {
            encoding: Encoding::Short,
            reason: reason.into(),
        }
    }

    /// Returns true if the input text was malformed.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, IdError::InvalidFormat { .. })
    }

    /// Returns true if a storage read got a value of the wrong shape.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, IdError::TypeMismatch { .. })
    }
}
