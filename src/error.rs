//! Error types for vector append and deserialization.

use std::fmt;

use crate::constants::{MAX_VALUE, MIN_VALUE};

/// Error returned when appending a value fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendError {
    /// Value is outside the encodable range
    ValueOutOfRange {
        /// The rejected value
        value: i64,
    },
}

/// Error returned when decoding a serialized vector fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer is too short to contain the declared data
    BufferTooShort {
        /// Bytes required by the header fields
        expected: usize,
        /// Bytes actually provided
        actual: usize,
    },
    /// Trailing bytes follow a complete vector
    TrailingData {
        /// Unconsumed byte count
        remaining: usize,
    },
    /// Field values are inconsistent or violate the structure invariants
    MalformedData,
}

impl fmt::Display for AppendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOutOfRange { value } => {
                write!(
                    f,
                    "value {value} is outside the encodable range [{MIN_VALUE}, {MAX_VALUE}]"
                )
            }
        }
    }
}

impl std::error::Error for AppendError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooShort { expected, actual } => {
                write!(
                    f,
                    "buffer too short: expected at least {expected} bytes, got {actual}"
                )
            }
            Self::TrailingData { remaining } => {
                write!(f, "{remaining} trailing bytes after encoded vector")
            }
            Self::MalformedData => write!(f, "encoded data is malformed or corrupted"),
        }
    }
}

impl std::error::Error for DecodeError {}
