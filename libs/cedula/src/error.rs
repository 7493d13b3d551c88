//! Error types for cedula validation.

use thiserror::Error;

/// Ways a cedula can fail validation.
///
/// The variants are mutually exclusive and checked in a fixed order:
/// format, then (after the whitelist is consulted) length, then checksum.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The compacted input contains a character outside 0-9, or is empty.
    #[error("number contains non-digit characters")]
    InvalidFormat,

    /// The compacted input is not exactly 11 digits and is not a listed
    /// exception.
    #[error("number is not 11 digits long")]
    InvalidLength,

    /// The number is well-formed but fails the Luhn check digit.
    #[error("number fails the checksum")]
    InvalidChecksum,
}

impl ValidationError {
    /// Returns true for the format error kind.
    pub fn is_format(&self) -> bool {
        matches!(self, ValidationError::InvalidFormat)
    }

    /// Returns true for the length error kind.
    pub fn is_length(&self) -> bool {
        matches!(self, ValidationError::InvalidLength)
    }

    /// Returns true for the checksum error kind.
    pub fn is_checksum(&self) -> bool {
        matches!(self, ValidationError::InvalidChecksum)
    }
}
