//! Error types for the hex codec.

use thiserror::Error;

/// Every way a decode can fail.
///
/// The taxonomy is closed: a decoder returns either a value or exactly one of
/// these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum HexError {
    /// Nothing to parse and no prefix was present.
    #[error("empty hex string")]
    EmptyString,

    /// A `0x` prefix with no digits after it.
    #[error("hex string \"0x\"")]
    EmptyNumber,

    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex string")]
    Syntax,

    /// Byte strings need two digits per byte.
    #[error("hex string of odd length")]
    OddLength,

    /// Quantities may not start with `0` unless they are exactly `0`.
    #[error("hex number with leading zero digits")]
    LeadingZero,

    #[error("hex number > 256 bits")]
    Big256Range,

    #[error("hex number > 64 bits")]
    Uint64Range,

    #[error("hex number > 32 bits")]
    Uint32Range,
}

impl From<hex::FromHexError> for HexError {
    fn from(e: hex::FromHexError) -> Self {
        match e {
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                HexError::OddLength
            }
            hex::FromHexError::InvalidHexCharacter { .. } => HexError::Syntax,
        }
    }
}
