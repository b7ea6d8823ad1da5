//! Error types for the codec facade.

use hexwire_core::HexError;
use thiserror::Error;

/// Errors that can occur while decoding wire text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WireError {
    /// The text itself is malformed.
    #[error("{0}")]
    Hex(#[from] HexError),

    /// The codec requires a `0x` prefix and the input has none.
    #[error("hex string without 0x prefix")]
    MissingPrefix,
}

impl WireError {
    /// The underlying codec error, if any.
    pub fn hex_error(&self) -> Option<HexError> {
        match self {
            WireError::Hex(e) => Some(*e),
            WireError::MissingPrefix => None,
        }
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, WireError>;
