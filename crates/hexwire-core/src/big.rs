//! Arbitrary-precision quantity codec.
//!
//! Encoding handles any signed value. Decoding never accepts a sign and is
//! bounded to [`BIG_MAX_BITS`].

use num_bigint::{BigInt, BigUint};

use crate::error::HexError;
use crate::validation::checked_quantity;

/// Widest quantity accepted by [`decode_big`].
pub const BIG_MAX_BITS: usize = 256;

/// Encode a big quantity as lowercase hex without a prefix.
///
/// Zero is `"0"`; negative values carry a leading `-`.
pub fn encode_big(value: &BigInt) -> String {
    value.to_str_radix(16)
}

/// Decode a big quantity, with or without a `0x` prefix.
///
/// The result is always non-negative.
pub fn decode_big(text: &str) -> Result<BigInt, HexError> {
    let digits = checked_quantity(text, BIG_MAX_BITS / 4, HexError::Big256Range)?;
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 16).ok_or(HexError::Syntax)?;
    Ok(BigInt::from(magnitude))
}
