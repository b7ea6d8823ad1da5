//! Fixed-width unsigned quantity codec.
//!
//! One generic routine serves every width; [`FixedQuantity`] supplies the bit
//! width, the overflow error and the digit accumulation.

use std::fmt::LowerHex;

use crate::error::HexError;
use crate::validation::{checked_quantity, nibble};

/// An unsigned integer type with a fixed bit width.
pub trait FixedQuantity: Copy + LowerHex {
    /// Width of the type in bits.
    const BITS: u32;

    /// Error reported when the digits do not fit.
    const RANGE_ERROR: HexError;

    /// Accumulate digits, most significant first.
    ///
    /// Returns `None` on a non-hex byte. Callers guarantee at most `BITS / 4`
    /// digits.
    fn from_digits(digits: &[u8]) -> Option<Self>;

    /// Largest digit count that always fits.
    fn max_digits() -> usize {
        (Self::BITS / 4) as usize
    }
}

macro_rules! impl_fixed_quantity {
    ($ty:ty, $range:expr) => {
        impl FixedQuantity for $ty {
            const BITS: u32 = <$ty>::BITS;
            const RANGE_ERROR: HexError = $range;

            fn from_digits(digits: &[u8]) -> Option<Self> {
                digits
                    .iter()
                    .try_fold(0, |acc: $ty, &b| Some((acc << 4) | <$ty>::from(nibble(b)?)))
            }
        }
    };
}

impl_fixed_quantity!(u32, HexError::Uint32Range);
impl_fixed_quantity!(u64, HexError::Uint64Range);
impl_fixed_quantity!(
    usize,
    if usize::BITS == 32 {
        HexError::Uint32Range
    } else {
        HexError::Uint64Range
    }
);

/// Encode a fixed-width quantity as lowercase hex without a prefix.
pub fn encode_fixed<T: FixedQuantity>(value: T) -> String {
    format!("{:x}", value)
}

/// Decode a fixed-width quantity, with or without a `0x` prefix.
pub fn decode_fixed<T: FixedQuantity>(text: &str) -> Result<T, HexError> {
    let digits = checked_quantity(text, T::max_digits(), T::RANGE_ERROR)?;
    T::from_digits(digits.as_bytes()).ok_or(HexError::Syntax)
}

pub fn encode_uint64(value: u64) -> String {
    encode_fixed(value)
}

pub fn decode_uint64(text: &str) -> Result<u64, HexError> {
    decode_fixed(text)
}

pub fn encode_uint32(value: u32) -> String {
    encode_fixed(value)
}

pub fn decode_uint32(text: &str) -> Result<u32, HexError> {
    decode_fixed(text)
}

/// Encode a machine-word quantity.
pub fn encode_uint(value: usize) -> String {
    encode_fixed(value)
}

/// Decode a machine-word quantity.
///
/// On 32-bit targets overflow is [`HexError::Uint32Range`].
pub fn decode_uint(text: &str) -> Result<usize, HexError> {
    decode_fixed(text)
}
