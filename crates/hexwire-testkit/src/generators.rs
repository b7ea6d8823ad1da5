//! Proptest generators for property-based testing.

use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

use hexwire_core::BIG_MAX_BITS;

/// Generate a byte string of at least one byte.
pub fn byte_string(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=max_len.max(1))
}

/// Generate a non-negative integer of at most 256 bits.
pub fn big_quantity() -> impl Strategy<Value = BigInt> {
    prop::collection::vec(any::<u8>(), 0..=BIG_MAX_BITS / 8)
        .prop_map(|bytes| BigInt::from(BigUint::from_bytes_be(&bytes)))
}

/// Generate a signed integer of any width up to 512 bits.
pub fn signed_big() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(any::<u8>(), 0..=64)).prop_map(|(negative, bytes)| {
        let magnitude = BigInt::from(BigUint::from_bytes_be(&bytes));
        if negative {
            -magnitude
        } else {
            magnitude
        }
    })
}

/// Generate one of the accepted prefixes, including none.
pub fn prefix() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("0x"), Just("0X")]
}

/// Re-case hex digits, one flag per character.
pub fn mixed_case(digits: &str, upper: &[bool]) -> String {
    digits
        .chars()
        .zip(upper.iter().chain(std::iter::repeat(&false)))
        .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
        .collect()
}

/// Generate valid wire text for the given canonical digits: random prefix
/// and random letter case.
pub fn wire_text(digits: String) -> impl Strategy<Value = String> {
    let len = digits.len();
    (prefix(), prop::collection::vec(any::<bool>(), len))
        .prop_map(move |(prefix, upper)| format!("{}{}", prefix, mixed_case(&digits, &upper)))
}

/// Generate text containing at least one non-hex character.
pub fn non_hex_text() -> impl Strategy<Value = String> {
    ("[0-9a-f]{0,8}", "[g-wyzG-WYZ_ .-]", "[0-9a-f]{0,8}")
        .prop_map(|(head, bad, tail)| format!("{}{}{}", head, bad, tail))
}
