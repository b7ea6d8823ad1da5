//! # Hexwire Core
//!
//! Pure hex codec for textual wire values: byte strings and quantities.
//!
//! This crate contains no I/O, no logging, no shared state. Every function is
//! a pure conversion between an in-memory value and its hex text.
//!
//! ## Value Kinds
//!
//! - **Byte strings** ([`encode`] / [`decode`]) - two digits per byte, never
//!   canonicalized against leading zeros
//! - **Big quantities** ([`encode_big`] / [`decode_big`]) - arbitrary precision,
//!   decode limited to 256 bits
//! - **Fixed-width quantities** ([`encode_uint64`] / [`decode_uint64`],
//!   [`encode_uint`] / [`decode_uint`]) - one generic routine over the width
//!
//! ## Accepted Text
//!
//! Decoders accept an optional `0x`/`0X` prefix and case-insensitive digits.
//! Encoders never emit the prefix; see [`types`] for the prefixed wire form.

pub mod big;
pub mod bytes;
pub mod error;
pub mod types;
pub mod uint;
pub mod validation;

pub use big::{decode_big, encode_big, BIG_MAX_BITS};
pub use bytes::{decode, encode};
pub use error::HexError;
pub use types::{HexBig, HexBytes, HexU64, HexUint};
pub use uint::{
    decode_fixed, decode_uint, decode_uint32, decode_uint64, encode_fixed, encode_uint,
    encode_uint32, encode_uint64, FixedQuantity,
};
pub use validation::{check_digits, checked_bytes, checked_quantity, strip_prefix};
