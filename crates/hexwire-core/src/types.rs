//! Typed wire values.
//!
//! Each newtype renders as the caller-facing `0x`-prefixed text and parses
//! through the strict decoders, so they drop straight into serde payloads.

use num_bigint::BigInt;
use num_traits::Signed;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::big::{decode_big, encode_big};
use crate::bytes::{decode, encode};
use crate::error::HexError;
use crate::uint::{decode_uint, decode_uint64, encode_uint, encode_uint64};

/// A byte string that travels as hex text.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the raw bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    /// Convert to unprefixed hex.
    pub fn to_hex(&self) -> String {
        encode(&self.0)
    }
}

impl fmt::Debug for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexBytes(0x{})", self.to_hex())
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl FromStr for HexBytes {
    type Err = HexError;

    /// A bare `0x` is the empty byte string, matching what `Display` emits
    /// for it. Bare empty text is still rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "0x" || s == "0X" {
            return Ok(Self(Vec::new()));
        }
        decode(s).map(Self)
    }
}

impl AsRef<[u8]> for HexBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// An arbitrary-precision quantity that travels as hex text.
///
/// Negative values render as `-0x...` but never parse back: the decoder only
/// accepts non-negative input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HexBig(pub BigInt);

impl HexBig {
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

impl fmt::Display for HexBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_negative() {
            write!(f, "-0x{}", encode_big(&-&self.0))
        } else {
            write!(f, "0x{}", encode_big(&self.0))
        }
    }
}

impl FromStr for HexBig {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_big(s).map(Self)
    }
}

impl From<BigInt> for HexBig {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

/// A 64-bit quantity that travels as hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct HexU64(pub u64);

impl HexU64 {
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HexU64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", encode_uint64(self.0))
    }
}

impl FromStr for HexU64 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_uint64(s).map(Self)
    }
}

impl From<u64> for HexU64 {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A machine-word quantity that travels as hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct HexUint(pub usize);

impl HexUint {
    pub const fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for HexUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", encode_uint(self.0))
    }
}

impl FromStr for HexUint {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_uint(s).map(Self)
    }
}

impl From<usize> for HexUint {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// Serialize as the `Display` text, deserialize from a string via `FromStr`.
macro_rules! impl_serde_as_text {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let text = String::deserialize(deserializer)?;
                    text.parse().map_err(de::Error::custom)
                }
            }
        )*
    };
}

impl_serde_as_text!(HexBytes, HexBig, HexU64, HexUint);

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[test]
    fn test_hex_bytes_display() {
        let b = HexBytes(vec![0x00, 0x01, 0x02]);
        assert_eq!(b.to_string(), "0x000102");
        assert_eq!(format!("{:?}", b), "HexBytes(0x000102)");
        assert_eq!(HexBytes::default().to_string(), "0x");
    }

    #[test]
    fn test_hex_bytes_parse() {
        let b: HexBytes = "0XFF".parse().unwrap();
        assert_eq!(b.as_bytes(), &[0xff]);
        assert_eq!("0x0".parse::<HexBytes>(), Err(HexError::OddLength));
    }

    #[test]
    fn test_hex_bytes_empty() {
        assert_eq!("0x".parse::<HexBytes>(), Ok(HexBytes::default()));
        assert_eq!("0X".parse::<HexBytes>(), Ok(HexBytes::default()));
        assert_eq!("".parse::<HexBytes>(), Err(HexError::EmptyString));
        // The core decoder keeps rejecting it
        assert_eq!(decode("0x"), Err(HexError::EmptyString));

        let json = serde_json::to_string(&HexBytes::default()).unwrap();
        assert_eq!(json, r#""0x""#);
        assert_eq!(serde_json::from_str::<HexBytes>(&json).unwrap(), HexBytes::default());
    }

    #[test]
    fn test_hex_big_display() {
        assert_eq!(HexBig(BigInt::from(0xbbb)).to_string(), "0xbbb");
        assert_eq!(HexBig(BigInt::from(0)).to_string(), "0x0");
        assert_eq!(HexBig(BigInt::from(-0x80)).to_string(), "-0x80");
    }

    #[test]
    fn test_hex_big_parse() {
        let v: HexBig = "0xbBb".parse().unwrap();
        assert_eq!(v.value(), &BigInt::from(0xbbb));
        assert_eq!("-0x80".parse::<HexBig>(), Err(HexError::Syntax));
    }

    #[test]
    fn test_hex_u64_display_parse() {
        assert_eq!(HexU64(0).to_string(), "0x0");
        assert_eq!(HexU64(u64::MAX).to_string(), "0xffffffffffffffff");
        assert_eq!("0x1122aaff".parse::<HexU64>(), Ok(HexU64(0x1122aaff)));
        assert_eq!("0x01".parse::<HexU64>(), Err(HexError::LeadingZero));
    }

    #[test]
    fn test_hex_uint_display_parse() {
        assert_eq!(HexUint(0xff).to_string(), "0xff");
        assert_eq!("ff".parse::<HexUint>(), Ok(HexUint(0xff)));
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Call {
        data: HexBytes,
        value: HexBig,
        nonce: HexU64,
        index: HexUint,
    }

    #[test]
    fn test_json_payload() {
        let call = Call {
            data: HexBytes(vec![0xde, 0xad]),
            value: HexBig(BigInt::from(0x2f2)),
            nonce: HexU64(7),
            index: HexUint(0),
        };
        let json = serde_json::to_string(&call).unwrap();
        assert_eq!(
            json,
            r#"{"data":"0xdead","value":"0x2f2","nonce":"0x7","index":"0x0"}"#
        );
        let back: Call = serde_json::from_str(&json).unwrap();
        assert_eq!(back, call);
    }

    #[test]
    fn test_json_rejects_malformed() {
        let err = serde_json::from_str::<HexU64>(r#""0x01""#).unwrap_err();
        assert!(err.to_string().contains("leading zero"));

        let err = serde_json::from_str::<HexBytes>(r#""0x023""#).unwrap_err();
        assert!(err.to_string().contains("odd length"));

        assert!(serde_json::from_str::<HexU64>("7").is_err());
    }
}
