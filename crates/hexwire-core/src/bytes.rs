//! Byte string codec.
//!
//! Each byte is always two lowercase digits, most significant nibble first.

use crate::error::HexError;
use crate::validation::checked_bytes;

/// Encode bytes as lowercase hex without a prefix.
///
/// Empty input yields the empty string.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a byte string, with or without a `0x` prefix.
pub fn decode(text: &str) -> Result<Vec<u8>, HexError> {
    let digits = checked_bytes(text)?;
    Ok(hex::decode(digits)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode([0u8; 0]), "");
        assert_eq!(encode([0u8]), "00");
        assert_eq!(encode([0u8, 1, 2]), "000102");
        assert_eq!(encode([0u8, 0, 1, 2]), "00000102");
        assert_eq!(encode([0xabu8, 0xCD]), "abcd");
    }

    #[test]
    fn test_decode_invalid() {
        assert_eq!(decode(""), Err(HexError::EmptyString));
        assert_eq!(decode("0x"), Err(HexError::EmptyString));
        assert_eq!(decode("0x0"), Err(HexError::OddLength));
        assert_eq!(decode("0x023"), Err(HexError::OddLength));
        assert_eq!(decode("0"), Err(HexError::OddLength));
        assert_eq!(decode("023"), Err(HexError::OddLength));
        assert_eq!(decode("0xxx"), Err(HexError::Syntax));
        assert_eq!(decode("0x01zz01"), Err(HexError::Syntax));
        assert_eq!(decode("xx"), Err(HexError::Syntax));
        assert_eq!(decode("01zz01"), Err(HexError::Syntax));
    }

    #[test]
    fn test_decode_valid() {
        assert_eq!(decode("0x02").unwrap(), vec![0x02]);
        assert_eq!(decode("0X02").unwrap(), vec![0x02]);
        assert_eq!(decode("02").unwrap(), vec![0x02]);
        assert_eq!(decode("0xffffffffff").unwrap(), vec![0xff; 5]);
        assert_eq!(decode("ffffffffffffffffffffffffffffffffffff").unwrap(), vec![0xff; 18]);
    }

    #[test]
    fn test_decode_case_insensitive() {
        assert_eq!(decode("0XFF").unwrap(), vec![0xff]);
        assert_eq!(decode("0xff").unwrap(), vec![0xff]);
        assert_eq!(decode("0xAbCd").unwrap(), vec![0xab, 0xcd]);
    }

    #[test]
    fn test_decode_keeps_leading_zero_bytes() {
        assert_eq!(decode("0x000001").unwrap(), vec![0, 0, 1]);
    }

    proptest! {
        #[test]
        fn test_roundtrip(bytes in prop::collection::vec(any::<u8>(), 1..256)) {
            let text = encode(&bytes);
            prop_assert_eq!(text.len(), bytes.len() * 2);
            prop_assert_eq!(decode(&text).unwrap(), bytes.clone());
            prop_assert_eq!(decode(&format!("0x{}", text)).unwrap(), bytes);
        }
    }
}
