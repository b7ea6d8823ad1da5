//! Golden vectors for decode and encode.
//!
//! These tables pin the exact error kind for every rejected shape, so any
//! reimplementation can be checked against the same inputs.

use hexwire_core::{
    decode, decode_big, decode_uint, decode_uint64, encode, encode_big, encode_uint,
    encode_uint64, HexError,
};
use num_bigint::BigInt;

/// Which decoder a vector exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Bytes,
    Big,
    Uint64,
    Uint,
}

/// A decode test vector.
#[derive(Debug, Clone)]
pub struct DecodeVector {
    /// Decoder under test.
    pub family: Family,
    /// Text fed to the decoder.
    pub input: &'static str,
    /// Expected value as unprefixed lowercase hex, or the expected error.
    pub want: Result<&'static str, HexError>,
    /// Overrides `want` on targets with a 32-bit machine word.
    pub want_32bit: Option<HexError>,
}

/// An encode test vector.
#[derive(Debug, Clone)]
pub enum EncodeVector {
    Bytes(&'static [u8], &'static str),
    /// Signed input as hex text with an optional `-`.
    Big(&'static str, &'static str),
    Uint64(u64, &'static str),
    Uint(usize, &'static str),
}

const fn ok(family: Family, input: &'static str, want: &'static str) -> DecodeVector {
    DecodeVector {
        family,
        input,
        want: Ok(want),
        want_32bit: None,
    }
}

const fn err(family: Family, input: &'static str, want: HexError) -> DecodeVector {
    DecodeVector {
        family,
        input,
        want: Err(want),
        want_32bit: None,
    }
}

const MAX_256: &str = "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";
const OVER_256: &str = "0x10000000000000000000000000000000000000000000000000000000000000000";

/// Byte string decode vectors.
pub fn bytes_vectors() -> Vec<DecodeVector> {
    use Family::Bytes;
    vec![
        // invalid
        err(Bytes, "0x", HexError::EmptyString),
        err(Bytes, "0x0", HexError::OddLength),
        err(Bytes, "0x023", HexError::OddLength),
        err(Bytes, "0xxx", HexError::Syntax),
        err(Bytes, "0x01zz01", HexError::Syntax),
        // invalid without prefix
        err(Bytes, "", HexError::EmptyString),
        err(Bytes, "0", HexError::OddLength),
        err(Bytes, "023", HexError::OddLength),
        err(Bytes, "xx", HexError::Syntax),
        err(Bytes, "01zz01", HexError::Syntax),
        // valid
        ok(Bytes, "0x02", "02"),
        ok(Bytes, "0X02", "02"),
        ok(Bytes, "0xffffffffff", "ffffffffff"),
        ok(
            Bytes,
            "0xffffffffffffffffffffffffffffffffffff",
            "ffffffffffffffffffffffffffffffffffff",
        ),
        // valid without prefix
        ok(Bytes, "02", "02"),
        ok(Bytes, "ffffffffff", "ffffffffff"),
        ok(
            Bytes,
            "ffffffffffffffffffffffffffffffffffff",
            "ffffffffffffffffffffffffffffffffffff",
        ),
    ]
}

/// Big quantity decode vectors.
pub fn big_vectors() -> Vec<DecodeVector> {
    use Family::Big;
    vec![
        // invalid
        err(Big, "", HexError::EmptyString),
        err(Big, "01", HexError::LeadingZero),
        err(Big, "x", HexError::Syntax),
        err(Big, "1zz01", HexError::Syntax),
        err(Big, &OVER_256[2..], HexError::Big256Range),
        // invalid with prefix
        err(Big, "0x", HexError::EmptyNumber),
        err(Big, "0x01", HexError::LeadingZero),
        err(Big, "0xx", HexError::Syntax),
        err(Big, "0x1zz01", HexError::Syntax),
        err(Big, OVER_256, HexError::Big256Range),
        // valid
        ok(Big, "0", "0"),
        ok(Big, "2", "2"),
        ok(Big, "2F2", "2f2"),
        ok(Big, "1122aaff", "1122aaff"),
        ok(Big, "bBb", "bbb"),
        ok(Big, "fffffffff", "fffffffff"),
        ok(Big, "112233445566778899aabbccddeeff", "112233445566778899aabbccddeeff"),
        ok(
            Big,
            "ffffffffffffffffffffffffffffffffffff",
            "ffffffffffffffffffffffffffffffffffff",
        ),
        ok(Big, MAX_256, MAX_256),
        // valid with prefix
        ok(Big, "0x0", "0"),
        ok(Big, "0x2", "2"),
        ok(Big, "0x2F2", "2f2"),
        ok(Big, "0X2F2", "2f2"),
        ok(Big, "0x1122aaff", "1122aaff"),
        ok(Big, "0xbBb", "bbb"),
        ok(Big, "0xfffffffff", "fffffffff"),
        ok(Big, "0x112233445566778899aabbccddeeff", "112233445566778899aabbccddeeff"),
        ok(
            Big,
            "0xffffffffffffffffffffffffffffffffffff",
            "ffffffffffffffffffffffffffffffffffff",
        ),
        ok(
            Big,
            "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            MAX_256,
        ),
    ]
}

/// 64-bit quantity decode vectors.
pub fn uint64_vectors() -> Vec<DecodeVector> {
    use Family::Uint64;
    vec![
        // invalid
        err(Uint64, "", HexError::EmptyString),
        err(Uint64, "01", HexError::LeadingZero),
        err(Uint64, "fffffffffffffffff", HexError::Uint64Range),
        err(Uint64, "x", HexError::Syntax),
        err(Uint64, "1zz01", HexError::Syntax),
        // invalid with prefix
        err(Uint64, "0x", HexError::EmptyNumber),
        err(Uint64, "0x01", HexError::LeadingZero),
        err(Uint64, "0xfffffffffffffffff", HexError::Uint64Range),
        err(Uint64, "0xx", HexError::Syntax),
        err(Uint64, "0x1zz01", HexError::Syntax),
        // valid
        ok(Uint64, "0", "0"),
        ok(Uint64, "2", "2"),
        ok(Uint64, "2F2", "2f2"),
        ok(Uint64, "1122aaff", "1122aaff"),
        ok(Uint64, "bbb", "bbb"),
        ok(Uint64, "ffffffffffffffff", "ffffffffffffffff"),
        // valid with prefix
        ok(Uint64, "0x0", "0"),
        ok(Uint64, "0x2", "2"),
        ok(Uint64, "0x2F2", "2f2"),
        ok(Uint64, "0X2F2", "2f2"),
        ok(Uint64, "0x1122aaff", "1122aaff"),
        ok(Uint64, "0xbbb", "bbb"),
        ok(Uint64, "0xffffffffffffffff", "ffffffffffffffff"),
    ]
}

/// Machine-word quantity decode vectors.
pub fn uint_vectors() -> Vec<DecodeVector> {
    use Family::Uint;
    let mut vectors = vec![
        // invalid
        err(Uint, "", HexError::EmptyString),
        err(Uint, "0x", HexError::EmptyNumber),
        err(Uint, "0x01", HexError::LeadingZero),
        err(Uint, "0xx", HexError::Syntax),
        err(Uint, "0x1zz01", HexError::Syntax),
        // valid
        ok(Uint, "0", "0"),
        ok(Uint, "0x2F2", "2f2"),
        ok(Uint, "0xffffffff", "ffffffff"),
    ];
    vectors.push(DecodeVector {
        want_32bit: Some(HexError::Uint32Range),
        ..err(Uint, "0xfffffffffffffffff", HexError::Uint64Range)
    });
    vectors.push(DecodeVector {
        want_32bit: Some(HexError::Uint32Range),
        ..ok(Uint, "0x100000000", "100000000")
    });
    vectors.push(DecodeVector {
        want_32bit: Some(HexError::Uint32Range),
        ..ok(Uint, "0xffffffffffffffff", "ffffffffffffffff")
    });
    vectors
}

/// Get all decode vectors.
pub fn all_decode_vectors() -> Vec<DecodeVector> {
    let mut all = bytes_vectors();
    all.extend(big_vectors());
    all.extend(uint64_vectors());
    all.extend(uint_vectors());
    all
}

/// Get all encode vectors.
pub fn encode_vectors() -> Vec<EncodeVector> {
    vec![
        EncodeVector::Bytes(&[], ""),
        EncodeVector::Bytes(&[0], "00"),
        EncodeVector::Bytes(&[0, 0, 1, 2], "00000102"),
        EncodeVector::Big("0", "0"),
        EncodeVector::Big("1", "1"),
        EncodeVector::Big("ff", "ff"),
        EncodeVector::Big("112233445566778899aabbccddeeff", "112233445566778899aabbccddeeff"),
        EncodeVector::Big("80a7f2c1bcc396c00", "80a7f2c1bcc396c00"),
        EncodeVector::Big("-80a7f2c1bcc396c00", "-80a7f2c1bcc396c00"),
        EncodeVector::Uint64(0, "0"),
        EncodeVector::Uint64(1, "1"),
        EncodeVector::Uint64(0xff, "ff"),
        EncodeVector::Uint64(0x1122334455667788, "1122334455667788"),
        EncodeVector::Uint(0, "0"),
        EncodeVector::Uint(1, "1"),
        EncodeVector::Uint(0xff, "ff"),
        EncodeVector::Uint(0x11223344, "11223344"),
    ]
}

impl DecodeVector {
    /// The expected outcome on the current target.
    pub fn expected(&self) -> Result<&'static str, HexError> {
        match self.want_32bit {
            Some(e) if usize::BITS == 32 => Err(e),
            _ => self.want,
        }
    }

    /// Run the decoder and render the outcome comparably with [`expected`](Self::expected).
    ///
    /// Successful results are re-encoded, so a bytes vector yields two digits per
    /// byte and quantities yield their canonical form.
    pub fn run(&self) -> Result<String, HexError> {
        match self.family {
            Family::Bytes => decode(self.input).map(encode),
            Family::Big => decode_big(self.input).map(|v| encode_big(&v)),
            Family::Uint64 => decode_uint64(self.input).map(encode_uint64),
            Family::Uint => decode_uint(self.input).map(encode_uint),
        }
    }

    /// Whether the decoder behaves as the vector demands.
    pub fn passes(&self) -> bool {
        match (self.run(), self.expected()) {
            (Ok(got), Ok(want)) => values_match(self.family, &got, want),
            (Err(got), Err(want)) => got == want,
            _ => false,
        }
    }
}

/// Compare decoded output against the expected digits by value.
fn values_match(family: Family, got: &str, want: &str) -> bool {
    match family {
        Family::Bytes => match (hex::decode(got), hex::decode(want)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        },
        Family::Big => {
            BigInt::parse_bytes(got.as_bytes(), 16) == BigInt::parse_bytes(want.as_bytes(), 16)
        }
        Family::Uint64 | Family::Uint => {
            matches!(
                (u64::from_str_radix(got, 16), u64::from_str_radix(want, 16)),
                (Ok(a), Ok(b)) if a == b
            )
        }
    }
}

impl EncodeVector {
    /// Run the encoder; `None` if the vector's input is itself malformed.
    pub fn run(&self) -> Option<String> {
        match self {
            EncodeVector::Bytes(bytes, _) => Some(encode(bytes)),
            EncodeVector::Big(value, _) => {
                BigInt::parse_bytes(value.as_bytes(), 16).map(|v| encode_big(&v))
            }
            EncodeVector::Uint64(value, _) => Some(encode_uint64(*value)),
            EncodeVector::Uint(value, _) => Some(encode_uint(*value)),
        }
    }

    pub fn want(&self) -> &'static str {
        match self {
            EncodeVector::Bytes(_, want)
            | EncodeVector::Big(_, want)
            | EncodeVector::Uint64(_, want)
            | EncodeVector::Uint(_, want) => want,
        }
    }
}

/// Verify all vectors against the current implementation.
///
/// Returns `(name, matches, got)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let decodes = all_decode_vectors().into_iter().map(|v| {
        let got = match v.run() {
            Ok(text) => text,
            Err(e) => format!("error: {}", e),
        };
        (format!("decode {:?} {:?}", v.family, v.input), v.passes(), got)
    });

    let encodes = encode_vectors().into_iter().map(|v| {
        let got = v.run().unwrap_or_default();
        let matches = v.run().as_deref() == Some(v.want());
        (format!("encode {:?}", v), matches, got)
    });

    decodes.chain(encodes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        for (name, matches, got) in verify_all_vectors() {
            assert!(matches, "vector {} failed, got {}", name, got);
        }
    }

    #[test]
    fn test_vectors_are_deterministic() {
        for vector in all_decode_vectors() {
            assert_eq!(vector.run(), vector.run(), "vector {:?} is unstable", vector.input);
        }
    }

    #[test]
    fn test_word_width_override() {
        let vector = uint_vectors()
            .into_iter()
            .find(|v| v.input == "0x100000000")
            .unwrap();
        if usize::BITS == 32 {
            assert_eq!(vector.expected(), Err(HexError::Uint32Range));
        } else {
            assert_eq!(vector.expected(), Ok("100000000"));
        }
    }

    #[test]
    fn test_every_error_kind_is_covered() {
        let kinds: Vec<HexError> = all_decode_vectors()
            .iter()
            .filter_map(|v| v.want.err())
            .collect();
        for kind in [
            HexError::EmptyString,
            HexError::EmptyNumber,
            HexError::Syntax,
            HexError::OddLength,
            HexError::LeadingZero,
            HexError::Big256Range,
            HexError::Uint64Range,
        ] {
            assert!(kinds.contains(&kind), "no vector for {:?}", kind);
        }
    }
}
