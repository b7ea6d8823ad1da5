//! Input validation shared by every decoder: prefix stripping and digit checks.

use crate::error::HexError;

/// Strip one optional `0x`/`0X` prefix.
///
/// Returns the remaining digits and whether a prefix was removed.
pub fn strip_prefix(text: &str) -> (&str, bool) {
    match text.as_bytes() {
        [b'0', b'x' | b'X', ..] => (&text[2..], true),
        _ => (text, false),
    }
}

/// Check that every character is an ASCII hex digit.
pub fn check_digits(digits: &str) -> Result<(), HexError> {
    if digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(HexError::Syntax)
    }
}

/// Validate a byte string and return its digits.
///
/// This performs:
/// - Empty check (bare or after the prefix)
/// - Odd length check
/// - Digit check
pub fn checked_bytes(text: &str) -> Result<&str, HexError> {
    // 1. Empty input
    if text.is_empty() {
        return Err(HexError::EmptyString);
    }

    // 2. Optional prefix; "0x" alone is still an empty byte string
    let (digits, _) = strip_prefix(text);
    if digits.is_empty() {
        return Err(HexError::EmptyString);
    }

    // 3. Two digits per byte
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength);
    }

    // 4. Digits only
    check_digits(digits)?;

    Ok(digits)
}

/// Validate a quantity and return its digits.
///
/// `max_digits` bounds the digit count; longer input fails with `range_error`.
/// The returned digits are non-empty, hex only, and free of leading zeros
/// unless they are exactly `"0"`.
pub fn checked_quantity(
    text: &str,
    max_digits: usize,
    range_error: HexError,
) -> Result<&str, HexError> {
    // 1. Optional prefix
    let (digits, had_prefix) = strip_prefix(text);

    // 2. Nothing to parse
    if digits.is_empty() {
        return Err(if had_prefix {
            HexError::EmptyNumber
        } else {
            HexError::EmptyString
        });
    }

    // 3. Digits only
    check_digits(digits)?;

    // 4. Canonical form
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(HexError::LeadingZero);
    }

    // 5. Width
    if digits.len() > max_digits {
        return Err(range_error);
    }

    Ok(digits)
}

/// Value of a single hex digit, `None` for anything else.
pub(crate) fn nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_prefix("0x12"), ("12", true));
        assert_eq!(strip_prefix("0X12"), ("12", true));
        assert_eq!(strip_prefix("0x"), ("", true));
        assert_eq!(strip_prefix("12"), ("12", false));
        assert_eq!(strip_prefix("0"), ("0", false));
        assert_eq!(strip_prefix(""), ("", false));
    }

    #[test]
    fn test_strip_prefix_only_once() {
        assert_eq!(strip_prefix("0x0x12"), ("0x12", true));
    }

    #[test]
    fn test_check_digits() {
        assert!(check_digits("0123456789abcdefABCDEF").is_ok());
        assert_eq!(check_digits("12g4"), Err(HexError::Syntax));
        assert_eq!(check_digits("-1"), Err(HexError::Syntax));
        assert_eq!(check_digits("ａ"), Err(HexError::Syntax));
    }

    #[test]
    fn test_checked_bytes_order() {
        assert_eq!(checked_bytes(""), Err(HexError::EmptyString));
        assert_eq!(checked_bytes("0x"), Err(HexError::EmptyString));
        // Length is checked before digits
        assert_eq!(checked_bytes("0xz"), Err(HexError::OddLength));
        assert_eq!(checked_bytes("0xzz"), Err(HexError::Syntax));
        assert_eq!(checked_bytes("0XaB"), Ok("aB"));
    }

    #[test]
    fn test_checked_quantity_empty_distinction() {
        assert_eq!(checked_quantity("", 16, HexError::Uint64Range), Err(HexError::EmptyString));
        assert_eq!(checked_quantity("0x", 16, HexError::Uint64Range), Err(HexError::EmptyNumber));
        assert_eq!(checked_quantity("0X", 16, HexError::Uint64Range), Err(HexError::EmptyNumber));
    }

    #[test]
    fn test_checked_quantity_order() {
        // Syntax before leading zero, leading zero before range
        assert_eq!(checked_quantity("0z", 16, HexError::Uint64Range), Err(HexError::Syntax));
        assert_eq!(
            checked_quantity("000000000000000001", 16, HexError::Uint64Range),
            Err(HexError::LeadingZero)
        );
        assert_eq!(
            checked_quantity("123456789", 8, HexError::Uint32Range),
            Err(HexError::Uint32Range)
        );
        assert_eq!(checked_quantity("0", 1, HexError::Uint32Range), Ok("0"));
        assert_eq!(checked_quantity("0x0", 1, HexError::Uint32Range), Ok("0"));
    }

    #[test]
    fn test_nibble() {
        assert_eq!(nibble(b'0'), Some(0));
        assert_eq!(nibble(b'9'), Some(9));
        assert_eq!(nibble(b'a'), Some(10));
        assert_eq!(nibble(b'F'), Some(15));
        assert_eq!(nibble(b'g'), None);
        assert_eq!(nibble(b'x'), None);
    }
}
