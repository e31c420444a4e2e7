//! Base-36 identifier codec.
//!
//! Maps non-negative counter values to the short identifiers handed out to
//! users and back. The mapping is a bijection between `0..=i64::MAX` and the
//! canonical base-36 strings over `0-9a-z` (no leading zeros except `"0"`).

use thiserror::Error;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const BASE: i64 = 36;

/// Errors raised by [`encode`] and [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Encodes a non-negative integer as a base-36 identifier.
///
/// # Errors
///
/// Returns [`CodecError::InvalidArgument`] if `n` is negative.
///
/// # Examples
///
/// ```
/// use shortly::domain::codec::encode;
///
/// assert_eq!(encode(0).unwrap(), "0");
/// assert_eq!(encode(35).unwrap(), "z");
/// assert_eq!(encode(36).unwrap(), "10");
/// ```
pub fn encode(n: i64) -> Result<String, CodecError> {
    if n < 0 {
        return Err(CodecError::InvalidArgument(format!(
            "cannot encode negative value {n}"
        )));
    }

    if n == 0 {
        return Ok("0".to_string());
    }

    let mut digits = Vec::with_capacity(13);
    let mut rest = n;

    while rest != 0 {
        digits.push(ALPHABET[(rest % BASE) as usize]);
        rest /= BASE;
    }

    digits.reverse();

    // Alphabet is ASCII
    Ok(digits.into_iter().map(char::from).collect())
}

/// Decodes a canonical base-36 identifier back to its integer value.
///
/// # Errors
///
/// Returns [`CodecError::InvalidArgument`] if the string is empty, contains a
/// character outside `0-9a-z`, has a leading zero, or overflows `i64`.
pub fn decode(s: &str) -> Result<i64, CodecError> {
    if s.is_empty() {
        return Err(CodecError::InvalidArgument(
            "cannot decode empty identifier".to_string(),
        ));
    }

    if s.len() > 1 && s.starts_with('0') {
        return Err(CodecError::InvalidArgument(format!(
            "identifier '{s}' has a leading zero"
        )));
    }

    s.bytes().try_fold(0i64, |acc, byte| {
        let digit = digit_value(byte).ok_or_else(|| {
            CodecError::InvalidArgument(format!(
                "identifier '{s}' contains invalid character '{}'",
                char::from(byte)
            ))
        })?;

        acc.checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| CodecError::InvalidArgument(format!("identifier '{s}' is too large")))
    })
}

fn digit_value(byte: u8) -> Option<i64> {
    match byte {
        b'0'..=b'9' => Some(i64::from(byte - b'0')),
        b'a'..=b'z' => Some(i64::from(byte - b'a') + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(0).unwrap(), "0");
    }

    #[test]
    fn test_encode_single_digits() {
        assert_eq!(encode(1).unwrap(), "1");
        assert_eq!(encode(9).unwrap(), "9");
        assert_eq!(encode(10).unwrap(), "a");
        assert_eq!(encode(35).unwrap(), "z");
    }

    #[test]
    fn test_encode_multiple_digits() {
        assert_eq!(encode(36).unwrap(), "10");
        assert_eq!(encode(1295).unwrap(), "zz");
        assert_eq!(encode(1296).unwrap(), "100");
    }

    #[test]
    fn test_encode_max_value() {
        assert_eq!(encode(i64::MAX).unwrap(), "1y2p0ij32e8e7");
    }

    #[test]
    fn test_encode_negative_is_invalid_argument() {
        let result = encode(-1);
        assert!(matches!(result, Err(CodecError::InvalidArgument(_))));
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode("0").unwrap(), 0);
        assert_eq!(decode("z").unwrap(), 35);
        assert_eq!(decode("10").unwrap(), 36);
        assert_eq!(decode("1y2p0ij32e8e7").unwrap(), i64::MAX);
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert!(decode("").is_err());
    }

    #[test]
    fn test_decode_rejects_leading_zero() {
        let err = decode("007").unwrap_err();
        assert!(err.to_string().contains("leading zero"));
    }

    #[test]
    fn test_decode_rejects_uppercase_and_symbols() {
        assert!(decode("A").is_err());
        assert!(decode("ab+").is_err());
        assert!(decode("a b").is_err());
    }

    #[test]
    fn test_decode_rejects_overflow() {
        let err = decode("1y2p0ij32e8e8").unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(n in 0i64..=i64::MAX) {
            let encoded = encode(n).unwrap();
            prop_assert_eq!(decode(&encoded).unwrap(), n);
        }

        #[test]
        fn prop_encode_is_canonical(n in 1i64..=i64::MAX) {
            let encoded = encode(n).unwrap();
            prop_assert!(!encoded.starts_with('0'));
            prop_assert!(encoded.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }
}
