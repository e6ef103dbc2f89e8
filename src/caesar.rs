use crate::error::{Result, ShiftboxError};

/// Maximum Caesar shift. 26 is accepted and acts as a full rotation (no-op).
pub const MAX_KEY: u32 = 26;

/// Encode text with a fixed Caesar shift
/// Letters are shifted within their own case's alphabet, wrapping around;
/// everything else passes through unchanged
pub fn encode(key: u32, text: &str) -> Result<String> {
    if key > MAX_KEY {
        return Err(ShiftboxError::KeyOutOfRange(key));
    }

    let shift = (key % 26) as u8;
    Ok(text.chars().map(|c| shift_char(c, shift)).collect())
}

/// Complementary key that reverses `encode` with `key`
/// There is no separate decode entry point: decoding is encoding with
/// the complementary shift
pub fn decode_key(key: u32) -> u32 {
    (26 - key % 26) % 26
}

fn shift_char(c: char, shift: u8) -> char {
    if c.is_ascii_uppercase() {
        (((c as u8 - b'A' + shift) % 26) + b'A') as char
    } else if c.is_ascii_lowercase() {
        (((c as u8 - b'a' + shift) % 26) + b'a') as char
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_known_vector() {
        // "Hfjxfw Yjxy Xywnsl" is the known encrypted value for
        // "Caesar Test String" with a key of 5
        let encoded = encode(5, "Caesar Test String").unwrap();
        assert_eq!(encoded, "Hfjxfw Yjxy Xywnsl");
    }

    #[test]
    fn test_encode_invalid_key() {
        let result = encode(28, "Ceasar encryption test");
        assert!(matches!(result, Err(ShiftboxError::KeyOutOfRange(28))));
    }

    #[test]
    fn test_encode_key_26_is_noop() {
        let text = "The quick brown Fox, 42!";
        assert_eq!(encode(26, text).unwrap(), text);
    }

    #[test]
    fn test_encode_key_zero_is_noop() {
        let text = "unchanged";
        assert_eq!(encode(0, text).unwrap(), text);
    }

    #[test]
    fn test_encode_preserves_non_alphabetic() {
        let encoded = encode(13, "a1b2 c3!").unwrap();
        assert_eq!(encoded, "n1o2 p3!");
    }

    #[test]
    fn test_decode_key_complements() {
        assert_eq!(decode_key(5), 21);
        assert_eq!(decode_key(0), 0);
        assert_eq!(decode_key(26), 0);
    }

    #[test]
    fn test_encode_empty_text() {
        assert_eq!(encode(7, "").unwrap(), "");
    }

    proptest! {
        #[test]
        fn prop_roundtrip(key in 0u32..=26, text in "[ -~]{0,64}") {
            let encoded = encode(key, &text).unwrap();
            let decoded = encode(decode_key(key), &encoded).unwrap();
            prop_assert_eq!(decoded, text);
        }

        #[test]
        fn prop_length_and_case_preserved(key in 0u32..=26, text in "[ -~]{0,64}") {
            let encoded = encode(key, &text).unwrap();
            prop_assert_eq!(encoded.len(), text.len());
            for (a, b) in text.chars().zip(encoded.chars()) {
                prop_assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
                prop_assert_eq!(a.is_ascii_lowercase(), b.is_ascii_lowercase());
                if !a.is_ascii_alphabetic() {
                    prop_assert_eq!(a, b);
                }
            }
        }
    }
}
