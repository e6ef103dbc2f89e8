use crate::error::{Result, ShiftboxError};

/// Maximum text length the transform accepts, in bytes.
/// The expanded key is sized to the text, so the ceiling bounds both.
pub const MAX_TEXT_LEN: usize = 200;

/// Expand a short key into a repeating uppercase key of exactly `length`
/// characters
/// The source cursor restarts whenever the absolute output position is a
/// multiple of the source key length, so a key longer than `length` is
/// simply truncated
pub fn expand_key(key: &str, length: usize) -> Result<String> {
    if key.is_empty() {
        return Err(ShiftboxError::EmptyKey);
    }
    if length == 0 {
        return Err(ShiftboxError::ZeroExpansionLength);
    }

    let src = key.as_bytes();
    let mut expanded = String::with_capacity(length);
    let mut cursor = 0;

    for pos in 0..length {
        if pos % src.len() == 0 {
            cursor = 0;
        }
        let ch = src[cursor];
        if !ch.is_ascii_alphabetic() {
            return Err(ShiftboxError::NonAlphabeticKeyChar {
                ch: ch as char,
                position: cursor,
            });
        }
        expanded.push(ch.to_ascii_uppercase() as char);
        cursor += 1;
    }

    Ok(expanded)
}

/// Encode or decode text with a repeating Vigenere key
/// Letters shift by the key character at their position; non-alphabetic
/// characters pass through unchanged but still consume a key position,
/// so a digit in the middle does not re-align the key stream
pub fn transform(key: &str, text: &str, decode: bool) -> Result<String> {
    if text.len() > MAX_TEXT_LEN {
        return Err(ShiftboxError::TextTooLong {
            len: text.len(),
            max: MAX_TEXT_LEN,
        });
    }

    let expanded = expand_key(key, text.len())?;
    let shifts = expanded.as_bytes();

    let mut out = String::with_capacity(text.len());
    for (pos, c) in text.char_indices() {
        out.push(transform_char(c, shifts[pos] - b'A', decode));
    }

    Ok(out)
}

fn transform_char(c: char, shift: u8, decode: bool) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };

    let offset = c as u8 - base;
    // Adding 26 before subtracting keeps the decode arithmetic unsigned
    let shifted = if decode {
        (offset + 26 - shift) % 26
    } else {
        (offset + shift) % 26
    };
    (base + shifted) as char
}
