pub mod caesar;
pub mod vigenere;

pub use caesar::*;
pub use vigenere::*;

use crate::error::{Result, ShiftboxError};
use std::fs;
use std::path::Path;

/// Take text from the command line or read it from a file
/// A single trailing newline from a file is stripped so the transform's
/// length ceiling applies to the text itself
fn resolve_text(text: Option<&str>, input: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    let Some(path) = input else {
        return Err(ShiftboxError::MissingText);
    };
    let contents = fs::read_to_string(path)?;
    let trimmed = contents
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(&contents);
    Ok(trimmed.to_string())
}
