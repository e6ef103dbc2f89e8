//! Shiftbox - Classical Substitution Cipher Transforms
//!
//! Pure, stateless text transforms for two classical ciphers:
//!
//! - **Caesar**: every letter shifted by a fixed key (0-26), wrapping
//!   within its own case's alphabet
//! - **Vigenere**: a repeating keyword supplies a per-position shift;
//!   the key is first expanded to the full text length
//!
//! Both transforms preserve case and pass non-alphabetic characters
//! through unchanged. A non-alphabetic character still consumes its
//! position in the Vigenere key stream, so digits and punctuation do not
//! re-align the key for the letters that follow.
//!
//! These ciphers are pedagogical and trivially breakable; nothing here is
//! suitable for protecting real data.
//!
//! ## Example
//!
//! ```
//! use shiftbox::{caesar, vigenere};
//!
//! let shifted = caesar::encode(5, "Caesar Test String").unwrap();
//! assert_eq!(shifted, "Hfjxfw Yjxy Xywnsl");
//!
//! let encoded = vigenere::transform("sas", "vigenere ", false).unwrap();
//! let decoded = vigenere::transform("sas", &encoded, true).unwrap();
//! assert_eq!(decoded, "vigenere ");
//! ```

pub mod caesar;
pub mod cli;
pub mod error;
pub mod vigenere;

pub use error::{Result, ShiftboxError};
