use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid key: {0}. Maximum Caesar shift is 26")]
    KeyOutOfRange(u32),

    #[error("Key is empty")]
    EmptyKey,

    #[error("Key character '{ch}' at position {position} is not alphabetic")]
    NonAlphabeticKeyChar { ch: char, position: usize },

    #[error("Expansion length must be greater than zero")]
    ZeroExpansionLength,

    #[error("Text of {len} bytes exceeds the maximum supported length of {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("No input text provided")]
    MissingText,
}

pub type Result<T> = std::result::Result<T, ShiftboxError>;
