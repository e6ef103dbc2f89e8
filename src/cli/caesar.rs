use crate::caesar;
use crate::cli::resolve_text;
use crate::error::{Result, ShiftboxError};
use std::path::PathBuf;

/// Options for the caesar command
#[derive(Debug, Clone, Default)]
pub struct CaesarOptions {
    pub key: u32,
    pub decode: bool,
    pub text: Option<String>,
    pub input: Option<PathBuf>,
}

/// Run the Caesar transform over text from the arguments or an input file
/// Decoding reuses the single encode entry point with the complementary key
pub fn run_caesar(options: &CaesarOptions) -> Result<String> {
    // Check the bound up front: the complementary key is always in range
    // and would otherwise mask an invalid input
    if options.key > caesar::MAX_KEY {
        return Err(ShiftboxError::KeyOutOfRange(options.key));
    }

    let text = resolve_text(options.text.as_deref(), options.input.as_deref())?;
    let key = if options.decode {
        caesar::decode_key(options.key)
    } else {
        options.key
    };

    caesar::encode(key, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_caesar_encode() {
        let options = CaesarOptions {
            key: 5,
            text: Some("Caesar Test String".into()),
            ..Default::default()
        };
        assert_eq!(run_caesar(&options).unwrap(), "Hfjxfw Yjxy Xywnsl");
    }

    #[test]
    fn test_run_caesar_decode() {
        let options = CaesarOptions {
            key: 5,
            decode: true,
            text: Some("Hfjxfw Yjxy Xywnsl".into()),
            ..Default::default()
        };
        assert_eq!(run_caesar(&options).unwrap(), "Caesar Test String");
    }

    #[test]
    fn test_run_caesar_decode_invalid_key() {
        let options = CaesarOptions {
            key: 28,
            decode: true,
            text: Some("whatever".into()),
            ..Default::default()
        };
        assert!(matches!(
            run_caesar(&options),
            Err(ShiftboxError::KeyOutOfRange(28))
        ));
    }

    #[test]
    fn test_run_caesar_missing_text() {
        let options = CaesarOptions {
            key: 3,
            ..Default::default()
        };
        assert!(matches!(
            run_caesar(&options),
            Err(ShiftboxError::MissingText)
        ));
    }

    #[test]
    fn test_run_caesar_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        fs::write(&path, "attack at dawn\n").unwrap();

        let options = CaesarOptions {
            key: 3,
            input: Some(path),
            ..Default::default()
        };
        assert_eq!(run_caesar(&options).unwrap(), "dwwdfn dw gdzq");
    }
}
