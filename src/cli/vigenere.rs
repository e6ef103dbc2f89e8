use crate::cli::resolve_text;
use crate::error::Result;
use crate::vigenere;
use std::path::PathBuf;

/// Options for the vigenere command
#[derive(Debug, Clone, Default)]
pub struct VigenereOptions {
    pub key: String,
    pub decode: bool,
    pub text: Option<String>,
    pub input: Option<PathBuf>,
}

/// Run the Vigenere transform over text from the arguments or an input file
pub fn run_vigenere(options: &VigenereOptions) -> Result<String> {
    let text = resolve_text(options.text.as_deref(), options.input.as_deref())?;
    vigenere::transform(&options.key, &text, options.decode)
}
