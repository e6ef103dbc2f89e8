use clap::{Parser, Subcommand};
use shiftbox::cli::{run_caesar, run_vigenere, CaesarOptions, VigenereOptions};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("SHIFTBOX_VERSION");
const BUILD: &str = env!("SHIFTBOX_BUILD");
const PROFILE: &str = env!("SHIFTBOX_PROFILE");
const GIT_HASH: &str = env!("SHIFTBOX_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "shiftbox")]
#[command(author, about = "Classical shift ciphers: Caesar and Vigenere", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform text with a fixed Caesar shift
    #[command(alias = "c")]
    Caesar {
        /// Shift amount (0-26)
        #[arg(long, required = true)]
        key: u32,

        /// Reverse the shift instead of applying it
        #[arg(long)]
        decode: bool,

        /// Text to transform
        #[arg(required_unless_present = "input", conflicts_with = "input")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Transform text with a repeating Vigenere keyword
    #[command(alias = "v")]
    Vigenere {
        /// Alphabetic keyword
        #[arg(long, required = true)]
        key: String,

        /// Reverse the transform instead of applying it
        #[arg(long)]
        decode: bool,

        /// Text to transform
        #[arg(required_unless_present = "input", conflicts_with = "input")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("shiftbox {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Caesar {
            key,
            decode,
            text,
            input,
        } => {
            let options = CaesarOptions {
                key,
                decode,
                text,
                input,
            };
            run_caesar(&options)
        }

        Commands::Vigenere {
            key,
            decode,
            text,
            input,
        } => {
            let options = VigenereOptions {
                key,
                decode,
                text,
                input,
            };
            run_vigenere(&options)
        }
    };

    match result {
        Ok(transformed) => {
            println!("{}", transformed);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
