//! CLI module for the shale driver
//!
//! ## Usage
//!
//! - `shale <FILE>` - parse and print the AST as pretty JSON
//! - `shale <FILE> --tokens` - print the token stream instead
//! - `shale <FILE> -o tree.json` - also write the JSON to a file
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use shale_syntax::parser::ParseOptions;
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Parse a JavaScript-subset source file into a JSON syntax tree
#[derive(Parser, Debug)]
#[command(name = "shale")]
#[command(version = VERSION)]
#[command(about = "Parse a JavaScript-subset source file into a JSON syntax tree", long_about = None)]
pub struct Cli {
    /// Source file to parse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the token stream instead of the tree (debug)
    #[arg(long)]
    pub tokens: bool,

    /// Also write the JSON tree to this path
    #[arg(short, long, value_name = "PATH", conflicts_with = "tokens")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long, conflicts_with = "tokens")]
    pub compact: bool,

    /// Maximum statement/expression nesting depth
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_depth: Option<u32>,

    /// Maximum height of the syntax tree, counting each link of an operator or suffix chain
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_height: Option<u32>,
}

impl Cli {
    /// Parser options implied by the flags.
    pub fn parse_options(&self) -> ParseOptions {
        let mut options = ParseOptions::default();
        if let Some(depth) = self.max_depth {
            options = options.with_max_depth(depth as usize);
        }
        if let Some(height) = self.max_height {
            options = options.with_max_height(height as usize);
        }
        options
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    tracing::debug!(file = %cli.file.display(), tokens = cli.tokens, "starting");

    if cli.tokens {
        return commands::lex_file(&cli.file);
    }

    let output = commands::OutputOptions {
        path: cli.output.clone(),
        compact: cli.compact,
    };
    commands::parse_file(&cli.file, cli.parse_options(), &output)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file_only() {
        let cli = Cli::try_parse_from(["shale", "input.js"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("input.js"));
        assert!(!cli.tokens && !cli.compact);
        assert!(cli.output.is_none());
        assert_eq!(cli.parse_options(), ParseOptions::default());
    }

    #[test]
    fn test_cli_parse_output_flags() {
        let cli = Cli::try_parse_from(["shale", "input.js", "-o", "tree.json", "--compact"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("tree.json")));
        assert!(cli.compact);
    }

    #[test]
    fn test_cli_parse_max_depth() {
        let cli = Cli::try_parse_from(["shale", "input.js", "--max-depth", "16"]).unwrap();
        assert_eq!(cli.parse_options().max_depth, 16);

        assert!(Cli::try_parse_from(["shale", "input.js", "--max-depth", "0"]).is_err());
        assert!(Cli::try_parse_from(["shale", "input.js", "--max-depth", "deep"]).is_err());
    }

    #[test]
    fn test_cli_parse_max_height() {
        let cli = Cli::try_parse_from(["shale", "input.js", "--max-height", "100"]).unwrap();
        let options = cli.parse_options();
        assert_eq!(options.max_height, 100);
        assert_eq!(options.max_depth, ParseOptions::default().max_depth);

        assert!(Cli::try_parse_from(["shale", "input.js", "--max-height", "0"]).is_err());
    }

    #[test]
    fn test_cli_tokens_conflicts_with_json_flags() {
        assert!(Cli::try_parse_from(["shale", "input.js", "--tokens"]).unwrap().tokens);
        assert!(Cli::try_parse_from(["shale", "input.js", "--tokens", "--compact"]).is_err());
        assert!(Cli::try_parse_from(["shale", "input.js", "--tokens", "-o", "x.json"]).is_err());
    }

    #[test]
    fn test_cli_requires_a_file() {
        assert!(Cli::try_parse_from(["shale"]).is_err());
    }
}
