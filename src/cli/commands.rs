//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use miette::{NamedSource, Report};
use shale_syntax::ast::Script;
use shale_syntax::diagnostics::SyntaxError;
use shale_syntax::lexer;
use shale_syntax::parser::{self, ParseOptions};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while lexing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Where and how the JSON tree is written.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Also write the tree to this file
    pub path: Option<PathBuf>,
    /// Single-line JSON instead of pretty-printed
    pub compact: bool,
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let display = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", display, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            display,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", display, e)))
}

/// Render a syntax error against its source with `miette`.
pub fn render_diagnostic(file_name: &str, source: &str, err: SyntaxError) -> String {
    let report = Report::new(err).with_source_code(NamedSource::new(file_name, source.to_string()));
    format!("{report:?}")
}

/// Parse `source`, turning a syntax error into a rendered CLI error.
pub fn parse_source(file_name: &str, source: &str, options: ParseOptions) -> CliResult<Script> {
    parser::parse_with_options(source, options).map_err(|err| {
        tracing::debug!(kind = ?err.kind, start = err.span.start, "parse failed");
        CliError::failure(render_diagnostic(file_name, source, err))
    })
}

/// Serialize the tree as JSON.
pub fn render_json(script: &Script, compact: bool) -> CliResult<String> {
    let rendered = if compact {
        serde_json::to_string(script)
    } else {
        serde_json::to_string_pretty(script)
    };
    rendered.map_err(|e| CliError::failure(format!("Error serializing syntax tree: {}", e)))
}

/// Lex and display tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let file_name = file_path.display().to_string();
    let tokens = lexer::lex(&source).map_err(|err| CliError::failure(render_diagnostic(&file_name, &source, err)))?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the tree as JSON, optionally writing it to a file as well.
pub fn parse_file(file_path: &Path, options: ParseOptions, output: &OutputOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let file_name = file_path.display().to_string();
    let script = parse_source(&file_name, &source, options)?;
    tracing::debug!(statements = script.body.len(), "parsed");

    let json = render_json(&script, output.compact)?;
    println!("{}", json);

    if let Some(path) = &output.path {
        fs::write(path, format!("{json}\n"))
            .map_err(|e| CliError::failure(format!("Error writing '{}': {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "wrote syntax tree");
    }
    Ok(ExitCode::SUCCESS)
}
