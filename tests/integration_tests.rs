//! Integration tests for the shale driver

use std::fs;
use std::path::{Path, PathBuf};

use shale::cli::commands::{self, OutputOptions};
use shale::cli::ExitCode;
use shale::diagnostics::ErrorKind;
use shale::parser::{self, ParseOptions};

fn fixture_files(dir: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(dir);
    let mut paths: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "js"))
        .collect();
    paths.sort();
    paths
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("shale_test_{}_{}", std::process::id(), name))
}

/// Test that all valid fixtures parse successfully
#[test]
fn test_valid_fixtures() {
    let files = fixture_files("valid");
    assert!(!files.is_empty());
    for path in files {
        let source = fs::read_to_string(&path).unwrap();
        let result = parser::parse(&source);
        assert!(result.is_ok(), "{} failed: {:?}", path.display(), result.err());
    }
}

/// Test that each invalid fixture fails with the error its name describes
#[test]
fn test_invalid_fixtures() {
    let files = fixture_files("invalid");
    assert_eq!(files.len(), 4);
    for path in files {
        let source = fs::read_to_string(&path).unwrap();
        let err = parser::parse(&source).unwrap_err();
        let expected = match path.file_stem().and_then(|s| s.to_str()) {
            Some("illegal_lhs") => ErrorKind::IllegalLhs,
            Some("duplicate_default") => ErrorKind::DuplicateDefault,
            Some("unterminated_string") => ErrorKind::UnterminatedString,
            Some("empty_throw") => ErrorKind::EmptyCaseOrThrow,
            other => panic!("unexpected fixture {other:?}"),
        };
        assert_eq!(err.kind, expected, "{}", path.display());
    }
}

#[test]
fn test_error_positions_in_fixtures() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/invalid/illegal_lhs.js");
    let source = fs::read_to_string(path).unwrap();
    let err = parser::parse(&source).unwrap_err();
    assert_eq!(err.line_col(&source), (2, 1));
}

#[test]
fn test_parse_source_renders_diagnostic() {
    let err = commands::parse_source("bad.js", "x = ;", ParseOptions::default()).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("shale::unexpected_token"), "{}", err.message);
    assert!(err.message.contains("unexpected `;`"), "{}", err.message);
    assert!(err.message.contains("bad.js"), "{}", err.message);
}

#[test]
fn test_parse_source_honours_max_depth() {
    let source = "((((((a))))));";
    assert!(commands::parse_source("deep.js", source, ParseOptions::default()).is_ok());
    let err = commands::parse_source("deep.js", source, ParseOptions::new().with_max_depth(4)).unwrap_err();
    assert!(err.message.contains("shale::nesting_too_deep"), "{}", err.message);
}

#[test]
fn test_parse_file_rejects_huge_chain() {
    let input = temp_path("chain.js");
    fs::write(&input, format!("x = {};", vec!["1"; 200_000].join(" + "))).unwrap();

    let source = commands::read_source(&input).unwrap();
    let err = commands::parse_source("chain.js", &source, ParseOptions::default()).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("shale::nesting_too_deep"), "{}", err.message);

    fs::remove_file(&input).unwrap();
}

#[test]
fn test_render_json_pretty_and_compact() {
    let script = parser::parse("a;").unwrap();
    let compact = commands::render_json(&script, true).unwrap();
    assert_eq!(compact, r#"[{"kind":"ExprStatement","expr":{"kind":"Identifier","name":"a"}}]"#);

    let pretty = commands::render_json(&script, false).unwrap();
    assert!(pretty.starts_with("[\n  {"));
    let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    let compact_value: serde_json::Value = serde_json::from_str(&compact).unwrap();
    assert_eq!(reparsed, compact_value);
}

#[test]
fn test_parse_file_writes_output() {
    let input = temp_path("input.js");
    let output = temp_path("output.json");
    fs::write(&input, "var x = [1, 2];\n").unwrap();

    let options = OutputOptions {
        path: Some(output.clone()),
        compact: true,
    };
    let code = commands::parse_file(&input, ParseOptions::default(), &options).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let written = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value[0]["kind"], "VarDecl");
    assert_eq!(value[0]["init"]["elements"][1]["value"], 2.0);

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}

#[test]
fn test_lex_file_reports_lexical_errors() {
    let input = temp_path("lex_error.js");
    fs::write(&input, "a = 'open\n").unwrap();
    let err = commands::lex_file(&input).unwrap_err();
    assert!(err.message.contains("shale::unterminated_string"), "{}", err.message);
    let _ = fs::remove_file(&input);
}

#[test]
fn test_missing_file_is_a_cli_error() {
    let err = commands::read_source(Path::new("definitely/not/here.js")).unwrap_err();
    assert!(err.message.starts_with("Cannot access file"), "{}", err.message);
}
