//! Parse the hand-written fixture programs end to end.

use shale_syntax::ast::{Expr, ForInit, Statement};
use shale_syntax::parser;
use std::fs;

fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}.js", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path))
}

#[test]
fn test_control_flow_fixture() {
    let script = parser::parse(&load_fixture("control_flow")).expect("parse failed");
    let kinds: Vec<&str> = script
        .body
        .iter()
        .map(|stmt| match stmt {
            Statement::VarDeclList { .. } => "VarDeclList",
            Statement::VarDecl(_) => "VarDecl",
            Statement::Label { .. } => "Label",
            Statement::While(_) => "While",
            Statement::DoWhile(_) => "DoWhile",
            Statement::Switch(_) => "Switch",
            Statement::TryCatch(_) => "TryCatch",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        ["VarDeclList", "VarDecl", "Label", "While", "DoWhile", "Switch", "TryCatch"]
    );

    let Statement::Switch(switch) = &script.body[5] else {
        panic!("expected switch");
    };
    assert_eq!(switch.cases.len(), 3);
    assert!(switch.cases[1].body.is_empty());
    assert_eq!(switch.cases[2].body, vec![Statement::Empty]);
}

#[test]
fn test_expressions_fixture() {
    let script = parser::parse(&load_fixture("expressions")).expect("parse failed");
    assert_eq!(script.body.len(), 11);

    let Some(Statement::For(for_stmt)) = script.body.last() else {
        panic!("expected trailing for statement");
    };
    assert!(matches!(for_stmt.init, Some(ForInit::Declaration(_))));
    assert!(matches!(for_stmt.update, Some(Expr::ExprList { .. })));
}

#[test]
fn test_fixtures_parse_the_same_twice() {
    for name in ["control_flow", "expressions"] {
        let source = load_fixture(name);
        assert_eq!(parser::parse(&source), parser::parse(&source), "{name}");
    }
}
