//! Property-based tests for the shale lexer and parser
//!
//! These use proptest to check invariants across many randomly generated inputs: the front end never panics,
//! end of input is terminal, parsing is deterministic, and binary chains always lean right.

use proptest::prelude::*;
use shale_syntax::ast::{BinaryOp, Expr, Statement};
use shale_syntax::lexer::{self, Lexer, TokenKind};
use shale_syntax::parser;

/// Fragments that glue together into plausible (and implausible) programs.
fn fragment_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "a", "b1", "$", "_x", "1", "2.5", ".5", "'s'", "\"t\"", "true", "null", "this", "(", ")", "[", "]",
        "{", "}", ";", ",", ":", "?", ".", "=", "+=", ">>>=", "+", "-", "*", "/", "%", "++", "--", "!", "~",
        "&&", "||", "==", "<", ">>", "instanceof", "if", "else", "for", "while", "do", "switch", "case",
        "default", "break", "continue", "return", "throw", "try", "catch", "finally", "var", "const", " ",
        "\n", "// c\n", "/* c */",
    ])
}

fn soup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment_strategy(), 0..40).prop_map(|parts| parts.join(" "))
}

fn additive_chain_strategy() -> impl Strategy<Value = (Vec<u8>, Vec<bool>)> {
    (2usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<u8>(), n),
            prop::collection::vec(any::<bool>(), n - 1),
        )
    })
}

/// Walk the right spine of a chain: every left child must be a leaf.
fn right_spine_len(expr: &Expr) -> usize {
    match expr {
        Expr::Binary { op, left, right } => {
            assert!(matches!(op, BinaryOp::Add | BinaryOp::Sub));
            assert!(matches!(**left, Expr::Number { .. }), "left child is not a leaf: {left:?}");
            1 + right_spine_len(right)
        }
        Expr::Number { .. } => 0,
        other => panic!("unexpected node in chain: {other:?}"),
    }
}

proptest! {
    /// Property: the lexer returns a result for any input
    #[test]
    fn lexing_arbitrary_text_never_panics(source in "\\PC{0,64}") {
        let _ = lexer::lex(&source);
    }

    /// Property: the parser returns a result for any input
    #[test]
    fn parsing_arbitrary_text_never_panics(source in "\\PC{0,64}") {
        let _ = parser::parse(&source);
    }

    /// Property: the parser returns a result for token soup
    #[test]
    fn parsing_token_soup_never_panics(source in soup_strategy()) {
        let _ = parser::parse(&source);
    }

    /// Property: once reached, end of input repeats forever at the same offset
    #[test]
    fn end_of_input_is_terminal(source in soup_strategy()) {
        let mut lexer = Lexer::new(&source);
        loop {
            match lexer.next_token() {
                Ok(token) if token.kind == TokenKind::EndOfInput => {
                    for _ in 0..3 {
                        let again = lexer.next_token().expect("end of input must not fail");
                        prop_assert_eq!(again.kind, TokenKind::EndOfInput);
                        prop_assert_eq!(again.span, token.span);
                    }
                    break;
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    }

    /// Property: token spans are non-empty (except end of input), ordered and non-overlapping
    #[test]
    fn token_spans_are_ordered(source in soup_strategy()) {
        if let Ok(tokens) = lexer::lex(&source) {
            prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::EndOfInput).count(), 1);
            let mut last_end = 0;
            for token in &tokens {
                prop_assert!(token.span.start >= last_end);
                prop_assert!(token.span.end <= source.len());
                if token.kind != TokenKind::EndOfInput {
                    prop_assert!(token.span.end > token.span.start);
                }
                last_end = token.span.end;
            }
        }
    }

    /// Property: parsing the same source twice gives the same result
    #[test]
    fn parsing_is_deterministic(source in soup_strategy()) {
        prop_assert_eq!(parser::parse(&source), parser::parse(&source));
    }

    /// Property: identifiers survive lexing unchanged
    #[test]
    fn identifiers_survive_lexing(name in "[a-zA-Z_$][a-zA-Z0-9_$]{0,12}") {
        let tokens = lexer::lex(&name).expect("lex failed");
        prop_assert_eq!(tokens.len(), 2);
        match &tokens[0].kind {
            TokenKind::Identifier(ident) => prop_assert_eq!(ident, &name),
            TokenKind::Keyword(_) | TokenKind::Boolean(_) | TokenKind::Null => {}
            other => prop_assert!(false, "unexpected token {:?}", other),
        }
    }

    /// Property: integer literals lex to their value
    #[test]
    fn integers_lex_to_their_value(n in 0u32..1_000_000) {
        let tokens = lexer::lex(&n.to_string()).expect("lex failed");
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Number(f64::from(n)));
    }

    /// Property: additive chains build right-leaning trees with one node per operator
    #[test]
    fn additive_chains_lean_right((operands, subtract) in additive_chain_strategy()) {
        let mut source = operands[0].to_string();
        for (operand, sub) in operands[1..].iter().zip(&subtract) {
            source.push_str(if *sub { " - " } else { " + " });
            source.push_str(&operand.to_string());
        }
        source.push(';');

        let script = parser::parse(&source).expect("parse failed");
        let Some(Statement::Expr { expr }) = script.body.first() else {
            panic!("expected expression statement");
        };
        prop_assert_eq!(right_spine_len(expr), subtract.len());
    }
}
