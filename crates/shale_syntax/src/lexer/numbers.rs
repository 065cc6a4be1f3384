//! Number scanning for the shale lexer
//!
//! Numeric literals are runs of digits and dots. The value is the longest valid decimal prefix of the run, so
//! `1.2.3` lexes as the single number `1.2`. There are no exponents, radix prefixes or digit separators: `1e5` is
//! the number `1` followed by the identifier `e5`.

use super::Lexer;
use super::tokens::TokenKind;
use shale_core::chars;

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self) -> TokenKind {
        let start = self.pos;
        while self.peek().is_some_and(chars::is_numeric_part) {
            self.advance();
        }
        TokenKind::Number(parse_leading_decimal(&self.source[start..self.pos]))
    }
}

/// Parse the longest `digits[.digits]` prefix of a digits-and-dots run. Empty or dot-only input is `0`.
pub(super) fn parse_leading_decimal(run: &str) -> f64 {
    let end = run.match_indices('.').nth(1).map_or(run.len(), |(i, _)| i);
    run[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::parse_leading_decimal;
    use crate::lexer::{TokenKind, lex};

    fn numbers(source: &str) -> Vec<f64> {
        lex(source)
            .unwrap()
            .into_iter()
            .filter_map(|t| match t.kind {
                TokenKind::Number(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn decimal_literals() {
        assert_eq!(numbers("0 7 42 3.14 .5 10."), vec![0.0, 7.0, 42.0, 3.14, 0.5, 10.0]);
    }

    #[test]
    fn second_dot_is_swallowed() {
        assert_eq!(numbers("1.2.3"), vec![1.2]);
        assert_eq!(lex("1.2.3").unwrap().len(), 2);
    }

    #[test]
    fn no_exponent_syntax() {
        let kinds: Vec<_> = lex("1e5").unwrap().into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number(1.0),
                TokenKind::Identifier("e5".to_string()),
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn leading_prefix_parsing() {
        assert_eq!(parse_leading_decimal(""), 0.0);
        assert_eq!(parse_leading_decimal("."), 0.0);
        assert_eq!(parse_leading_decimal("12..4"), 12.0);
        assert_eq!(parse_leading_decimal(".25.5"), 0.25);
    }
}
