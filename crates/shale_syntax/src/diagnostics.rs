//! Diagnostics for the shale front end.
//!
//! Every failure is a single [`SyntaxError`]: the first malformed construct aborts lexing or parsing and no partial
//! tree is returned. Errors carry a closed [`ErrorKind`], a human-readable message and the byte [`Span`] of the
//! offending input, and they render through `miette` with one label at that span.

use crate::ast::Span;
use miette::{Diagnostic, LabeledSpan};
use std::fmt;
use thiserror::Error;

/// Which front-end stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorTier {
    Lexical,
    Syntactic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A string literal hit a bare line terminator or end of input.
    UnterminatedString,
    /// No punctuator starts at this character.
    UnknownCharacter,
    /// A specific keyword, punctuator or identifier was required.
    TokenExpected,
    /// The current token cannot start or continue the construct being parsed.
    UnexpectedToken,
    /// Assignment target is not an identifier, member access or index access.
    IllegalLhs,
    DuplicateDefault,
    /// `case :` or `throw ;`
    EmptyCaseOrThrow,
    NestingTooDeep,
}

impl ErrorKind {
    pub fn tier(self) -> ErrorTier {
        match self {
            ErrorKind::UnterminatedString | ErrorKind::UnknownCharacter => ErrorTier::Lexical,
            _ => ErrorTier::Syntactic,
        }
    }

    /// Stable diagnostic code, e.g. `shale::illegal_lhs`.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::UnterminatedString => "shale::unterminated_string",
            ErrorKind::UnknownCharacter => "shale::unknown_character",
            ErrorKind::TokenExpected => "shale::token_expected",
            ErrorKind::UnexpectedToken => "shale::unexpected_token",
            ErrorKind::IllegalLhs => "shale::illegal_lhs",
            ErrorKind::DuplicateDefault => "shale::duplicate_default",
            ErrorKind::EmptyCaseOrThrow => "shale::empty_case_or_throw",
            ErrorKind::NestingTooDeep => "shale::nesting_too_deep",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::UnterminatedString => "unterminated string",
            ErrorKind::UnknownCharacter => "unknown character",
            ErrorKind::TokenExpected => "token expected",
            ErrorKind::UnexpectedToken => "unexpected token",
            ErrorKind::IllegalLhs => "illegal assignment target",
            ErrorKind::DuplicateDefault => "duplicate default",
            ErrorKind::EmptyCaseOrThrow => "missing expression",
            ErrorKind::NestingTooDeep => "nesting too deep",
        };
        f.write_str(label)
    }
}

/// A lexical or syntactic error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }

    pub fn unterminated_string(span: Span) -> Self {
        Self::new(ErrorKind::UnterminatedString, "unterminated string literal", span)
    }

    pub fn unknown_character(c: char, span: Span) -> Self {
        Self::new(ErrorKind::UnknownCharacter, format!("unknown character {c:?}"), span)
    }

    /// `expected` is a bare spelling (`;`, `while`, `identifier`); `found` describes the current token.
    pub fn token_expected(expected: &str, found: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::TokenExpected,
            format!("'{expected}' expected, found {found}"),
            span,
        )
    }

    pub fn unexpected_token(found: &str, span: Span) -> Self {
        Self::new(ErrorKind::UnexpectedToken, format!("unexpected {found}"), span)
    }

    pub fn illegal_lhs(span: Span) -> Self {
        Self::new(
            ErrorKind::IllegalLhs,
            "illegal left-hand side in assignment",
            span,
        )
    }

    pub fn duplicate_default(span: Span) -> Self {
        Self::new(
            ErrorKind::DuplicateDefault,
            "multiple defaults in switch statement",
            span,
        )
    }

    pub fn empty_case(span: Span) -> Self {
        Self::new(ErrorKind::EmptyCaseOrThrow, "case cannot be empty", span)
    }

    pub fn empty_throw(span: Span) -> Self {
        Self::new(ErrorKind::EmptyCaseOrThrow, "throw cannot be empty", span)
    }

    pub fn nesting_too_deep(limit: usize, span: Span) -> Self {
        Self::new(
            ErrorKind::NestingTooDeep,
            format!("nesting exceeds the limit of {limit}"),
            span,
        )
    }

    /// The tree would be taller than `limit`; long operator and suffix chains count one level per link.
    pub fn tree_too_tall(limit: usize, span: Span) -> Self {
        Self::new(
            ErrorKind::NestingTooDeep,
            format!("expression tree exceeds the height limit of {limit}"),
            span,
        )
    }

    pub fn tier(&self) -> ErrorTier {
        self.kind.tier()
    }

    /// 1-based `(line, column)` of the error start within `source`.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        line_col(source, self.span.start)
    }
}

impl Diagnostic for SyntaxError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new(Some(self.kind.to_string()), self.span.start, self.span.len());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Convert a byte offset into a 1-based `(line, column)` pair.
///
/// Lines break at `\n`, `\r\n`, a lone `\r`, U+2028 and U+2029. Columns count characters, not bytes. Offsets past
/// the end clamp to the end of the source.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut col = 1;
    let mut chars = source.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if i >= offset {
            break;
        }
        match c {
            '\r' => {
                if chars.peek().is_some_and(|&(j, next)| next == '\n' && j < offset) {
                    chars.next();
                }
                line += 1;
                col = 1;
            }
            '\n' | '\u{2028}' | '\u{2029}' => {
                line += 1;
                col = 1;
            }
            _ => col += 1,
        }
    }

    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_split_lexer_from_parser_errors() {
        assert_eq!(ErrorKind::UnterminatedString.tier(), ErrorTier::Lexical);
        assert_eq!(ErrorKind::UnknownCharacter.tier(), ErrorTier::Lexical);
        assert_eq!(ErrorKind::IllegalLhs.tier(), ErrorTier::Syntactic);
        assert_eq!(ErrorKind::NestingTooDeep.tier(), ErrorTier::Syntactic);
    }

    #[test]
    fn token_expected_message() {
        let err = SyntaxError::token_expected(";", "end of input", Span::new(3, 3));
        assert_eq!(err.to_string(), "';' expected, found end of input");
        assert_eq!(err.kind, ErrorKind::TokenExpected);
    }

    #[test]
    fn grammar_error_messages() {
        let span = Span::new(0, 1);
        assert_eq!(
            SyntaxError::illegal_lhs(span).message,
            "illegal left-hand side in assignment"
        );
        assert_eq!(
            SyntaxError::duplicate_default(span).message,
            "multiple defaults in switch statement"
        );
        let err = SyntaxError::tree_too_tall(512, span);
        assert_eq!(err.kind, ErrorKind::NestingTooDeep);
        assert_eq!(err.message, "expression tree exceeds the height limit of 512");
    }

    #[test]
    fn diagnostic_code_and_label() {
        let err = SyntaxError::illegal_lhs(Span::new(0, 1));
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("shale::illegal_lhs"));

        let labels: Vec<_> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 0);
        assert_eq!(labels[0].len(), 1);
    }

    #[test]
    fn line_col_counts_lines_and_chars() {
        let src = "a\nbc\r\nd\u{2028}é x";
        assert_eq!(line_col(src, 0), (1, 1));
        assert_eq!(line_col(src, 3), (2, 2));
        assert_eq!(line_col(src, 6), (3, 1));
        // "é" is two bytes but one column
        let x = src.find('x').unwrap_or_default();
        assert_eq!(line_col(src, x), (4, 3));
        assert_eq!(line_col(src, 10_000), line_col(src, src.len()));
    }
}
