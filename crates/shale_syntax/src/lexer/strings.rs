//! String literal scanning for the shale lexer.
//!
//! Literals are delimited by `'` or `"` and may not span a bare line terminator. Escapes:
//! - `\n \r \t \b \f \v` decode to their control characters.
//! - `\` followed by a line terminator is a line continuation: both are elided (`\r\n` counts as one).
//! - Any other escaped character is dropped together with its backslash, so `'a\qb'` is `"ab"`.

use super::Lexer;
use super::tokens::TokenKind;
use crate::ast::Span;
use crate::diagnostics::SyntaxError;
use shale_core::chars;

impl<'a> Lexer<'a> {
    /// Scan a string literal whose opening quote is at `start`.
    pub(super) fn scan_string(&mut self, start: usize) -> Result<TokenKind, SyntaxError> {
        let quote = self.advance().unwrap_or('"');
        let mut value = String::new();

        loop {
            let Some(c) = self.advance() else {
                return Err(SyntaxError::unterminated_string(Span::new(start, self.pos)));
            };

            if c == quote {
                return Ok(TokenKind::String(value));
            }

            if c == '\\' {
                match self.advance() {
                    Some(escaped) if chars::is_line_terminator(escaped) => {
                        self.finish_line_terminator(escaped);
                    }
                    Some(escaped) => {
                        if let Some(decoded) = decode_escape(escaped) {
                            value.push(decoded);
                        }
                    }
                    None => {
                        return Err(SyntaxError::unterminated_string(Span::new(start, self.pos)));
                    }
                }
            } else if chars::is_line_terminator(c) {
                // Point at the literal itself, not the newline
                let end = self.pos - c.len_utf8();
                return Err(SyntaxError::unterminated_string(Span::new(start, end)));
            } else {
                value.push(c);
            }
        }
    }
}

fn decode_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'v' => Some('\u{000B}'),
        _ => None,
    }
}
