//! Lexer for the shale surface syntax.
//!
//! A pull-based tokenizer: the parser asks for one token at a time through [`Lexer::next_token`]. Trivia
//! (whitespace, line terminators, `//` and `/* */` comments) is skipped before every token and never reaches the
//! parser.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal scanning and escape decoding
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, classify_word, keyword_id};

use crate::ast::Span;
use crate::diagnostics::SyntaxError;
use shale_core::chars;
use shale_core::lang::punctuation::{self, MAX_PUNCTUATOR_LEN};

/// Lexer for shale source text.
///
/// The cursor is a byte offset that only moves forward. Once the end of input is reached, every further call to
/// [`next_token`](Self::next_token) yields another `EndOfInput` token at the same position.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Skip trivia and scan the next token.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_trivia();
        let start = self.pos;

        let Some(c) = self.peek() else {
            return Ok(Token::new(TokenKind::EndOfInput, Span::new(start, start)));
        };

        let kind = if chars::is_identifier_start(c) {
            self.scan_word()
        } else if c == '\'' || c == '"' {
            self.scan_string(start)?
        } else if chars::is_numeric_digit(c)
            || (c == '.' && self.peek_next().is_some_and(chars::is_numeric_digit))
        {
            self.scan_number()
        } else {
            self.scan_punctuation(start)?
        };

        let token = Token::new(kind, Span::new(start, self.pos));
        tracing::trace!(?token, "token");
        Ok(token)
    }

    /// Tokenize the whole source. The returned vector always ends with exactly one `EndOfInput` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind.is_end();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.rest().chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `\r\n` as a single terminator after `\r` has been consumed.
    fn finish_line_terminator(&mut self, terminator: char) {
        if terminator == '\r' && self.peek() == Some('\n') {
            self.advance();
        }
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if chars::is_whitespace(c) || chars::is_line_terminator(c) {
                self.advance();
            } else if self.rest().starts_with("//") {
                self.skip_line_comment();
            } else if self.rest().starts_with("/*") {
                self.skip_block_comment();
            } else {
                break;
            }
        }
    }

    fn skip_line_comment(&mut self) {
        self.pos += 2;
        while let Some(c) = self.advance() {
            if chars::is_line_terminator(c) {
                self.finish_line_terminator(c);
                break;
            }
        }
    }

    /// Block comments do not nest; an unterminated one runs to end of input.
    fn skip_block_comment(&mut self) {
        let body = self.pos + 2;
        self.pos = match self.source[body..].find("*/") {
            Some(offset) => body + offset + 2,
            None => self.source.len(),
        };
    }

    // ========================================================================
    // Words and punctuation
    // ========================================================================

    fn scan_word(&mut self) -> TokenKind {
        let start = self.pos;
        while self.peek().is_some_and(chars::is_identifier_part) {
            self.advance();
        }
        classify_word(&self.source[start..self.pos])
    }

    /// Longest match against the punctuator registry.
    fn scan_punctuation(&mut self, start: usize) -> Result<TokenKind, SyntaxError> {
        let rest = self.rest();
        for len in (1..=MAX_PUNCTUATOR_LEN).rev() {
            if let Some(id) = rest.get(..len).and_then(punctuation::from_str) {
                self.pos += len;
                return Ok(TokenKind::Punctuation(id));
            }
        }

        let c = self.advance().unwrap_or_default();
        Err(SyntaxError::unknown_character(c, Span::new(start, self.pos)))
    }
}

/// Tokenize `source` into a vector ending with `EndOfInput`.
///
/// Stops at the first lexical error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).tokenize()
}
