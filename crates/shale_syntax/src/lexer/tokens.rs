//! Token types for the shale lexer.
//!
//! Vocabulary tokens carry registry IDs from `shale_core::lang` (`Keyword(KeywordId)`, `Punctuation(PunctuatorId)`),
//! so the parser never compares spellings. Literal tokens carry their finished value: strings are already
//! escape-decoded and numbers already parsed.

use crate::ast::Span;
use shale_core::lang::keywords::{self, KeywordId};
use shale_core::lang::punctuation::PunctuatorId;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Vocabulary (ID-based) ==========
    Keyword(KeywordId),
    Punctuation(PunctuatorId),

    // ========== Identifiers and Literals ==========
    Identifier(String),
    Number(f64),
    String(String),
    Boolean(bool),
    Null,

    // ========== Special ==========
    EndOfInput,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

/// Classify a scanned word: literal words first, then keywords, else identifier.
pub fn classify_word(word: &str) -> TokenKind {
    match word {
        "true" => TokenKind::Boolean(true),
        "false" => TokenKind::Boolean(false),
        "null" => TokenKind::Null,
        _ => match keyword_id(word) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Identifier(word.to_string()),
        },
    }
}
