//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These reduce repetitive `matches!(...)` at parser call sites and give diagnostics a uniform way to name the
//! token they tripped over.

use crate::ast::BinaryOp;
use crate::lexer::{Token, TokenKind};
use shale_core::lang::keywords::{self, KeywordId};
use shale_core::lang::punctuation::{self, PunctuatorId};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the punctuator id, if this is a punctuation token.
    pub fn punctuator_id(&self) -> Option<PunctuatorId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuator.
    pub fn is_punctuation(&self, id: PunctuatorId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, TokenKind::Identifier(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self, TokenKind::EndOfInput)
    }

    /// The binary operator this token spells, including the word operator `instanceof`.
    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            TokenKind::Punctuation(id) => BinaryOp::from_punctuator(*id),
            TokenKind::Keyword(KeywordId::Instanceof) => Some(BinaryOp::Instanceof),
            _ => None,
        }
    }

    /// Short human-readable description for diagnostics, e.g. ``keyword `if` `` or `end of input`.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("keyword `{}`", keywords::as_str(*id)),
            TokenKind::Punctuation(id) => format!("`{}`", punctuation::as_str(*id)),
            TokenKind::Identifier(name) => format!("identifier `{name}`"),
            TokenKind::Number(value) => format!("number `{value}`"),
            TokenKind::String(value) => format!("string {value:?}"),
            TokenKind::Boolean(value) => format!("`{value}`"),
            TokenKind::Null => "`null`".to_string(),
            TokenKind::EndOfInput => "end of input".to_string(),
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.punctuator_id()`.
    pub fn punctuator_id(&self) -> Option<PunctuatorId> {
        self.kind.punctuator_id()
    }

    pub fn describe(&self) -> String {
        self.kind.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_names_each_token_family() {
        assert_eq!(TokenKind::Keyword(KeywordId::If).describe(), "keyword `if`");
        assert_eq!(TokenKind::Punctuation(PunctuatorId::Semicolon).describe(), "`;`");
        assert_eq!(TokenKind::Identifier("foo".into()).describe(), "identifier `foo`");
        assert_eq!(TokenKind::Number(1.5).describe(), "number `1.5`");
        assert_eq!(TokenKind::String("hi".into()).describe(), "string \"hi\"");
        assert_eq!(TokenKind::EndOfInput.describe(), "end of input");
    }

    #[test]
    fn instanceof_is_a_binary_operator() {
        assert_eq!(
            TokenKind::Keyword(KeywordId::Instanceof).binary_op(),
            Some(BinaryOp::Instanceof)
        );
        assert_eq!(TokenKind::Keyword(KeywordId::In).binary_op(), None);
        assert_eq!(
            TokenKind::Punctuation(PunctuatorId::UnsignedShiftRight).binary_op(),
            Some(BinaryOp::UShr)
        );
        assert_eq!(TokenKind::Punctuation(PunctuatorId::Assign).binary_op(), None);
    }
}
