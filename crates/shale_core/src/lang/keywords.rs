//! Reserved words of the shale surface syntax.
//!
//! This module is the single source of truth for keywords: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `true`, `false` and `null` are literals, not keywords. The lexer classifies them separately.
//! - Several words are reserved without any grammar using them yet (`class`, `function`, `new`, ...). They
//!   still lex as keywords, so using them as identifiers is a syntax error.
//!
//! ## Examples
//! ```rust
//! use shale_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("instanceof"), Some(KeywordId::Instanceof));
//! assert_eq!(keywords::category(KeywordId::Var), KeywordCategory::Declaration);
//! assert_eq!(keywords::from_str("true"), None);
//! ```

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    Break,
    Case,
    Catch,
    Continue,
    Default,
    Do,
    Else,
    Finally,
    For,
    If,
    Return,
    Switch,
    Throw,
    Try,
    While,

    // Declarations
    Class,
    Const,
    Extends,
    Function,
    Import,
    Var,

    // Word operators
    Delete,
    In,
    Instanceof,
    New,
    Typeof,
    Void,

    // Receivers
    Super,
    This,

    // Modifiers (reserved, no grammar yet)
    Private,
    Protected,
    Public,
    Static,
}

/// Broad grouping for keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Introduces or structures a statement (`if`, `case`, `finally`).
    Statement,
    /// Introduces a declaration (`var`, `const`, `function`).
    Declaration,
    /// Spelled as a word but behaves like an operator (`instanceof`, `typeof`).
    Operator,
    /// Evaluates to a fixed receiver (`this`, `super`).
    Reference,
    /// Access or storage modifier (`public`, `static`).
    Modifier,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords, in alphabetical order of spelling.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Break, "break", KeywordCategory::Statement),
    info(KeywordId::Case, "case", KeywordCategory::Statement),
    info(KeywordId::Catch, "catch", KeywordCategory::Statement),
    info(KeywordId::Class, "class", KeywordCategory::Declaration),
    info(KeywordId::Const, "const", KeywordCategory::Declaration),
    info(KeywordId::Continue, "continue", KeywordCategory::Statement),
    info(KeywordId::Default, "default", KeywordCategory::Statement),
    info(KeywordId::Delete, "delete", KeywordCategory::Operator),
    info(KeywordId::Do, "do", KeywordCategory::Statement),
    info(KeywordId::Else, "else", KeywordCategory::Statement),
    info(KeywordId::Extends, "extends", KeywordCategory::Declaration),
    info(KeywordId::Finally, "finally", KeywordCategory::Statement),
    info(KeywordId::For, "for", KeywordCategory::Statement),
    info(KeywordId::Function, "function", KeywordCategory::Declaration),
    info(KeywordId::If, "if", KeywordCategory::Statement),
    info(KeywordId::Import, "import", KeywordCategory::Declaration),
    info(KeywordId::In, "in", KeywordCategory::Operator),
    info(KeywordId::Instanceof, "instanceof", KeywordCategory::Operator),
    info(KeywordId::New, "new", KeywordCategory::Operator),
    info(KeywordId::Private, "private", KeywordCategory::Modifier),
    info(KeywordId::Protected, "protected", KeywordCategory::Modifier),
    info(KeywordId::Public, "public", KeywordCategory::Modifier),
    info(KeywordId::Return, "return", KeywordCategory::Statement),
    info(KeywordId::Static, "static", KeywordCategory::Modifier),
    info(KeywordId::Super, "super", KeywordCategory::Reference),
    info(KeywordId::Switch, "switch", KeywordCategory::Statement),
    info(KeywordId::This, "this", KeywordCategory::Reference),
    info(KeywordId::Throw, "throw", KeywordCategory::Statement),
    info(KeywordId::Try, "try", KeywordCategory::Statement),
    info(KeywordId::Typeof, "typeof", KeywordCategory::Operator),
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
    info(KeywordId::Void, "void", KeywordCategory::Operator),
    info(KeywordId::While, "while", KeywordCategory::Statement),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word.
/// - `None` otherwise (including for the literals `true`, `false`, `null`).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
