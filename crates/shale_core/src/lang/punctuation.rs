//! Punctuator vocabulary.
//!
//! Every non-word token the lexer can produce: delimiters, separators, operators and assignment operators.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact; prefix matching (longest match first) is the lexer's job.
//! - No spelling is longer than [`MAX_PUNCTUATOR_LEN`] bytes.
//!
//! ## Examples
//! ```rust
//! use shale_core::lang::punctuation::{self, PunctuatorCategory, PunctuatorId};
//!
//! assert_eq!(punctuation::from_str(">>="), Some(PunctuatorId::ShiftRightAssign));
//! assert_eq!(punctuation::as_str(PunctuatorId::Ellipsis), "...");
//! assert_eq!(punctuation::category(PunctuatorId::PlusAssign), PunctuatorCategory::Assignment);
//! ```

/// Length in bytes of the longest punctuator spelling (`>>>=`).
pub const MAX_PUNCTUATOR_LEN: usize = 4;

/// Broad syntactic grouping for punctuators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuatorCategory {
    /// Brackets and braces.
    Delimiter,
    /// `,` `;` `:` `?`
    Separator,
    /// `.` and `...`
    Access,
    /// Arithmetic, bitwise, logical and comparison operators.
    Operator,
    /// `=` and the compound assignment operators.
    Assignment,
}

/// Stable identifier for punctuator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuatorId {
    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Separators
    Comma,
    Semicolon,
    Colon,
    Question,

    // Access
    Dot,
    Ellipsis,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Bang,
    AmpAmp,
    PipePipe,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    BangEq,

    // Assignment
    Assign,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,
    AmpAssign,
    PipeAssign,
    CaretAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    UnsignedShiftRightAssign,
}

/// Metadata for a punctuator.
#[derive(Debug, Clone, Copy)]
pub struct PunctuatorInfo {
    pub id: PunctuatorId,
    pub canonical: &'static str,
    pub category: PunctuatorCategory,
}

use PunctuatorCategory::{Access, Assignment, Delimiter, Operator, Separator};

/// Registry of all punctuators.
pub const PUNCTUATORS: &[PunctuatorInfo] = &[
    // Delimiters
    info(PunctuatorId::LParen, "(", Delimiter),
    info(PunctuatorId::RParen, ")", Delimiter),
    info(PunctuatorId::LBrace, "{", Delimiter),
    info(PunctuatorId::RBrace, "}", Delimiter),
    info(PunctuatorId::LBracket, "[", Delimiter),
    info(PunctuatorId::RBracket, "]", Delimiter),
    // Separators
    info(PunctuatorId::Comma, ",", Separator),
    info(PunctuatorId::Semicolon, ";", Separator),
    info(PunctuatorId::Colon, ":", Separator),
    info(PunctuatorId::Question, "?", Separator),
    // Access
    info(PunctuatorId::Dot, ".", Access),
    info(PunctuatorId::Ellipsis, "...", Access),
    // Operators
    info(PunctuatorId::Plus, "+", Operator),
    info(PunctuatorId::Minus, "-", Operator),
    info(PunctuatorId::Star, "*", Operator),
    info(PunctuatorId::Slash, "/", Operator),
    info(PunctuatorId::Percent, "%", Operator),
    info(PunctuatorId::PlusPlus, "++", Operator),
    info(PunctuatorId::MinusMinus, "--", Operator),
    info(PunctuatorId::Amp, "&", Operator),
    info(PunctuatorId::Pipe, "|", Operator),
    info(PunctuatorId::Caret, "^", Operator),
    info(PunctuatorId::Tilde, "~", Operator),
    info(PunctuatorId::Bang, "!", Operator),
    info(PunctuatorId::AmpAmp, "&&", Operator),
    info(PunctuatorId::PipePipe, "||", Operator),
    info(PunctuatorId::ShiftLeft, "<<", Operator),
    info(PunctuatorId::ShiftRight, ">>", Operator),
    info(PunctuatorId::UnsignedShiftRight, ">>>", Operator),
    info(PunctuatorId::Lt, "<", Operator),
    info(PunctuatorId::Gt, ">", Operator),
    info(PunctuatorId::LtEq, "<=", Operator),
    info(PunctuatorId::GtEq, ">=", Operator),
    info(PunctuatorId::EqEq, "==", Operator),
    info(PunctuatorId::BangEq, "!=", Operator),
    // Assignment
    info(PunctuatorId::Assign, "=", Assignment),
    info(PunctuatorId::PlusAssign, "+=", Assignment),
    info(PunctuatorId::MinusAssign, "-=", Assignment),
    info(PunctuatorId::StarAssign, "*=", Assignment),
    info(PunctuatorId::SlashAssign, "/=", Assignment),
    info(PunctuatorId::PercentAssign, "%=", Assignment),
    info(PunctuatorId::AmpAssign, "&=", Assignment),
    info(PunctuatorId::PipeAssign, "|=", Assignment),
    info(PunctuatorId::CaretAssign, "^=", Assignment),
    info(PunctuatorId::ShiftLeftAssign, "<<=", Assignment),
    info(PunctuatorId::ShiftRightAssign, ">>=", Assignment),
    info(PunctuatorId::UnsignedShiftRightAssign, ">>>=", Assignment),
];

/// Canonical spelling.
pub fn as_str(id: PunctuatorId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: PunctuatorId) -> PunctuatorCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuatorId) -> &'static PunctuatorInfo {
    PUNCTUATORS
        .iter()
        .find(|p| p.id == id)
        .expect("punctuator info missing")
}

/// Resolve an exact spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuatorId> {
    PUNCTUATORS.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuatorId, canonical: &'static str, category: PunctuatorCategory) -> PunctuatorInfo {
    PunctuatorInfo { id, canonical, category }
}
