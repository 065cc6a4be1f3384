//! Vocabulary registries for the shale surface syntax.
//!
//! Callers work with **stable IDs** (`KeywordId`, `PunctuatorId`) instead of comparing spellings, and look up
//! spellings and metadata through the registry tables.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer and parser enforce syntax; the registries only describe it.
//!
//! ## Examples
//! ```rust
//! use shale_core::lang::keywords::{self, KeywordId};
//! use shale_core::lang::punctuation::{self, PunctuatorId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(punctuation::as_str(PunctuatorId::UnsignedShiftRightAssign), ">>>=");
//! ```

pub mod keywords;
pub mod punctuation;
