//! Pure helpers shared by the shale front end: character classification and canonical vocabulary.
//!
//! This crate is intentionally small and dependency-free. The lexer in `shale_syntax` builds on it, and tooling
//! (highlighters, formatters, docs generators) can reuse the same tables without pulling in a parser.
//!
//! ## Notes
//!
//! - No IO, no global state, no AST types.
//! - Vocabulary lives in [`lang`] as registry tables keyed by stable IDs.

pub mod chars;
pub mod lang;
