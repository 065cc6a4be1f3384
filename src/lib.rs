#![forbid(unsafe_code)]
//! shale: a lexer and recursive-descent parser for a JavaScript subset.
//!
//! The front end lives in `shale_syntax` (with character classes and vocabulary in `shale_core`); this crate is
//! the driver that reads a file, parses it and writes the tree as JSON.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use shale_syntax::{ast, diagnostics, lexer, parser};
