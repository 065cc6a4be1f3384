//! Syntax front end for shale, a JavaScript-like surface language: lexer, parser, AST, diagnostics.
//!
//! The pipeline is two stages. [`lexer::Lexer`] turns source text into tokens on demand, and [`parser::Parser`]
//! pulls them one at a time (single lookahead) while building a [`ast::Script`] by recursive descent. The first
//! malformed construct aborts with a [`diagnostics::SyntaxError`]; there is no recovery and no partial tree.
//!
//! ## Notes
//! - This crate is syntax-only: no scopes, no name resolution, no evaluation.
//! - Vocabulary identity (keywords/punctuators) and character classes come from `shale_core`.
//!
//! ## Examples
//! ```rust
//! use shale_syntax::ast::{BinaryOp, Expr, Statement};
//! use shale_syntax::parser;
//!
//! let script = parser::parse("x = 1 + 2;").unwrap();
//! assert_eq!(script.body.len(), 1);
//! let Statement::Expr { expr: Expr::Assignment { rhs, .. } } = &script.body[0] else {
//!     panic!("expected an assignment statement");
//! };
//! assert!(matches!(**rhs, Expr::Binary { op: BinaryOp::Add, .. }));
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
