//! Parser for the shale surface syntax
//!
//! Recursive descent with a single token of lookahead, pulled from an owned [`Lexer`]. Expression tiers, loosest
//! first:
//!
//! | tier | operators |
//! |---|---|
//! | assignment | `= *= /= %= += -= <<= >>= >>>= &= ^= \|=` |
//! | ternary | `? :` |
//! | logical or / and | `\|\|`, `&&` |
//! | bitwise or / xor / and | `\|`, `^`, `&` |
//! | equality | `== !=` |
//! | relational | `< > <= >= instanceof` |
//! | shift | `<< >> >>>` |
//! | additive | `+ -` |
//! | multiplicative | `* / %` |
//! | prefix | `+ - ! ~ ++ --` |
//! | postfix | `++ --` |
//! | suffix | `.name`, `[index]`, `(args)` |
//!
//! Every binary tier builds **right-leaning** trees: `1 - 2 - 3` parses as `1 - (2 - 3)`.
//!
//! ## Examples
//!
//! ```rust
//! use shale_syntax::parser::{self, ParseOptions};
//!
//! let script = parser::parse("if (a) b(); else c[0] = 1;").unwrap();
//! assert_eq!(script.body.len(), 1);
//!
//! let err = parser::parse_with_options("((((x))));", ParseOptions::new().with_max_depth(2)).unwrap_err();
//! assert_eq!(err.kind, shale_syntax::diagnostics::ErrorKind::NestingTooDeep);
//! ```

use crate::ast::*;
use crate::diagnostics::SyntaxError;
use crate::lexer::{Lexer, Token, TokenKind};
use shale_core::lang::keywords::{self, KeywordId};
use shale_core::lang::punctuation::{self, PunctuatorId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
