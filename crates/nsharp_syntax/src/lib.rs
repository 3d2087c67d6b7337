#![forbid(unsafe_code)]
//! Syntax frontend for the N# indentation dialect: lexer, parser, AST,
//! diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the compiler
//! driver, the other dialect renderers, and future tooling.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no name resolution, no type
//!   checking, no lowering.
//! - Token vocabulary identity (keywords/operators/precedence) comes from
//!   the `nsharp_core::lang` registries.
//! - Malformed input never aborts: lexical errors become in-stream `Error`
//!   tokens, syntactic errors become `Error` sentinel nodes, and the parse
//!   result always carries a complete `File`.
//!
//! ## Examples
//! ```rust,no_run
//! use nsharp_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("ns Demo\n");
//! let result = parser::parse("demo.ns", &tokens);
//! assert!(!result.has_errors());
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
