//! Parser for the N# indentation dialect.
//!
//! Consumes the token stream produced by [`crate::lexer`] and builds one
//! root [`ast::File`](crate::ast::File) node, tolerating malformed input:
//! unparseable fragments become `Error` sentinel nodes and the diagnostics
//! are collected into a flat list alongside the tree.
//!
//! Statements and declarations are recursive descent; expressions use
//! precedence climbing over the static table in
//! `nsharp_core::lang::operators`.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use nsharp_syntax::{lexer, parser};
//!
//! let source = "class Greeter\n    str name\n";
//! let tokens = lexer::lex(source);
//! let result = parser::parse("greeter.ns", &tokens);
//! assert_eq!(result.file.statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{Diagnostic, Severity};
use crate::lexer::{Token, TokenKind};
use nsharp_core::lang::operators;

// NOTE: This module is split across multiple files using `include!` to keep
// all parser methods in the same Rust module (preserving privacy + call
// patterns) while avoiding a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
