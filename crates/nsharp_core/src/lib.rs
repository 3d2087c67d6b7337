#![forbid(unsafe_code)]
//! Shared language vocabulary for the N# language.
//!
//! This crate is the single source of truth for the token vocabulary of the
//! indentation dialect: the closed [`lang::tokens::TokenKind`] enumeration,
//! the reserved-word registry in [`lang::keywords`], and operator metadata
//! (spellings and precedence) in [`lang::operators`].
//!
//! ## Notes
//! - This crate is intentionally **pure**: no I/O, no AST, no side effects.
//! - The frontend (`nsharp_syntax`) and any future dialect renderers consume
//!   vocabulary identity from here instead of matching on string spellings.

pub mod lang;
