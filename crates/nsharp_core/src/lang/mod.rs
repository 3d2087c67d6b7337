//! Language vocabulary registries.
//!
//! - `tokens` - the closed token-kind enumeration and its range queries
//! - `keywords` - reserved-word spellings
//! - `operators` - operator spellings and the parser's precedence table

pub mod keywords;
pub mod operators;
pub mod tokens;
