//! Reserved-word vocabulary for the indentation dialect.
//!
//! This module is the single source of truth for reserved spellings: a const
//! table mapping every reserved word to its [`TokenKind`], plus lookup
//! helpers. The lexer resolves identifier spellings through [`from_str`]; a
//! spelling that is absent here lexes as a plain identifier.
//!
//! ## Notes
//! - Lookup is **case-sensitive**.
//! - Word operators (`and`, `or`, `not`, `is`, `in`) live here as spellings
//!   and in [`crate::lang::operators`] for precedence metadata.

use super::tokens::TokenKind;

/// Registry of reserved words, canonical spelling first.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    // Declarations
    ("ns", TokenKind::Namespace),
    ("use", TokenKind::Use),
    ("class", TokenKind::Class),
    ("interface", TokenKind::Interface),
    ("struct", TokenKind::Struct),
    ("const", TokenKind::Constant),
    // Statements
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("case", TokenKind::Case),
    ("for", TokenKind::For),
    ("in", TokenKind::In),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("return", TokenKind::Return),
    ("try", TokenKind::Try),
    ("catch", TokenKind::Catch),
    ("get", TokenKind::Get),
    ("set", TokenKind::Set),
    ("from", TokenKind::From),
    ("new", TokenKind::New),
    ("this", TokenKind::This),
    // Modifiers
    ("public", TokenKind::Public),
    ("protected", TokenKind::Protected),
    ("internal", TokenKind::Internal),
    ("private", TokenKind::Private),
    ("static", TokenKind::Static),
    ("virtual", TokenKind::Virtual),
    ("override", TokenKind::Override),
    ("abstract", TokenKind::Abstract),
    // Word operators
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
    ("is", TokenKind::Is),
    // Literal words
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
    ("_", TokenKind::Discard),
];

/// Resolve a spelling to its reserved token kind, if reserved.
pub fn from_str(spelling: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(s, _)| *s == spelling)
        .map(|(_, kind)| *kind)
}

/// Canonical spelling for a reserved token kind, if it has one.
pub fn as_str(kind: TokenKind) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|(_, k)| *k == kind)
        .map(|(s, _)| *s)
}
