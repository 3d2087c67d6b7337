//! Operator vocabulary and the parser's precedence table.
//!
//! The registry records every operator and punctuation spelling the lexer can
//! produce, so tooling and tests can enumerate the surface without scraping
//! the lexer's dispatch code. [`precedence`] is the static table driving
//! precedence climbing in the parser: higher binds tighter, assignment is
//! deliberately absent (it is a statement-level rule, not a climbing tier).
//!
//! ## Notes
//! - Word spellings (`and`, `or`, `not`, `is`) also appear in the keyword
//!   registry; use this module when you need precedence.
//! - `>>` doubles as the closer of nested generic argument lists; the parser
//!   splits it, the vocabulary does not care.

use super::tokens::TokenKind;

/// Metadata for an operator or punctuation token.
///
/// `spellings` may hold several accepted spellings for the same kind
/// (e.g. `&&` and `and`).
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub kind: TokenKind,
    pub spellings: &'static [&'static str],
}

const fn op(kind: TokenKind, spellings: &'static [&'static str]) -> OperatorInfo {
    OperatorInfo { kind, spellings }
}

/// Registry of all operator and punctuation spellings.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(TokenKind::Multiply, &["*"]),
    op(TokenKind::Divide, &["/"]),
    op(TokenKind::Modulus, &["%"]),
    op(TokenKind::Add, &["+"]),
    op(TokenKind::Subtract, &["-"]),
    // Shifts
    op(TokenKind::LeftShift, &["<<"]),
    op(TokenKind::RightShift, &[">>"]),
    // Bitwise
    op(TokenKind::BitwiseAnd, &["&"]),
    op(TokenKind::BitwiseOr, &["|"]),
    op(TokenKind::BitwiseXor, &["^"]),
    op(TokenKind::BitwiseNot, &["~"]),
    // Comparison
    op(TokenKind::LessThan, &["<"]),
    op(TokenKind::LessThanOrEqual, &["<="]),
    op(TokenKind::GreaterThan, &[">"]),
    op(TokenKind::GreaterThanOrEqual, &[">="]),
    op(TokenKind::Is, &["is"]),
    op(TokenKind::Equal, &["=="]),
    op(TokenKind::NotEqual, &["!="]),
    // Logical
    op(TokenKind::And, &["&&", "and"]),
    op(TokenKind::Or, &["||", "or"]),
    op(TokenKind::Not, &["!", "not"]),
    // Null handling
    op(TokenKind::NullCoalesce, &["??"]),
    // Assignment
    op(TokenKind::Assign, &["="]),
    op(TokenKind::AddAssign, &["+="]),
    op(TokenKind::SubtractAssign, &["-="]),
    op(TokenKind::MultiplyAssign, &["*="]),
    op(TokenKind::DivideAssign, &["/="]),
    op(TokenKind::ModulusAssign, &["%="]),
    op(TokenKind::LeftShiftAssign, &["<<="]),
    op(TokenKind::RightShiftAssign, &[">>="]),
    op(TokenKind::BitwiseAndAssign, &["&="]),
    op(TokenKind::BitwiseOrAssign, &["|="]),
    op(TokenKind::BitwiseXorAssign, &["^="]),
    op(TokenKind::NullCoalesceAssign, &["??="]),
    // Punctuation
    op(TokenKind::Dot, &["."]),
    op(TokenKind::DoubleDot, &[".."]),
    op(TokenKind::Comma, &[","]),
    op(TokenKind::LeftParen, &["("]),
    op(TokenKind::RightParen, &[")"]),
    op(TokenKind::LeftBracket, &["["]),
    op(TokenKind::RightBracket, &["]"]),
    op(TokenKind::LeftCurly, &["{"]),
    op(TokenKind::RightCurly, &["}"]),
];

/// Resolve a spelling to its token kind, if it is an operator or
/// punctuation spelling.
pub fn from_str(spelling: &str) -> Option<TokenKind> {
    OPERATORS
        .iter()
        .find(|o| o.spellings.contains(&spelling))
        .map(|o| o.kind)
}

/// Binding power of an infix binary operator; `None` for every other kind.
///
/// Higher binds tighter. Assignment is not in the table: it is parsed as a
/// right-associative statement-level rule, below every tier here.
pub fn precedence(kind: TokenKind) -> Option<u8> {
    use TokenKind::*;
    match kind {
        Multiply | Divide | Modulus => Some(10),
        Add | Subtract => Some(9),
        LeftShift | RightShift => Some(8),
        BitwiseAnd => Some(7),
        BitwiseOr | BitwiseXor => Some(6),
        LessThan | LessThanOrEqual | GreaterThan | GreaterThanOrEqual | Is => Some(5),
        Equal | NotEqual => Some(4),
        And => Some(3),
        Or => Some(2),
        NullCoalesce => Some(1),
        _ => None,
    }
}
