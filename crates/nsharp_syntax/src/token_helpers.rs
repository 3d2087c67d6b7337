//! Small helper APIs for working with [`Token`] at call sites.
//!
//! Kind-level classification (ranges, continuation classes) lives on
//! `TokenKind` in `nsharp_core`; these helpers cover the token record.

use crate::lexer::{Token, TokenKind};

impl Token {
    /// True for layout tokens synthesized by the lexer rather than spelled
    /// in source (`Indent`, `Dedent`, `EndOfLine`, `EndOfFile`).
    pub fn is_layout(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Indent | TokenKind::Dedent | TokenKind::EndOfLine | TokenKind::EndOfFile
        )
    }

    /// Human-readable rendering for diagnostics: the kind plus the literal
    /// text when the token carries one.
    pub fn describe(&self) -> String {
        if self.text.is_empty() {
            format!("{:?}", self.kind)
        } else {
            format!("{:?} '{}'", self.kind, self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Position;

    #[test]
    fn test_is_layout() {
        let indent = Token::new(TokenKind::Indent, Position::new(1, 1), String::new());
        let ident = Token::new(TokenKind::Identifier, Position::new(1, 1), "x".to_string());
        assert!(indent.is_layout());
        assert!(!ident.is_layout());
    }

    #[test]
    fn test_describe() {
        let ident = Token::new(TokenKind::Identifier, Position::new(1, 1), "x".to_string());
        assert_eq!(ident.describe(), "Identifier 'x'");
        let eol = Token::new(TokenKind::EndOfLine, Position::new(1, 2), String::new());
        assert_eq!(eol.describe(), "EndOfLine");
    }
}
