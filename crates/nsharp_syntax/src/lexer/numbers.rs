//! Numeric literal scanning.
//!
//! Decimal integers, decimals with a fractional part, and `0x` hexadecimal
//! literals, with `_` separators. The literal text is preserved verbatim on
//! the token; parsing it into a value is downstream work.

use super::{Lexer, Token, TokenKind};

impl Lexer {
    /// Scan a numeric literal starting at `start`. Returns the next index.
    pub(super) fn scan_number(&mut self, chars: &[char], start: usize) -> usize {
        let mut end = start;
        if chars[start] == '0' && matches!(chars.get(start + 1), Some('x' | 'X')) {
            end = start + 2;
            while end < chars.len() && (chars[end].is_ascii_hexdigit() || chars[end] == '_') {
                end += 1;
            }
            if end == start + 2 {
                self.emit(Token::new(
                    TokenKind::Error,
                    self.position(start),
                    "invalid hexadecimal literal".to_string(),
                ));
                return end;
            }
        } else {
            while end < chars.len() && (chars[end].is_ascii_digit() || chars[end] == '_') {
                end += 1;
            }
            // One character of lookahead past the dot keeps `1..2` two
            // numbers and a `..`, not a malformed decimal.
            if end < chars.len()
                && chars[end] == '.'
                && matches!(chars.get(end + 1), Some(c) if c.is_ascii_digit())
            {
                end += 1;
                while end < chars.len() && (chars[end].is_ascii_digit() || chars[end] == '_') {
                    end += 1;
                }
            }
        }
        let text: String = chars[start..end].iter().collect();
        self.emit(Token::new(TokenKind::Number, self.position(start), text));
        end
    }
}
