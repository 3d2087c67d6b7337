//! String, character, and interpolation scanning.
//!
//! A string literal lexes to `StringStart`, literal segments, and
//! `StringEnd`. An embedded `{expr}` emits `LeftCurly`, pushes a terminator
//! on the interpolation stack, and hands control back to the general
//! statement state; the matching `}` emits `RightCurly`, pops, and resumes
//! the string. The stack (rather than recursive lexer invocation) keeps the
//! lexer one flat state machine with inspectable state.
//!
//! Doubled `""` / `{{` / `}}` are literal characters; backslash escapes
//! cover `n t r 0 \ " ' { }`. Strings and character literals never span a
//! physical line; running off the end is reported by the caller.

use super::{Lexer, Token, TokenKind};

impl Lexer {
    /// Scan string content starting at `i`, until the closing quote, an
    /// embedded `{`, or the end of the line. Returns the next scan index.
    pub(super) fn scan_string_body(&mut self, chars: &[char], mut i: usize) -> usize {
        let seg_start = i;
        let mut value = String::new();
        while i < chars.len() {
            match chars[i] {
                '"' if chars.get(i + 1) == Some(&'"') => {
                    value.push('"');
                    i += 2;
                }
                '"' => {
                    self.flush_segment(seg_start, &mut value);
                    self.emit(Token::new(
                        TokenKind::StringEnd,
                        self.position(i),
                        "\"".to_string(),
                    ));
                    self.in_string = false;
                    return i + 1;
                }
                '{' if chars.get(i + 1) == Some(&'{') => {
                    value.push('{');
                    i += 2;
                }
                '{' => {
                    self.flush_segment(seg_start, &mut value);
                    self.emit(Token::new(
                        TokenKind::LeftCurly,
                        self.position(i),
                        "{".to_string(),
                    ));
                    self.string_terminators.push('"');
                    self.in_string = false;
                    return i + 1;
                }
                '}' if chars.get(i + 1) == Some(&'}') => {
                    value.push('}');
                    i += 2;
                }
                '\\' => match chars.get(i + 1).copied().and_then(unescape) {
                    Some(c) => {
                        value.push(c);
                        i += 2;
                    }
                    None => {
                        let shown = chars.get(i + 1).copied().unwrap_or('\\');
                        self.emit(Token::new(
                            TokenKind::Error,
                            self.position(i),
                            format!("invalid escape sequence '\\{shown}'"),
                        ));
                        i += 2;
                    }
                },
                c => {
                    value.push(c);
                    i += 1;
                }
            }
        }
        // Ran off the end of the line inside the string; push_line reports it.
        i
    }

    fn flush_segment(&mut self, start: usize, value: &mut String) {
        if !value.is_empty() {
            let text = std::mem::take(value);
            self.emit(Token::new(
                TokenKind::StringLiteral,
                self.position(start),
                text,
            ));
        }
    }

    /// Scan a character literal starting at the opening apostrophe.
    pub(super) fn scan_character(&mut self, chars: &[char], start: usize) -> usize {
        let mut i = start + 1;
        let value = match chars.get(i) {
            None | Some('\'') => {
                let message = if chars.get(i).is_none() {
                    "unterminated character literal"
                } else {
                    "empty character literal"
                };
                self.emit(Token::new(
                    TokenKind::Error,
                    self.position(start),
                    message.to_string(),
                ));
                return if chars.get(i).is_some() { i + 1 } else { i };
            }
            Some('\\') => match chars.get(i + 1).copied() {
                None => {
                    self.emit(Token::new(
                        TokenKind::Error,
                        self.position(start),
                        "unterminated character literal".to_string(),
                    ));
                    return i + 1;
                }
                Some(e) => match unescape(e) {
                    Some(c) => {
                        i += 2;
                        c
                    }
                    None => {
                        self.emit(Token::new(
                            TokenKind::Error,
                            self.position(start),
                            format!("invalid escape sequence '\\{e}'"),
                        ));
                        i += 2;
                        if chars.get(i) == Some(&'\'') {
                            return i + 1;
                        }
                        return i;
                    }
                },
            },
            Some(&c) => {
                i += 1;
                c
            }
        };
        if chars.get(i) == Some(&'\'') {
            self.emit(Token::new(
                TokenKind::CharacterLiteral,
                self.position(start),
                value.to_string(),
            ));
            i + 1
        } else {
            self.emit(Token::new(
                TokenKind::Error,
                self.position(start),
                "unterminated character literal".to_string(),
            ));
            i
        }
    }
}

fn unescape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '{' => Some('{'),
        '}' => Some('}'),
        _ => None,
    }
}
