//! Indentation tracking and the held-token continuation protocol.
//!
//! `EndOfLine` tokens and the indentation of the upcoming statement line are
//! not emitted immediately: whether they are real layout or should vanish
//! depends on what the next line begins with. They sit in a small FIFO owned
//! by the lexer instance until the next ordinary token decides their fate:
//!
//! - previous emission was continuation-postfix, or the incoming token is
//!   continuation-prefix → the statement continues; held tokens and the
//!   pending indent are discarded;
//! - otherwise → held `EndOfLine`s are replayed and the pending indent is
//!   converted into `Indent`/`Dedent` tokens against the indentation stack.
//!
//! A pending level that matches no stack entry and does not exceed the top
//! is a lexical error; the stack is left at the enclosing level so the rest
//! of the file keeps tracking correctly.

use super::{Lexer, Token, TokenKind};
use crate::ast::Position;

impl Lexer {
    /// Emit an ordinary token, resolving any held layout tokens first.
    pub(super) fn emit(&mut self, token: Token) {
        if self.last_postfix || token.kind.is_continuation_prefix() {
            // The statement continues onto this line.
            self.held.clear();
            self.pending_indent = None;
        } else {
            self.replay_held();
        }
        self.last_postfix = token.kind.is_continuation_postfix();
        self.tokens.push(token);
    }

    /// Queue a layout token whose emission is deferred.
    pub(super) fn hold(&mut self, token: Token) {
        self.held.push_back(token);
    }

    /// Replay held layout tokens and apply the pending indentation.
    pub(super) fn replay_held(&mut self) {
        while let Some(token) = self.held.pop_front() {
            self.tokens.push(token);
        }
        if let Some((level, pos)) = self.pending_indent.take() {
            self.apply_indent(level, pos);
        }
    }

    fn apply_indent(&mut self, level: u32, pos: Position) {
        if level > self.current_indent() {
            self.indents.push(level);
            self.tokens
                .push(Token::new(TokenKind::Indent, pos, String::new()));
            return;
        }
        while self.current_indent() > level {
            self.indents.pop();
            self.tokens
                .push(Token::new(TokenKind::Dedent, pos, String::new()));
        }
        if self.current_indent() != level {
            self.tokens.push(Token::new(
                TokenKind::Error,
                pos,
                format!("mismatched indentation: no enclosing block is indented by {level} columns"),
            ));
        }
    }

    /// Innermost indentation level; the stack is seeded with the sentinel 0.
    pub(super) fn current_indent(&self) -> u32 {
        self.indents.last().copied().unwrap_or(0)
    }
}
