/// Token-stream primitives and error recovery.
///
/// This chunk contains the low-level machinery used throughout parsing:
/// - `peek` / `peek_next` / `next` cursor access
/// - `accept` — all-or-nothing consumption of an exact kind sequence
/// - `expect` and diagnostic construction
/// - layout handling (`expect_block_start`, `end_statement`)
/// - `synchronize` — skip to the next statement boundary
impl<'a> Parser<'a> {
    /// True when the cursor sits on `EndOfFile`.
    fn at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::EndOfFile)
    }

    /// Current token without consuming it. The cursor never moves past the
    /// trailing `EndOfFile`, so this is always valid.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// One-token lookahead past the current token.
    fn peek_next(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)]
    }

    /// Consume and return the current token.
    fn next(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.at_end() {
            self.pos += 1;
        }
        token
    }

    /// Attempt to consume an exact sequence of kinds. On any mismatch the
    /// cursor rolls back to where it started and `false` is returned.
    fn accept(&mut self, kinds: &[TokenKind]) -> bool {
        let start = self.pos;
        for kind in kinds {
            if self.peek().kind == *kind {
                self.pos += 1;
            } else {
                self.pos = start;
                return false;
            }
        }
        true
    }

    /// Consume a token of `kind` or fail with an expected-token diagnostic
    /// naming what was actually found.
    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, Diagnostic> {
        if self.peek().kind == kind {
            Ok(self.next())
        } else {
            Err(self.expected(what))
        }
    }

    /// Diagnostic for an expectation failure at the current token.
    fn expected(&self, what: &str) -> Diagnostic {
        let token = self.peek();
        Diagnostic::error(
            format!("expected {what}, found {}", token.describe()),
            token.position,
        )
    }

    /// The `..` continuation marker is transparent inside statements.
    fn skip_continuation(&mut self) {
        while self.peek().kind == TokenKind::DoubleDot {
            self.pos += 1;
        }
    }

    /// Consume the `EndOfLine Indent` sequence opening a block, tolerating
    /// blank lines between the header and the block.
    fn expect_block_start(&mut self, what: &str) -> Result<(), Diagnostic> {
        if !self.accept(&[TokenKind::EndOfLine]) {
            return Err(self.expected(what));
        }
        while self.accept(&[TokenKind::EndOfLine]) {}
        if self.accept(&[TokenKind::Indent]) {
            Ok(())
        } else {
            Err(self.expected("an indented block"))
        }
    }

    /// Finish a simple statement: swallow a trailing comment, then the end
    /// of line. Junk before the end of line is reported and skipped.
    fn end_statement(&mut self) {
        while self.peek().kind == TokenKind::Comment {
            self.next();
        }
        if self.accept(&[TokenKind::EndOfLine]) {
            return;
        }
        if !matches!(self.peek().kind, TokenKind::Dedent | TokenKind::EndOfFile) {
            let diagnostic = self.expected("end of line");
            self.diagnostics.push(diagnostic);
            self.synchronize();
        }
    }

    /// Skip to the next statement boundary, swallowing any balanced
    /// indented region opened by the malformed statement.
    fn synchronize(&mut self) {
        self.pending_generic_close = false;
        let mut depth = 0usize;
        loop {
            match self.peek().kind {
                TokenKind::EndOfFile => break,
                TokenKind::Dedent if depth == 0 => break,
                TokenKind::Dedent => {
                    depth -= 1;
                    self.pos += 1;
                    if depth == 0 {
                        break;
                    }
                }
                TokenKind::Indent => {
                    depth += 1;
                    self.pos += 1;
                }
                TokenKind::EndOfLine if depth == 0 => {
                    self.pos += 1;
                    break;
                }
                _ => {
                    self.pos += 1;
                }
            }
        }
    }

    /// Convert a failed rule into an `Error` statement node, record the
    /// diagnostic, and resynchronize.
    fn recover(
        &mut self,
        result: Result<Located<Statement>, Diagnostic>,
        pos: Position,
    ) -> Located<Statement> {
        match result {
            Ok(stmt) => stmt,
            Err(diagnostic) => {
                let message = diagnostic.message.clone();
                self.diagnostics.push(diagnostic);
                self.synchronize();
                Located::new(pos, Statement::Error(message))
            }
        }
    }
}
