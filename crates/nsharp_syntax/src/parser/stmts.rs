/// Statement parsing methods.
///
/// This chunk parses statement forms (`if`, `for`, `case`, `try`, `return`,
/// expression statements) and indentation-delimited blocks: `Indent` and
/// `Dedent` tokens play the role `{` and `}` play in brace dialects.
impl<'a> Parser<'a> {
    /// Parse one statement, converting a failed rule into an `Error` node.
    fn parse_statement(&mut self) -> Located<Statement> {
        let pos = self.peek().position;
        let result = self.statement();
        self.recover(result, pos)
    }

    fn statement(&mut self) -> Result<Located<Statement>, Diagnostic> {
        match self.peek().kind {
            TokenKind::EndOfLine => Ok(self.blank_line()),
            TokenKind::Comment => Ok(self.comment_statement()),
            TokenKind::Error => Ok(self.lexical_error_statement()),
            TokenKind::Namespace => self.namespace_statement(),
            TokenKind::Use => self.import_statement(),
            TokenKind::If => self.if_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::Case => self.case_statement(),
            TokenKind::Try => self.try_statement(),
            TokenKind::Break => self.simple_statement(Statement::Break),
            TokenKind::Continue => self.simple_statement(Statement::Continue),
            TokenKind::Return => self.return_statement(),
            TokenKind::Indent => Err(self.expected("a statement")),
            kind if kind.is_modifier() || kind.is_declaration_keyword() => self.declaration(),
            _ => self.expression_statement(),
        }
    }

    /// Statements up to and including the closing `Dedent`.
    fn block(&mut self) -> Vec<Located<Statement>> {
        let mut statements = Vec::new();
        while !matches!(self.peek().kind, TokenKind::Dedent | TokenKind::EndOfFile) {
            statements.push(self.parse_statement());
        }
        self.accept(&[TokenKind::Dedent]);
        statements
    }

    fn blank_line(&mut self) -> Located<Statement> {
        let pos = self.next().position;
        Located::new(pos, Statement::Space)
    }

    fn comment_statement(&mut self) -> Located<Statement> {
        let token = self.next();
        self.accept(&[TokenKind::EndOfLine]);
        Located::new(token.position, Statement::Comment(token.text))
    }

    /// An in-stream lexical error token becomes an `Error` statement and a
    /// diagnostic, and parsing moves on.
    fn lexical_error_statement(&mut self) -> Located<Statement> {
        let token = self.next();
        self.diagnostics
            .push(Diagnostic::error(token.text.clone(), token.position));
        self.accept(&[TokenKind::EndOfLine]);
        Located::new(token.position, Statement::Error(token.text))
    }

    fn simple_statement(&mut self, stmt: Statement) -> Result<Located<Statement>, Diagnostic> {
        let pos = self.next().position;
        self.end_statement();
        Ok(Located::new(pos, stmt))
    }

    fn return_statement(&mut self) -> Result<Located<Statement>, Diagnostic> {
        let pos = self.expect(TokenKind::Return, "'return'")?.position;
        let value = match self.peek().kind {
            TokenKind::EndOfLine
            | TokenKind::Dedent
            | TokenKind::EndOfFile
            | TokenKind::Comment => None,
            _ => Some(self.expression()?),
        };
        self.end_statement();
        Ok(Located::new(pos, Statement::Return(value)))
    }

    /// `if cond` block, optional `else` / `else if`. A chained `if` is
    /// parsed by direct recursion: it owns its own block and `Dedent`, so
    /// the whole chain closes on the innermost dedent.
    fn if_statement(&mut self) -> Result<Located<Statement>, Diagnostic> {
        let pos = self.expect(TokenKind::If, "'if'")?.position;
        let condition = self.expression()?;
        self.expect_block_start("end of line after the condition")?;
        let body = self.block();

        let mut else_body = Vec::new();
        if self.accept(&[TokenKind::Else]) {
            if self.peek().kind == TokenKind::If {
                else_body.push(self.if_statement()?);
            } else {
                self.expect_block_start("end of line after 'else'")?;
                else_body = self.block();
            }
        }
        Ok(Located::new(
            pos,
            Statement::If(IfStmt {
                condition,
                body,
                else_body,
            }),
        ))
    }

    /// `for name in expr` iterates; `for expr` loops on a condition.
    fn for_statement(&mut self) -> Result<Located<Statement>, Diagnostic> {
        let pos = self.expect(TokenKind::For, "'for'")?.position;
        let var = if self.peek().kind == TokenKind::Identifier
            && self.peek_next().kind == TokenKind::In
        {
            let name = self.next().text;
            self.next();
            Some(name)
        } else {
            None
        };
        let iterated = self.expression()?;
        self.expect_block_start("end of line after the loop header")?;
        let body = self.block();
        Ok(Located::new(
            pos,
            Statement::For(ForStmt {
                var,
                iterated,
                body,
            }),
        ))
    }

    fn case_statement(&mut self) -> Result<Located<Statement>, Diagnostic> {
        let pos = self.expect(TokenKind::Case, "'case'")?.position;
        let subject = self.expression()?;
        self.expect_block_start("end of line after the case subject")?;

        let mut branches = Vec::new();
        while !matches!(self.peek().kind, TokenKind::Dedent | TokenKind::EndOfFile) {
            if matches!(self.peek().kind, TokenKind::EndOfLine | TokenKind::Comment) {
                self.next();
                continue;
            }
            match self.case_branch() {
                Ok(branch) => branches.push(branch),
                Err(diagnostic) => {
                    self.diagnostics.push(diagnostic);
                    self.synchronize();
                }
            }
        }
        self.accept(&[TokenKind::Dedent]);
        Ok(Located::new(
            pos,
            Statement::Case(CaseStmt { subject, branches }),
        ))
    }

    /// `expr ("," expr)*` then the branch block; `_` is the default branch.
    fn case_branch(&mut self) -> Result<CaseBranch, Diagnostic> {
        let pos = self.peek().position;
        let mut values = vec![self.expression()?];
        while self.accept(&[TokenKind::Comma]) {
            values.push(self.expression()?);
        }
        self.expect_block_start("end of line after the branch values")?;
        let body = self.block();
        Ok(CaseBranch { pos, values, body })
    }

    fn try_statement(&mut self) -> Result<Located<Statement>, Diagnostic> {
        let pos = self.expect(TokenKind::Try, "'try'")?.position;
        self.expect_block_start("end of line after 'try'")?;
        let body = self.block();

        let mut catches = Vec::new();
        while self.peek().kind == TokenKind::Catch {
            let catch_pos = self.next().position;
            let (ty, name) = if self.peek().kind == TokenKind::EndOfLine {
                (None, None)
            } else {
                let ty = self.qualified_name(true)?;
                let name = match self.peek().kind {
                    TokenKind::Identifier => Some(self.next().text),
                    _ => None,
                };
                (Some(ty), name)
            };
            self.expect_block_start("end of line after 'catch'")?;
            let catch_body = self.block();
            catches.push(CatchClause {
                pos: catch_pos,
                ty,
                name,
                body: catch_body,
            });
        }
        Ok(Located::new(pos, Statement::Try(TryStmt { body, catches })))
    }

    fn expression_statement(&mut self) -> Result<Located<Statement>, Diagnostic> {
        let pos = self.peek().position;
        let expr = self.expression_with_assignment()?;
        self.end_statement();
        Ok(Located::new(pos, Statement::Expression(expr)))
    }
}
