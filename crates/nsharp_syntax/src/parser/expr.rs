/// Expression parsing methods.
///
/// This chunk implements the expression grammar with **precedence
/// climbing**: [`Parser::parse_primary_expression`] handles atoms and the
/// postfix loop handles calls and member access, then
/// [`Parser::parse_binary_operator_right_side`] folds binary operators
/// according to the static table in `nsharp_core::lang::operators`,
/// recursing only when the lookahead operator binds strictly tighter.
///
/// Assignment is not part of the table: it is detected after the left-hand
/// side at statement level and parsed right-associatively.
impl<'a> Parser<'a> {
    fn expression(&mut self) -> Result<Located<Expression>, Diagnostic> {
        let left = self.parse_unary()?;
        self.parse_binary_operator_right_side(1, left)
    }

    /// Statement-level expression: an assignment operator after the parsed
    /// left-hand side turns the whole expression into an `Assignment`.
    fn expression_with_assignment(&mut self) -> Result<Located<Expression>, Diagnostic> {
        let left = self.expression()?;
        self.skip_continuation();
        if self.peek().kind.is_assignment_operator() {
            let token = self.next();
            let op = AssignmentOp::from_token(token.kind)
                .expect("assignment token range and operator mapping out of sync");
            let right = self.expression_with_assignment()?;
            let pos = left.pos;
            return Ok(Located::new(
                pos,
                Expression::Assignment {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
            ));
        }
        Ok(left)
    }

    /// Fold operators at or above `min_precedence` into `left`.
    fn parse_binary_operator_right_side(
        &mut self,
        min_precedence: u8,
        mut left: Located<Expression>,
    ) -> Result<Located<Expression>, Diagnostic> {
        loop {
            self.skip_continuation();
            let Some(prec) = operators::precedence(self.peek().kind) else {
                return Ok(left);
            };
            if prec < min_precedence {
                return Ok(left);
            }
            let token = self.next();
            let op = BinaryOp::from_token(token.kind)
                .expect("precedence table and binary operator mapping out of sync");

            let mut right = self.parse_unary()?;
            loop {
                self.skip_continuation();
                match operators::precedence(self.peek().kind) {
                    // A tighter-binding operator claims the right operand.
                    Some(next_prec) if next_prec > prec => {
                        right = self.parse_binary_operator_right_side(next_prec, right)?;
                    }
                    _ => break,
                }
            }

            let pos = left.pos;
            left = Located::new(
                pos,
                Expression::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
            );
        }
    }

    fn parse_unary(&mut self) -> Result<Located<Expression>, Diagnostic> {
        self.skip_continuation();
        let op = match self.peek().kind {
            TokenKind::Subtract => Some(UnaryOp::Negate),
            TokenKind::Not => Some(UnaryOp::Not),
            TokenKind::BitwiseNot => Some(UnaryOp::BitwiseNot),
            _ => None,
        };
        if let Some(op) = op {
            let pos = self.next().position;
            let operand = self.parse_unary()?;
            return Ok(Located::new(
                pos,
                Expression::Unary {
                    op,
                    operand: Box::new(operand),
                },
            ));
        }
        let primary = self.parse_primary_expression()?;
        self.parse_postfix(primary)
    }

    fn parse_primary_expression(&mut self) -> Result<Located<Expression>, Diagnostic> {
        let pos = self.peek().position;
        match self.peek().kind {
            TokenKind::LeftParen => {
                self.next();
                let inner = self.expression()?;
                self.expect(TokenKind::RightParen, "')'")?;
                Ok(Located::new(pos, Expression::Parenthesized(Box::new(inner))))
            }
            TokenKind::Identifier | TokenKind::BacktickIdentifier => {
                let name = self.qualified_name(false)?;
                Ok(Located::new(pos, Expression::Identifier(name)))
            }
            TokenKind::Number => {
                let text = self.next().text;
                Ok(Located::new(pos, Expression::Number(text)))
            }
            TokenKind::CharacterLiteral => {
                let text = self.next().text;
                Ok(Located::new(pos, Expression::Character(text)))
            }
            TokenKind::StringStart => self.string_interpolation(),
            TokenKind::True => {
                self.next();
                Ok(Located::new(pos, Expression::Literal(LiteralToken::True)))
            }
            TokenKind::False => {
                self.next();
                Ok(Located::new(pos, Expression::Literal(LiteralToken::False)))
            }
            TokenKind::Null => {
                self.next();
                Ok(Located::new(pos, Expression::Literal(LiteralToken::Null)))
            }
            TokenKind::This => {
                self.next();
                Ok(Located::new(pos, Expression::CurrentObjectInstance))
            }
            TokenKind::Discard => {
                self.next();
                Ok(Located::new(pos, Expression::Discard))
            }
            TokenKind::New => {
                self.next();
                let ty = self.qualified_name(true)?;
                self.expect(TokenKind::LeftParen, "'(' after the constructed type")?;
                let args = self.call_args();
                self.expect(TokenKind::RightParen, "')' after the arguments")?;
                Ok(Located::new(pos, Expression::ConstructorCall { ty, args }))
            }
            TokenKind::Error => {
                let token = self.next();
                self.diagnostics
                    .push(Diagnostic::error(token.text.clone(), token.position));
                Ok(Located::new(pos, Expression::Error(token.text)))
            }
            _ => Err(self.expected("an expression")),
        }
    }

    /// Postfix loop: member access and call syntax immediately following a
    /// primary. Dots extend an identifier's parts; on any other target they
    /// build `Member` nodes.
    fn parse_postfix(
        &mut self,
        mut expr: Located<Expression>,
    ) -> Result<Located<Expression>, Diagnostic> {
        loop {
            self.skip_continuation();
            match self.peek().kind {
                TokenKind::Dot => {
                    self.next();
                    let part = self.name_part(false)?;
                    if let Expression::Identifier(name) = &mut expr.node {
                        name.parts.push(part);
                    } else {
                        let pos = expr.pos;
                        expr = Located::new(
                            pos,
                            Expression::Member {
                                target: Box::new(expr),
                                name: part,
                            },
                        );
                    }
                }
                TokenKind::LeftParen => {
                    self.next();
                    let args = self.call_args();
                    self.expect(TokenKind::RightParen, "')' after the arguments")?;
                    let pos = expr.pos;
                    expr = Located::new(
                        pos,
                        Expression::MethodCall {
                            target: Box::new(expr),
                            args,
                        },
                    );
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Arguments between parentheses. An unparseable argument becomes an
    /// `Error` expression and scanning resumes at the next `,` or `)`.
    fn call_args(&mut self) -> Vec<Located<Expression>> {
        let mut args = Vec::new();
        self.skip_continuation();
        if self.peek().kind == TokenKind::RightParen {
            return args;
        }
        loop {
            match self.expression() {
                Ok(arg) => args.push(arg),
                Err(diagnostic) => {
                    let pos = diagnostic.position;
                    let message = diagnostic.message.clone();
                    self.diagnostics.push(diagnostic);
                    args.push(Located::new(pos, Expression::Error(message)));
                    self.recover_in_args();
                }
            }
            self.skip_continuation();
            if !self.accept(&[TokenKind::Comma]) {
                break;
            }
        }
        args
    }

    fn recover_in_args(&mut self) {
        loop {
            match self.peek().kind {
                TokenKind::Comma
                | TokenKind::RightParen
                | TokenKind::EndOfLine
                | TokenKind::Dedent
                | TokenKind::EndOfFile => break,
                _ => {
                    self.pos += 1;
                }
            }
        }
    }

    /// One interpolated string, possibly spanning several physical lines:
    /// after a closing quote, a `..` marker followed by another string
    /// appends that string's segments as a new line of the same node.
    fn string_interpolation(&mut self) -> Result<Located<Expression>, Diagnostic> {
        let pos = self.expect(TokenKind::StringStart, "'\"'")?.position;
        let mut lines = Vec::new();
        loop {
            let mut segments = Vec::new();
            loop {
                match self.peek().kind {
                    TokenKind::StringLiteral => {
                        segments.push(StringSegment::Literal(self.next().text));
                    }
                    TokenKind::LeftCurly => {
                        self.next();
                        match self.expression() {
                            Ok(embedded) => segments.push(StringSegment::Expression(embedded)),
                            Err(diagnostic) => {
                                let at = diagnostic.position;
                                let message = diagnostic.message.clone();
                                self.diagnostics.push(diagnostic);
                                segments.push(StringSegment::Expression(Located::new(
                                    at,
                                    Expression::Error(message),
                                )));
                                self.recover_in_interpolation();
                            }
                        }
                        if !self.accept(&[TokenKind::RightCurly]) {
                            let diagnostic =
                                self.expected("'}' closing the embedded expression");
                            self.diagnostics.push(diagnostic);
                        }
                    }
                    TokenKind::StringEnd => {
                        self.next();
                        break;
                    }
                    TokenKind::Error => {
                        // Unterminated string: record and end this line.
                        let token = self.next();
                        self.diagnostics
                            .push(Diagnostic::error(token.text.clone(), token.position));
                        break;
                    }
                    _ => {
                        let diagnostic = self.expected("string content");
                        self.diagnostics.push(diagnostic);
                        break;
                    }
                }
            }
            lines.push(segments);
            if !self.accept(&[TokenKind::DoubleDot, TokenKind::StringStart]) {
                break;
            }
        }
        Ok(Located::new(
            pos,
            Expression::StringInterpolation(StringInterpolation { lines }),
        ))
    }

    fn recover_in_interpolation(&mut self) {
        loop {
            match self.peek().kind {
                TokenKind::RightCurly
                | TokenKind::StringLiteral
                | TokenKind::StringEnd
                | TokenKind::Error
                | TokenKind::EndOfLine
                | TokenKind::EndOfFile => break,
                _ => {
                    self.pos += 1;
                }
            }
        }
    }
}
