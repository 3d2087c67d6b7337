/// Declaration parsing methods.
///
/// This chunk parses namespaces, imports, class-like declarations, and the
/// member forms inside a class body (constants, fields, properties,
/// methods). Member dispatch works on line shape: after the modifiers, a
/// `(` right after one name is a method without a return type, a second
/// name followed by `(` is a method with one, `=` is an initialized field,
/// an indented accessor block is a property, anything else is a field.
impl<'a> Parser<'a> {
    fn namespace_statement(&mut self) -> Result<Located<Statement>, Diagnostic> {
        let pos = self.expect(TokenKind::Namespace, "'ns'")?.position;
        let path = self.dotted_path()?;
        self.end_statement();
        Ok(Located::new(pos, Statement::Namespace(path)))
    }

    fn import_statement(&mut self) -> Result<Located<Statement>, Diagnostic> {
        let pos = self.expect(TokenKind::Use, "'use'")?.position;
        let path = self.dotted_path()?;
        self.end_statement();
        Ok(Located::new(pos, Statement::Import(path)))
    }

    /// `modifier* (class-like | const | member)`
    fn declaration(&mut self) -> Result<Located<Statement>, Diagnostic> {
        let pos = self.peek().position;
        let mut modifiers = Vec::new();
        while self.peek().kind.is_modifier() {
            let token = self.next();
            // An in-range token missing from the mapping is a table defect,
            // not malformed input.
            let modifier = Modifier::from_token(token.kind)
                .expect("modifier token range and mapping table out of sync");
            modifiers.push(modifier);
        }
        match self.peek().kind {
            TokenKind::Class | TokenKind::Interface | TokenKind::Struct => {
                self.class_declaration(pos, modifiers)
            }
            TokenKind::Constant => self.constant_declaration(pos, modifiers),
            TokenKind::Identifier | TokenKind::BacktickIdentifier => {
                self.member_declaration(pos, modifiers)
            }
            _ => Err(self.expected("a declaration")),
        }
    }

    /// `("class" | "interface" | "struct") Name ["from" Type ("," Type)*]`
    /// followed by the member block. The first `from` type is the parent,
    /// the rest are interfaces.
    fn class_declaration(
        &mut self,
        pos: Position,
        modifiers: Vec<Modifier>,
    ) -> Result<Located<Statement>, Diagnostic> {
        let kind = match self.peek().kind {
            TokenKind::Class => ClassKind::Class,
            TokenKind::Interface => ClassKind::Interface,
            TokenKind::Struct => ClassKind::Struct,
            _ => return Err(self.expected("'class', 'interface', or 'struct'")),
        };
        self.next();
        let name = self.identifier()?;

        let mut parent = None;
        let mut interfaces = Vec::new();
        if self.accept(&[TokenKind::From]) {
            parent = Some(self.qualified_name(true)?);
            while self.accept(&[TokenKind::Comma]) {
                interfaces.push(self.qualified_name(true)?);
            }
        }

        self.expect_block_start("end of line after the type header")?;
        let body = self.class_block();
        Ok(Located::new(
            pos,
            Statement::Class(ClassDecl {
                modifiers,
                kind,
                name,
                parent,
                interfaces,
                body,
            }),
        ))
    }

    /// Member lines up to and including the closing `Dedent`.
    fn class_block(&mut self) -> Vec<Located<Statement>> {
        let mut members = Vec::new();
        while !matches!(self.peek().kind, TokenKind::Dedent | TokenKind::EndOfFile) {
            let pos = self.peek().position;
            let result = self.member_statement();
            members.push(self.recover(result, pos));
        }
        self.accept(&[TokenKind::Dedent]);
        members
    }

    fn member_statement(&mut self) -> Result<Located<Statement>, Diagnostic> {
        match self.peek().kind {
            TokenKind::EndOfLine => Ok(self.blank_line()),
            TokenKind::Comment => Ok(self.comment_statement()),
            TokenKind::Error => Ok(self.lexical_error_statement()),
            kind if kind.is_modifier()
                || matches!(
                    kind,
                    TokenKind::Class
                        | TokenKind::Interface
                        | TokenKind::Struct
                        | TokenKind::Constant
                        | TokenKind::Identifier
                        | TokenKind::BacktickIdentifier
                ) =>
            {
                self.declaration()
            }
            _ => Err(self.expected("a class member")),
        }
    }

    /// `const Type Name = expr`
    fn constant_declaration(
        &mut self,
        pos: Position,
        modifiers: Vec<Modifier>,
    ) -> Result<Located<Statement>, Diagnostic> {
        self.expect(TokenKind::Constant, "'const'")?;
        let ty = self.qualified_name(true)?;
        let name = self.identifier()?;
        self.expect(TokenKind::Assign, "'=' after the constant name")?;
        let value = self.expression()?;
        self.end_statement();
        Ok(Located::new(
            pos,
            Statement::Constant(ConstantDecl {
                modifiers,
                ty,
                name,
                value,
            }),
        ))
    }

    /// Dispatch a member line that starts with a type or method name.
    fn member_declaration(
        &mut self,
        pos: Position,
        modifiers: Vec<Modifier>,
    ) -> Result<Located<Statement>, Diagnostic> {
        let first = self.qualified_name(true)?;

        if self.peek().kind == TokenKind::LeftParen {
            // `Name(...)`: method without a return type.
            let name = match first.as_simple() {
                Some(name) => name.to_string(),
                None => {
                    return Err(Diagnostic::error(
                        format!("invalid method name '{first}'"),
                        first.pos,
                    ));
                }
            };
            return self.method_declaration(pos, modifiers, None, name);
        }

        let name = self.identifier()?;
        if self.peek().kind == TokenKind::LeftParen {
            return self.method_declaration(pos, modifiers, Some(first), name);
        }
        if self.accept(&[TokenKind::Assign]) {
            let value = self.expression()?;
            self.end_statement();
            return Ok(Located::new(
                pos,
                Statement::Field(FieldDecl {
                    modifiers,
                    ty: first,
                    name,
                    value: Some(value),
                }),
            ));
        }
        // `Type Name` alone: a property if an indented accessor block
        // follows, otherwise a field.
        if self.accept(&[TokenKind::EndOfLine, TokenKind::Indent]) {
            return self.property_declaration(pos, modifiers, first, name);
        }
        self.end_statement();
        Ok(Located::new(
            pos,
            Statement::Field(FieldDecl {
                modifiers,
                ty: first,
                name,
                value: None,
            }),
        ))
    }

    /// `(" params ")"` and the body; no following indented block means an
    /// abstract method.
    fn method_declaration(
        &mut self,
        pos: Position,
        modifiers: Vec<Modifier>,
        return_type: Option<QualifiedName>,
        name: String,
    ) -> Result<Located<Statement>, Diagnostic> {
        self.expect(TokenKind::LeftParen, "'('")?;
        let mut params = Vec::new();
        self.skip_continuation();
        if self.peek().kind != TokenKind::RightParen {
            loop {
                let param_pos = self.peek().position;
                let ty = self.qualified_name(true)?;
                let param_name = self.identifier()?;
                params.push(Param {
                    pos: param_pos,
                    ty,
                    name: param_name,
                });
                self.skip_continuation();
                if !self.accept(&[TokenKind::Comma]) {
                    break;
                }
                self.skip_continuation();
            }
        }
        self.expect(TokenKind::RightParen, "')' after the parameter list")?;

        let body = if self.accept(&[TokenKind::EndOfLine, TokenKind::Indent]) {
            self.block()
        } else {
            self.end_statement();
            Vec::new()
        };
        Ok(Located::new(
            pos,
            Statement::Method(MethodDecl {
                modifiers,
                return_type,
                name,
                params,
                body,
            }),
        ))
    }

    /// Accessor block of a property: `get`/`set` lines, each with an
    /// optional body block (a bare accessor line is auto-implemented).
    fn property_declaration(
        &mut self,
        pos: Position,
        modifiers: Vec<Modifier>,
        ty: QualifiedName,
        name: String,
    ) -> Result<Located<Statement>, Diagnostic> {
        let mut get_body = Vec::new();
        let mut set_body = Vec::new();
        while !matches!(self.peek().kind, TokenKind::Dedent | TokenKind::EndOfFile) {
            match self.peek().kind {
                TokenKind::Get => {
                    self.next();
                    get_body = self.accessor_body();
                }
                TokenKind::Set => {
                    self.next();
                    set_body = self.accessor_body();
                }
                TokenKind::EndOfLine | TokenKind::Comment => {
                    self.next();
                }
                _ => {
                    let diagnostic = self.expected("'get' or 'set'");
                    let at = diagnostic.position;
                    let message = diagnostic.message.clone();
                    self.diagnostics.push(diagnostic);
                    self.synchronize();
                    get_body.push(Located::new(at, Statement::Error(message)));
                }
            }
        }
        self.accept(&[TokenKind::Dedent]);
        Ok(Located::new(
            pos,
            Statement::Property(PropertyDecl {
                modifiers,
                ty,
                name,
                get_body,
                set_body,
            }),
        ))
    }

    fn accessor_body(&mut self) -> Vec<Located<Statement>> {
        if self.accept(&[TokenKind::EndOfLine, TokenKind::Indent]) {
            self.block()
        } else {
            self.accept(&[TokenKind::EndOfLine]);
            Vec::new()
        }
    }
}
