/// Miscellaneous parser utilities: identifier and name parsing shared by
/// the declaration, statement, and expression chunks.
impl<'a> Parser<'a> {
    fn identifier(&mut self) -> Result<String, Diagnostic> {
        match self.peek().kind {
            TokenKind::Identifier | TokenKind::BacktickIdentifier => Ok(self.next().text),
            _ => Err(self.expected("an identifier")),
        }
    }

    /// `A.B.C` as plain strings (namespace and import paths).
    fn dotted_path(&mut self) -> Result<Vec<String>, Diagnostic> {
        let mut parts = vec![self.identifier()?];
        while self.peek().kind == TokenKind::Dot {
            self.next();
            parts.push(self.identifier()?);
        }
        Ok(parts)
    }

    /// Dotted, optionally generic name. `allow_type_args` is on in type
    /// positions only; in expression positions `<` is always comparison.
    fn qualified_name(&mut self, allow_type_args: bool) -> Result<QualifiedName, Diagnostic> {
        let pos = self.peek().position;
        let mut parts = vec![self.name_part(allow_type_args)?];
        while self.peek().kind == TokenKind::Dot
            && matches!(
                self.peek_next().kind,
                TokenKind::Identifier | TokenKind::BacktickIdentifier
            )
        {
            self.next();
            parts.push(self.name_part(allow_type_args)?);
        }
        Ok(QualifiedName { pos, parts })
    }

    fn name_part(&mut self, allow_type_args: bool) -> Result<NamePart, Diagnostic> {
        let token = match self.peek().kind {
            TokenKind::Identifier | TokenKind::BacktickIdentifier => self.next(),
            _ => return Err(self.expected("an identifier")),
        };
        let mut part = NamePart::plain(token.text);
        if allow_type_args && self.peek().kind == TokenKind::LessThan {
            self.next();
            loop {
                part.type_args.push(self.qualified_name(true)?);
                if !self.accept(&[TokenKind::Comma]) {
                    break;
                }
            }
            if !self.accept_generic_close() {
                return Err(self.expected("'>' closing the type arguments"));
            }
        }
        Ok(part)
    }

    /// Accept one `>` worth of generic close, splitting a `>>` token into
    /// two closers for nested argument lists.
    fn accept_generic_close(&mut self) -> bool {
        if self.pending_generic_close {
            self.pending_generic_close = false;
            return true;
        }
        match self.peek().kind {
            TokenKind::GreaterThan => {
                self.pos += 1;
                true
            }
            TokenKind::RightShift => {
                self.pos += 1;
                self.pending_generic_close = true;
                true
            }
            _ => false,
        }
    }
}
