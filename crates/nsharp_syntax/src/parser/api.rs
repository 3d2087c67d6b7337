/// Parse a token stream into a [`ParseResult`].
///
/// This is the main public entrypoint for parsing. `name` names the file
/// the tokens came from and lands on the root [`File`] node.
///
/// Malformed input still produces a complete tree: `Error` sentinel nodes
/// stand in for the unparseable fragments and every diagnostic (lexical and
/// syntactic) is collected into the result's flat list.
#[tracing::instrument(skip_all, fields(name = name, token_count = tokens.len()))]
pub fn parse(name: &str, tokens: &[Token]) -> ParseResult {
    if tokens.is_empty() {
        return ParseResult {
            file: File {
                name: name.to_string(),
                statements: Vec::new(),
            },
            diagnostics: Vec::new(),
        };
    }
    Parser::new(tokens).parse(name)
}
