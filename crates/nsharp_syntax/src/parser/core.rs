/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the [`ParseResult`] it produces,
/// and the top-level parse loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser
///   methods in a single module while avoiding one large source file.
/// - The parser is single-pass and recovers from errors by synchronizing at
///   statement boundaries; recovery leaves `Error` sentinel nodes behind so
///   the tree is always complete.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    diagnostics: Vec<Diagnostic>,
    /// One half of a `>>` token already consumed as a generic-close `>`.
    pending_generic_close: bool,
}

/// Result of parsing one file: the complete tree plus every diagnostic
/// produced along the way (lexical errors included, in source order).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub file: File,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// True if any error-severity diagnostic was produced.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// The stream must be non-empty (the lexer always terminates it with
    /// `EndOfFile`); use [`parse`] for the checked entrypoint.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
            pending_generic_close: false,
        }
    }

    /// Parse the entire token stream into a [`ParseResult`].
    pub fn parse(mut self, name: &str) -> ParseResult {
        let mut statements = Vec::new();
        loop {
            // Stray DEDENTs can appear at the top level after error
            // recovery; skip them to avoid cascaded errors.
            while self.accept(&[TokenKind::Dedent]) {}
            if self.at_end() {
                break;
            }
            statements.push(self.parse_statement());
        }
        ParseResult {
            file: File {
                name: name.to_string(),
                statements,
            },
            diagnostics: self.diagnostics,
        }
    }
}
