//! Command implementations for the N# driver.
//!
//! Each command returns `Ok(clean)` where `clean` decides the exit code,
//! or a `miette` report for driver-level failures (unreadable files).
//! Frontend diagnostics are never driver failures: the parse always
//! completes and the diagnostics are printed `file:line:col: severity:
//! message`, one per line.

use std::fs;
use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

use nsharp_syntax::lexer::{Lexer, Token};
use nsharp_syntax::parser::{self, ParseResult};

/// Lex and parse `path`, reporting every diagnostic.
pub fn check(path: &Path) -> Result<bool> {
    let result = parse_file(path)?;
    report(path, &result);
    Ok(!result.has_errors())
}

/// Dump the token stream of `path`.
pub fn tokens(path: &Path) -> Result<bool> {
    let tokens = lex_file(path)?;
    for token in &tokens {
        println!(
            "{:>4}:{:<4} {}",
            token.position.line,
            token.position.column,
            token.describe()
        );
    }
    Ok(true)
}

/// Dump the parsed syntax tree of `path`.
pub fn ast(path: &Path) -> Result<bool> {
    let result = parse_file(path)?;
    println!("{:#?}", result.file);
    report(path, &result);
    Ok(!result.has_errors())
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}

/// Feed the file to the lexer one line at a time and signal end of input.
fn lex_file(path: &Path) -> Result<Vec<Token>> {
    let source = read_source(path)?;
    let mut lexer = Lexer::new();
    for line in source.lines() {
        lexer.push_line(line);
    }
    let tokens = lexer.finish();
    debug!(path = %path.display(), token_count = tokens.len(), "lexed");
    Ok(tokens)
}

fn parse_file(path: &Path) -> Result<ParseResult> {
    let tokens = lex_file(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(parser::parse(&name, &tokens))
}

fn report(path: &Path, result: &ParseResult) {
    for diagnostic in &result.diagnostics {
        eprintln!(
            "{}:{}: {}: {}",
            path.display(),
            diagnostic.position,
            diagnostic.severity,
            diagnostic.message
        );
    }
}
