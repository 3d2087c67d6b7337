//! Diagnostics for the N# frontend.
//!
//! Both error classes of the frontend end up here: lexical errors (carried
//! through the token stream as `Error` tokens) and syntactic errors (carried
//! through the tree as `Error` sentinel nodes). Neither aborts a parse; the
//! parser collects every diagnostic into a flat list alongside the complete
//! tree for the convenience of tooling.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::ast::Position;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single frontend diagnostic with location information.
#[derive(Debug, Clone, PartialEq, Error, MietteDiagnostic)]
#[error("{severity}: {message} at {position}")]
#[diagnostic(code(nsharp::syntax))]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub position: Position,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, position: Position) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            position,
        }
    }

    pub fn warning(message: impl Into<String>, position: Position) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            position,
        }
    }
}
