//! CLI module for the N# driver.
//!
//! ## Commands
//!
//! - `check <file>` - lex and parse, reporting diagnostics
//! - `tokens <file>` - dump the token stream
//! - `ast <file>` - dump the parsed syntax tree
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Command
//! functions return `miette::Result` instead of calling `process::exit`;
//! only the top-level [`run`] function renders errors and picks the exit
//! code. The driver owns all file I/O: source lines are fed to the lexer
//! one at a time, per the frontend's interface contract.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// The N# language front end
#[derive(Parser, Debug)]
#[command(name = "nsharp")]
#[command(version)]
#[command(about = "Front end for the N# programming language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lex and parse a file, reporting diagnostics
    Check {
        /// Source file (indentation dialect)
        file: PathBuf,
    },
    /// Dump the token stream of a file
    Tokens {
        /// Source file (indentation dialect)
        file: PathBuf,
    },
    /// Dump the parsed syntax tree of a file
    Ast {
        /// Source file (indentation dialect)
        file: PathBuf,
    },
}

/// Parse arguments, dispatch, and turn the outcome into an exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let outcome = match &cli.command {
        Command::Check { file } => commands::check(file),
        Command::Tokens { file } => commands::tokens(file),
        Command::Ast { file } => commands::ast(file),
    };
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(report) => {
            eprintln!("{report:?}");
            ExitCode::FAILURE
        }
    }
}
