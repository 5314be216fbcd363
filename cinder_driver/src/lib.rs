//! Contains the command-line surface of the Cinder front end: argument parsing and the
//! tokenize-then-parse pipeline with diagnostic reporting.

#![deny(
    missing_debug_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links
)]

use std::{fs, io, path::PathBuf, process::ExitCode};

pub use clap::Parser;
use cinder_base::log::{Message, Severity};
use cinder_lexical::lexer::Lexer;
use cinder_syntax::parser;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(name = "cinder", about = "Cinder scripting language front end.")]
pub struct Argument {
    /// The input file to parse.
    pub file: PathBuf,

    /// Prints out the syntax tree of the program.
    #[clap(long = "dump-syntax")]
    pub dump_syntax: bool,
}

/// Runs the front end with the given arguments.
///
/// Prints every accumulated diagnostic to the standard error stream, then reports the overall
/// success or failure of the parse. Lexical errors do not prevent the parse from being
/// attempted.
#[must_use]
pub fn run(argument: Argument) -> ExitCode {
    let source = match fs::read_to_string(&argument.file) {
        Ok(source) => source,
        Err(error) => {
            let msg = Message::new(
                Severity::Error,
                format!("{}: {error}", argument.file.display()),
            );

            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let mut lexer = Lexer::new(&source);
    let tokens = lexer.tokenize();

    let mut parser = parser::Parser::new(tokens);
    let program = parser.parse();

    let mut stderr = io::stderr();
    let _ = lexer.diagnostics().format(&mut stderr);
    let _ = parser.diagnostics().format(&mut stderr);

    let Some(program) = program else {
        let msg = Message::new(
            Severity::Error,
            format!("{}: failed to parse", argument.file.display()),
        );

        eprintln!("{msg}");
        return ExitCode::FAILURE;
    };

    if argument.dump_syntax {
        println!("{program:#?}");
    }

    let msg = Message::new(
        Severity::Info,
        format!("{}: parsed successfully", argument.file.display()),
    );

    eprintln!("{msg}");
    ExitCode::SUCCESS
}
