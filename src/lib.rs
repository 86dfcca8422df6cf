//! # tally
//!
//! tally is a tiny calculator language. A program is a brace-delimited
//! block of assignment statements over a single numeric domain (64-bit
//! floats), with arithmetic, exponentiation, and bitwise operators that
//! coerce their operands to integers on demand. The crate provides the
//! full front end — lexer, recursive-descent parser, and tree-walking
//! interpreter with one global variable scope — plus a thin CLI.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::BTreeMap;

use crate::{
    error::Error,
    interpreter::{evaluator::core::Interpreter, lexer::Lexer, parser::core::Parser},
    source::Source,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Ast` enum and the operator enums that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser in a single pass and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the node variants for every statement and expression form.
/// - Attaches source positions to nodes for error reporting.
/// - Keeps operator tags separate from token kinds, so a node can never
///   carry a non-operator tag.
pub mod ast;
/// Provides unified error types for the whole pipeline.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating code. Every error carries the exact source
/// location of the failure and renders the complete diagnostic — file,
/// line, column, offending source line and caret — from its `Display`
/// implementation.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing and evaluation to provide a
/// complete runtime for source code. Data flows strictly downstream: the
/// parser pulls one token at a time from the lexer, and the evaluator
/// receives one parsed tree.
pub mod interpreter;
/// Source text handling and diagnostic positions.
///
/// Declares `Source`, the positions the lexer stamps on every token, and
/// the self-contained `Location` that errors embed.
pub mod source;
/// General utilities for numeric conversion.
pub mod util;

/// Runs a complete program and returns the resulting variable bindings.
///
/// This is the one-call entry point over the pipeline: the source text is
/// lexed and parsed, the tree is evaluated once, and the final global
/// scope is handed back as an ordered map. The optional `file` name is
/// used only in diagnostics; unnamed input is reported as `STDIN`.
///
/// # Errors
/// Returns an [`Error`] wrapping the lex, parse, or name error that
/// stopped the run. Evaluation is fail-fast: the scope is discarded on
/// error.
///
/// # Examples
/// ```
/// let scope = tally::interpret("{ a = 5 + 2 * 3; b = a - 1; }", None).unwrap();
///
/// assert_eq!(scope["a"], 11.0);
/// assert_eq!(scope["b"], 10.0);
///
/// // Reading a variable that was never assigned is an error.
/// let result = tally::interpret("{ x = y; }", None);
/// assert!(result.is_err());
/// ```
pub fn interpret(text: &str, file: Option<&str>) -> Result<BTreeMap<String, f64>, Error> {
    let source = Source::new(text, file);
    let lexer = Lexer::new(&source);
    let mut parser = Parser::new(lexer)?;
    let tree = parser.parse()?;

    let mut interpreter = Interpreter::new(tree, &source);
    interpreter.run()?;

    Ok(interpreter.into_scope())
}
