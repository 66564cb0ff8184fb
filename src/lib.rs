//! # mython
//!
//! mython is a tree-walking interpreter for Mython, a small
//! indentation-sensitive, dynamically typed scripting language with classes,
//! single inheritance, and a handful of built-in value kinds. The crate
//! lexes, parses, and executes Mython source against a writable output
//! stream.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{
    evaluator::core::Context, lexer::Lexer, parser::statement::parse_program, value::core::Closure,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum that represents the syntactic
/// structure of source code as a tree. The AST is built by the parser and
/// executed by the evaluator.
///
/// # Responsibilities
/// - Defines one node type per language construct.
/// - Carries literal values, class references, and operator kinds.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting
/// code. It standardizes error reporting and carries detailed information
/// about failures, including error kinds, descriptions, and source lines
/// where they are known.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers to lexer and parser diagnostics.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and all supporting infrastructure to provide a complete
/// runtime for source code execution. It exposes the building blocks behind
/// [`run_program`].
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for tokenizing and executing user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Executes a Mython program against an output stream.
///
/// The source is tokenized and parsed in full, then executed statement by
/// statement against a fresh global closure. Everything the program prints
/// is written to `output`; nothing else is emitted.
///
/// # Errors
/// Returns an error if lexing, parsing, or execution fails. A `return`
/// statement outside of any method also surfaces here.
///
/// # Examples
/// ```
/// use mython::run_program;
///
/// let mut output = Vec::new();
/// run_program("print 1 + 2", &mut output).unwrap();
/// assert_eq!(output, b"3\n");
///
/// // Reading a name that was never bound fails:
/// assert!(run_program("print x", &mut Vec::new()).is_err());
/// ```
pub fn run_program(source: &str, output: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut lexer = Lexer::new(source)?;
    let program = parse_program(&mut lexer)?;

    let mut globals = Closure::new();
    let mut context = Context::new(output);
    program.execute(&mut globals, &mut context)?;

    Ok(())
}
