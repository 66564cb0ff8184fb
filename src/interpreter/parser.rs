/// Expression parsing.
///
/// Implements the precedence-climbing grammar for expressions, from logical
/// `or` down to literals, parenthesized expressions, instantiations, and
/// dotted method-call chains.
pub mod core;

/// Statement parsing.
///
/// Implements logic for parsing top-level and suite statements, including
/// assignments, `print`, `return`, conditionals, and class and method
/// definitions.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides helpers for expected tokens and comma-separated lists shared by
/// the statement and expression grammars.
pub mod utils;
