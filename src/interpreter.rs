/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, executes statements against closures,
/// performs arithmetic and logical operations, dispatches methods, and
/// writes `print` output to the context's stream. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Executes AST nodes, performing all supported operations.
/// - Manages closures, field maps, and the non-local `return` transfer.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a buffered
/// stream of tokens, each corresponding to meaningful language elements such
/// as numbers, identifiers, operators, and keywords. Because the language is
/// indentation-sensitive, the lexer also synthesizes layout tokens from the
/// leading whitespace of every line. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Derives `Indent`/`Dedent`/`Newline` layout tokens from line structure.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting errors with line info.
/// - Resolves class names so instantiations reference concrete classes.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation and
/// execution: `None`, booleans, numbers, strings, classes, and class
/// instances. It also provides truthiness, printing, equality and ordering,
/// and the class machinery behind method dispatch.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements comparison rules, including special-method dispatch.
/// - Provides classes, method tables, and per-instance field maps.
pub mod value;
