/// Lexing errors.
///
/// Defines all error types that can occur while tokenizing raw source text.
/// Lexer errors include malformed string literals, unsupported escape
/// sequences, and inconsistent indentation.
pub mod lexer_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream into
/// an abstract syntax tree. Parse errors include unexpected tokens, malformed
/// definitions, and references to undeclared classes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution. Runtime errors include things like division by zero, type
/// mismatches, unknown names, and calls with the wrong number of arguments.
pub mod runtime_error;

pub use lexer_error::LexerError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
