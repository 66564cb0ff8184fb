#[derive(Debug)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexerError {
    /// A string literal was still open when its line or the input ended.
    UnterminatedString {
        /// The source line where the literal starts.
        line: usize,
    },
    /// A string literal contained an escape sequence that is not supported.
    UnknownEscape {
        /// The escaped character that was not recognized.
        escape: char,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A raw line break appeared inside a string literal.
    StrayLineBreak {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A line was indented by an odd number of spaces.
    OddIndent {
        /// The number of leading spaces that was found.
        count: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric literal was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: String literal is not terminated.")
            },
            Self::UnknownEscape { escape, line } => {
                write!(f, "Error on line {line}: Unrecognized escape sequence '\\{escape}'.")
            },
            Self::StrayLineBreak { line } => {
                write!(f, "Error on line {line}: Unexpected line break inside a string literal.")
            },
            Self::OddIndent { count, line } => write!(f,
                                                      "Error on line {line}: Indentation of {count} spaces is not a multiple of two."),
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for LexerError {}
