#[derive(Debug)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier was called or inherited from without being a declared
    /// class.
    UnknownClass {
        /// The name that did not resolve to a class.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A method definition did not declare `self` as its first parameter.
    MissingSelfParameter {
        /// The name of the offending method.
        method: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A field was read from something that is not a plain variable chain.
    InvalidFieldAccess {
        /// The field that was accessed.
        field: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::UnknownClass { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a declared class.")
            },

            Self::MissingSelfParameter { method, line } => write!(f,
                                                                  "Error on line {line}: Method '{method}' must take 'self' as its first parameter."),

            Self::InvalidFieldAccess { field, line } => write!(f,
                                                               "Error on line {line}: Field '{field}' can only be read from a variable."),
        }
    }
}

impl std::error::Error for ParseError {}
