use crate::interpreter::value::core::Value;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Read an identifier or field that has no binding.
    UndefinedName {
        /// The name that was not found.
        name: String,
    },
    /// Applied an operation to incompatible value kinds.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// Invoked a method with the wrong number of arguments.
    ArityMismatch {
        /// The number of formal parameters the method declares.
        expected: usize,
        /// The number of arguments that was supplied.
        found:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// The context's output stream rejected a write.
    OutputFailed {
        /// Details reported by the stream.
        details: String,
    },
    /// The non-local transfer raised by a `return` statement.
    ///
    /// This variant is produced and consumed by the evaluator itself: every
    /// method body converts it back into the method's result. It only
    /// surfaces to the host when `return` is executed outside of any method.
    Return {
        /// The value carried out of the method, if the returned expression
        /// produced one.
        value: Option<Value>,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedName { name } => write!(f, "Error: Name '{name}' is not defined."),

            Self::TypeMismatch { details } => write!(f, "Error: {details}."),

            Self::ArityMismatch { expected, found } => write!(f,
                                                              "Error: Method expects {expected} argument(s) but {found} were supplied."),

            Self::DivisionByZero => write!(f, "Error: Division by zero."),

            Self::OutputFailed { details } => {
                write!(f, "Error: Failed to write to the output stream: {details}.")
            },

            Self::Return { .. } => write!(f, "Error: 'return' outside of any method."),
        }
    }
}

impl std::error::Error for RuntimeError {}
