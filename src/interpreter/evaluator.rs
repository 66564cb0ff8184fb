/// Binary arithmetic evaluation logic.
///
/// Handles the execution of the four arithmetic operations, including string
/// concatenation and `__add__` dispatch for addition.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main execution engine dispatching over the syntax tree, the
/// runtime context, and error propagation.
pub mod core;

/// Logical operator evaluation.
///
/// Implements `or`, `and`, and `not` over boolean operands.
pub mod logic;
