use std::rc::Rc;

use crate::interpreter::value::{class::Class, core::Value};

/// An abstract syntax tree node.
///
/// Mython makes no structural distinction between statements and
/// expressions: every node executes against a closure and a context and
/// produces an optional value. Expression-like nodes produce a value;
/// statement-like nodes usually produce none.
#[derive(Debug, Clone)]
pub enum Statement {
    /// A literal value appearing directly in source code.
    Const {
        /// The constant value.
        value: Value,
    },
    /// Binds the value of an expression to a name in the current closure.
    Assignment {
        /// The name being bound.
        var: String,
        /// The expression producing the value.
        rv:  Box<Statement>,
    },
    /// Reads a variable, or a chain of instance fields rooted at one.
    VariableValue {
        /// The identifier chain, e.g. `["self", "x"]` for `self.x`.
        dotted_ids: Vec<String>,
    },
    /// Writes the value of an expression into a field of an instance.
    FieldAssignment {
        /// The expression producing the instance.
        object:     Box<Statement>,
        /// The field being written.
        field_name: String,
        /// The expression producing the value.
        rv:         Box<Statement>,
    },
    /// Prints its arguments to the context's output stream, separated by
    /// single spaces and terminated by a newline.
    Print {
        /// The argument expressions, in print order.
        args: Vec<Statement>,
    },
    /// Calls a method on an instance. Produces no value when the receiver is
    /// not an instance or has no matching method.
    MethodCall {
        /// The expression producing the receiver.
        object: Box<Statement>,
        /// The method name.
        method: String,
        /// The argument expressions, in call order.
        args:   Vec<Statement>,
    },
    /// Constructs a fresh instance of a class, running `__init__` when the
    /// class declares it with a matching arity.
    NewInstance {
        /// The class to instantiate.
        class: Rc<Class>,
        /// The constructor argument expressions.
        args:  Vec<Statement>,
    },
    /// Produces the printed form of its argument as a string value.
    Stringify {
        /// The expression to stringify.
        argument: Box<Statement>,
    },
    /// Addition of numbers, concatenation of strings, or `__add__` dispatch.
    Add {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// Subtraction of numbers.
    Sub {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// Multiplication of numbers.
    Mult {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// Integer division of numbers, truncating toward zero.
    Div {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// Logical disjunction. Both operands are evaluated unconditionally.
    Or {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// Logical conjunction. Both operands are evaluated unconditionally.
    And {
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// Logical negation of a boolean operand.
    Not {
        /// The operand.
        argument: Box<Statement>,
    },
    /// One of the six comparisons, producing a boolean.
    Comparison {
        /// The comparison operator.
        op:  ComparisonOp,
        /// Left operand.
        lhs: Box<Statement>,
        /// Right operand.
        rhs: Box<Statement>,
    },
    /// Conditional execution. The condition must produce a boolean.
    IfElse {
        /// The condition expression.
        condition: Box<Statement>,
        /// The branch taken when the condition holds.
        if_body:   Box<Statement>,
        /// The branch taken otherwise, when present.
        else_body: Option<Box<Statement>>,
    },
    /// Executes the contained statements in order. Produces no value.
    Compound {
        /// The statements, in execution order.
        statements: Vec<Statement>,
    },
    /// Transfers control out of the enclosing method, carrying a value.
    Return {
        /// The expression producing the returned value.
        statement: Box<Statement>,
    },
    /// Binds a class under its name in the current closure.
    ClassDefinition {
        /// The class being defined.
        class: Rc<Class>,
    },
    /// Wraps a method's body, resolving a nested `return` into the method's
    /// result.
    MethodBody {
        /// The wrapped body.
        body: Box<Statement>,
    },
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOp {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessOrEqual,
    /// Greater than or equal (`>=`)
    GreaterOrEqual,
}
