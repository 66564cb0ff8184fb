use std::{collections::HashMap, rc::Rc};

use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::class::{Class, ClassInstance, STR_METHOD},
};

/// A mapping from identifier names to runtime values.
///
/// A closure represents one lexical scope of bindings: the program's global
/// scope, or the frame of a single method call. Nested statement bodies share
/// the closure of their enclosing scope, since the language has no block
/// scoping.
pub type Closure = HashMap<String, Value>;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, method returns, and conditional evaluations. Heap-allocated
/// values (classes and their instances) are held through shared ownership, so
/// cloning a `Value` is cheap and never copies an object.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value. Prints as `None` and is equal only to itself.
    None,
    /// A boolean value. Prints as `True` or `False`.
    Bool(bool),
    /// A signed 64-bit integer value.
    Number(i64),
    /// An immutable string value.
    String(String),
    /// A class declared by a `class` definition.
    Class(Rc<Class>),
    /// A live instance of a class, with its own field map.
    Instance(Rc<ClassInstance>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Rc<Class>> for Value {
    fn from(v: Rc<Class>) -> Self {
        Self::Class(v)
    }
}

impl From<Rc<ClassInstance>> for Value {
    fn from(v: Rc<ClassInstance>) -> Self {
        Self::Instance(v)
    }
}

impl Value {
    /// Returns the boolean carried by the value, or `None` if it is not a
    /// boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer carried by the value, or `None` if it is not a
    /// number.
    ///
    /// # Example
    /// ```
    /// use mython::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(42).as_number(), Some(42));
    /// assert_eq!(Value::Bool(true).as_number(), None);
    /// ```
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string carried by the value, or `None` if it is not a
    /// string.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the class carried by the value, or `None` if it is not a
    /// class.
    #[must_use]
    pub const fn as_class(&self) -> Option<&Rc<Class>> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Returns the instance carried by the value, or `None` if it is not a
    /// class instance.
    #[must_use]
    pub const fn as_instance(&self) -> Option<&Rc<ClassInstance>> {
        match self {
            Self::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Reports whether the value counts as true in a condition.
    ///
    /// Booleans are their own truth value, numbers are true when non-zero,
    /// strings are true when non-empty. Everything else (`None`, classes,
    /// and instances) counts as false.
    ///
    /// # Example
    /// ```
    /// use mython::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(-1).is_truthy());
    /// assert!(Value::String("x".to_string()).is_truthy());
    /// assert!(!Value::String(String::new()).is_truthy());
    /// assert!(!Value::None.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0,
            Self::String(s) => !s.is_empty(),
            _ => false,
        }
    }

    /// Gives a short human-readable name for the value's kind, for use in
    /// diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bool(_) => "a boolean",
            Self::Number(_) => "a number",
            Self::String(_) => "a string",
            Self::Class(_) => "a class",
            Self::Instance(_) => "a class instance",
        }
    }

    /// Appends the printed form of the value to `out`.
    ///
    /// Printing an instance may execute its `__str__` method, which is why
    /// this operation needs the execution context and can fail. An instance
    /// without a zero-argument `__str__` prints as an opaque address-like
    /// identifier.
    ///
    /// # Parameters
    /// - `out`: Buffer receiving the printed text.
    /// - `context`: Execution context used when `__str__` is dispatched.
    pub fn print(&self, out: &mut String, context: &mut Context) -> EvalResult<()> {
        match self {
            Self::None => out.push_str("None"),
            Self::Bool(b) => out.push_str(if *b { "True" } else { "False" }),
            Self::Number(n) => out.push_str(&n.to_string()),
            Self::String(s) => out.push_str(s),
            Self::Class(class) => {
                out.push_str("Class ");
                out.push_str(class.name());
            },
            Self::Instance(instance) => {
                if instance.has_method(STR_METHOD, 0) {
                    match instance.call(STR_METHOD, &[], context)? {
                        Some(value) => value.print(out, context)?,
                        None => out.push_str("None"),
                    }
                } else {
                    out.push_str(&format!("{:p}", Rc::as_ptr(instance)));
                }
            },
        }
        Ok(())
    }
}

impl PartialEq for Value {
    /// Structural equality for primitives, identity for classes and
    /// instances. Language-level equality, which may dispatch `__eq__`, lives
    /// in the comparison module instead.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Class(a), Self::Class(b)) => Rc::ptr_eq(a, b),
            (Self::Instance(a), Self::Instance(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
