use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            class::{EQ_METHOD, LT_METHOD},
            core::Value,
        },
    },
};

/// Compares two values for equality.
///
/// The cascade mirrors the language rules:
/// 1. Two `None` values are equal.
/// 2. Two booleans, two numbers, or two strings compare by value.
/// 3. A class instance whose class answers `__eq__` with one argument
///    dispatches that method; its boolean result is the answer.
/// 4. Every other combination is a type mismatch.
///
/// # Parameters
/// - `lhs`: Left operand.
/// - `rhs`: Right operand.
/// - `context`: Execution context used when `__eq__` is dispatched.
///
/// # Returns
/// `true` when the operands are equal under the rules above.
///
/// # Errors
/// `TypeMismatch` when no rule applies, or when a user-defined `__eq__` does
/// not produce a boolean.
pub fn equal(lhs: &Value, rhs: &Value, context: &mut Context) -> EvalResult<bool> {
    match (lhs, rhs) {
        (Value::None, Value::None) => Ok(true),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Number(a), Value::Number(b)) => Ok(a == b),
        (Value::String(a), Value::String(b)) => Ok(a == b),
        (Value::Instance(instance), _) if instance.has_method(EQ_METHOD, 1) => {
            match instance.call(EQ_METHOD, &[rhs.clone()], context)? {
                Some(Value::Bool(result)) => Ok(result),
                _ => Err(RuntimeError::TypeMismatch { details:
                             "'__eq__' did not produce a boolean".to_string(), }),
            }
        },
        _ => Err(RuntimeError::TypeMismatch { details:
                     format!("Cannot compare {} and {} for equality",
                             lhs.kind_name(),
                             rhs.kind_name()), }),
    }
}

/// Compares two values for strict ordering.
///
/// Booleans, numbers, and strings use their natural `<`. A class instance
/// whose class answers `__lt__` with one argument dispatches that method.
/// There is no ordering between different kinds.
///
/// # Errors
/// `TypeMismatch` when no rule applies, or when a user-defined `__lt__` does
/// not produce a boolean.
pub fn less(lhs: &Value, rhs: &Value, context: &mut Context) -> EvalResult<bool> {
    match (lhs, rhs) {
        (Value::Bool(a), Value::Bool(b)) => Ok(a < b),
        (Value::Number(a), Value::Number(b)) => Ok(a < b),
        (Value::String(a), Value::String(b)) => Ok(a < b),
        (Value::Instance(instance), _) if instance.has_method(LT_METHOD, 1) => {
            match instance.call(LT_METHOD, &[rhs.clone()], context)? {
                Some(Value::Bool(result)) => Ok(result),
                _ => Err(RuntimeError::TypeMismatch { details:
                             "'__lt__' did not produce a boolean".to_string(), }),
            }
        },
        _ => Err(RuntimeError::TypeMismatch { details: format!("Cannot order {} and {}",
                                                               lhs.kind_name(),
                                                               rhs.kind_name()), }),
    }
}

/// The negation of [`equal`].
pub fn not_equal(lhs: &Value, rhs: &Value, context: &mut Context) -> EvalResult<bool> {
    Ok(!equal(lhs, rhs, context)?)
}

/// Derived ordering: neither less than nor equal.
///
/// Note that this may evaluate both [`less`] and [`equal`], so a user-defined
/// `__lt__` or `__eq__` can run twice across one comparison chain. The
/// observable result matches the derived definition.
pub fn greater(lhs: &Value, rhs: &Value, context: &mut Context) -> EvalResult<bool> {
    Ok(!less(lhs, rhs, context)? && !equal(lhs, rhs, context)?)
}

/// Derived ordering: less than or equal.
pub fn less_or_equal(lhs: &Value, rhs: &Value, context: &mut Context) -> EvalResult<bool> {
    Ok(less(lhs, rhs, context)? || equal(lhs, rhs, context)?)
}

/// Derived ordering: the negation of [`less`].
pub fn greater_or_equal(lhs: &Value, rhs: &Value, context: &mut Context) -> EvalResult<bool> {
    Ok(!less(lhs, rhs, context)?)
}
