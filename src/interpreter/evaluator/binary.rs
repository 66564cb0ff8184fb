use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{class::ADD_METHOD, core::Value},
    },
};

/// Evaluates `lhs + rhs`.
///
/// Numbers add, strings concatenate, and a class instance on the left
/// dispatches its single-argument `__add__`. Every other combination is a
/// type mismatch. The dispatch is why this operation, unlike the other
/// three, needs the execution context and can produce an arbitrary value.
///
/// # Parameters
/// - `lhs`: Left operand.
/// - `rhs`: Right operand.
/// - `context`: Execution context used when `__add__` is dispatched.
pub(crate) fn eval_add(lhs: &Value, rhs: &Value, context: &mut Context)
                       -> EvalResult<Option<Value>> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Some(Value::Number(a + b))),
        (Value::String(a), Value::String(b)) => Ok(Some(Value::String(format!("{a}{b}")))),
        (Value::Instance(instance), _) => {
            if instance.has_method(ADD_METHOD, 1) {
                instance.call(ADD_METHOD, &[rhs.clone()], context)
            } else {
                Err(add_mismatch(lhs, rhs))
            }
        },
        _ => Err(add_mismatch(lhs, rhs)),
    }
}

fn add_mismatch(lhs: &Value, rhs: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("Cannot add {} and {}",
                                                  lhs.kind_name(),
                                                  rhs.kind_name()), }
}

/// Evaluates `lhs - rhs` over numbers.
pub(crate) fn eval_sub(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
        _ => Err(RuntimeError::TypeMismatch { details: format!("Cannot subtract {} from {}",
                                                               rhs.kind_name(),
                                                               lhs.kind_name()), }),
    }
}

/// Evaluates `lhs * rhs` over numbers.
pub(crate) fn eval_mult(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
        _ => Err(RuntimeError::TypeMismatch { details: format!("Cannot multiply {} and {}",
                                                               lhs.kind_name(),
                                                               rhs.kind_name()), }),
    }
}

/// Evaluates `lhs / rhs` over numbers, truncating toward zero. Division by
/// zero is checked explicitly.
pub(crate) fn eval_div(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => {
            if *b == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Number(a / b))
            }
        },
        _ => Err(RuntimeError::TypeMismatch { details: format!("Cannot divide {} by {}",
                                                               lhs.kind_name(),
                                                               rhs.kind_name()), }),
    }
}
