use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{compare, core::Value},
    },
};

/// Evaluates a logical disjunction over two already-evaluated operands.
///
/// Each operand is tested by comparing it for equality with `True`, so a
/// non-boolean operand fails with a type mismatch even when the other
/// operand would already decide the result. Both sides of `or` and `and`
/// are always evaluated and always checked.
pub(crate) fn eval_or(lhs: &Value, rhs: &Value, context: &mut Context) -> EvalResult<Value> {
    let lhs_true = compare::equal(lhs, &Value::Bool(true), context)?;
    let rhs_true = compare::equal(rhs, &Value::Bool(true), context)?;
    Ok(Value::Bool(lhs_true || rhs_true))
}

/// Evaluates a logical conjunction over two already-evaluated operands.
pub(crate) fn eval_and(lhs: &Value, rhs: &Value, context: &mut Context) -> EvalResult<Value> {
    let lhs_true = compare::equal(lhs, &Value::Bool(true), context)?;
    let rhs_true = compare::equal(rhs, &Value::Bool(true), context)?;
    Ok(Value::Bool(lhs_true && rhs_true))
}

/// Negates a boolean operand. Anything but a boolean is a type mismatch.
pub(crate) fn eval_not(argument: &Value) -> EvalResult<Value> {
    match argument {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        other => Err(RuntimeError::TypeMismatch { details: format!("Cannot negate {}",
                                                                   other.kind_name()), }),
    }
}
