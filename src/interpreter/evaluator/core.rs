use std::{io::Write, rc::Rc};

use crate::{
    ast::{ComparisonOp, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, logic},
        value::{
            class::{Class, ClassInstance, INIT_METHOD},
            compare,
            core::{Closure, Value},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The per-execution context supplied by the host.
///
/// The context exposes exactly one capability: the byte sink that `print`
/// statements write to. It is threaded through every evaluation so that
/// nested method dispatch can reach the same stream.
pub struct Context<'a> {
    output: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    /// Creates a context writing to the given sink.
    pub fn new(output: &'a mut dyn Write) -> Self {
        Self { output }
    }

    /// The output stream that `print` statements append to.
    pub fn output_stream(&mut self) -> &mut dyn Write {
        &mut *self.output
    }
}

impl Statement {
    /// Executes the node against a closure and a context.
    ///
    /// This is the whole evaluator: each node variant implements its
    /// semantics here or in one of the helpers below. Nodes that produce a
    /// value return `Some`; pure statements return `None`. The empty result
    /// is distinct from producing the `None` value, even though both print
    /// the same way.
    ///
    /// # Parameters
    /// - `closure`: The scope the node reads and mutates.
    /// - `context`: Execution context supplying the output stream.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised by the node or its children. A `return`
    /// statement travels as [`RuntimeError::Return`] until the enclosing
    /// method body absorbs it.
    pub fn execute(&self, closure: &mut Closure, context: &mut Context) -> EvalResult<Option<Value>> {
        match self {
            Self::Const { value } => Ok(Some(value.clone())),

            Self::Assignment { var, rv } => {
                let value = rv.execute(closure, context)?.unwrap_or(Value::None);
                closure.insert(var.clone(), value.clone());
                Ok(Some(value))
            },

            Self::VariableValue { dotted_ids } => Ok(Some(resolve_variable(dotted_ids, closure)?)),

            Self::FieldAssignment { object,
                                    field_name,
                                    rv, } => {
                exec_field_assignment(object, field_name, rv, closure, context)
            },

            Self::Print { args } => exec_print(args, closure, context),

            Self::MethodCall { object, method, args } => {
                exec_method_call(object, method, args, closure, context)
            },

            Self::NewInstance { class, args } => exec_new_instance(class, args, closure, context),

            Self::Stringify { argument } => {
                let mut printed = String::new();
                print_result(&argument.execute(closure, context)?, &mut printed, context)?;
                Ok(Some(Value::String(printed)))
            },

            Self::Add { lhs, rhs } => {
                let (lhs, rhs) = eval_operands(lhs, rhs, closure, context)?;
                binary::eval_add(&lhs, &rhs, context)
            },

            Self::Sub { lhs, rhs } => {
                let (lhs, rhs) = eval_operands(lhs, rhs, closure, context)?;
                Ok(Some(binary::eval_sub(&lhs, &rhs)?))
            },

            Self::Mult { lhs, rhs } => {
                let (lhs, rhs) = eval_operands(lhs, rhs, closure, context)?;
                Ok(Some(binary::eval_mult(&lhs, &rhs)?))
            },

            Self::Div { lhs, rhs } => {
                let (lhs, rhs) = eval_operands(lhs, rhs, closure, context)?;
                Ok(Some(binary::eval_div(&lhs, &rhs)?))
            },

            Self::Or { lhs, rhs } => {
                let (lhs, rhs) = eval_operands(lhs, rhs, closure, context)?;
                Ok(Some(logic::eval_or(&lhs, &rhs, context)?))
            },

            Self::And { lhs, rhs } => {
                let (lhs, rhs) = eval_operands(lhs, rhs, closure, context)?;
                Ok(Some(logic::eval_and(&lhs, &rhs, context)?))
            },

            Self::Not { argument } => {
                let value = argument.execute(closure, context)?.unwrap_or(Value::None);
                Ok(Some(logic::eval_not(&value)?))
            },

            Self::Comparison { op, lhs, rhs } => {
                let (lhs, rhs) = eval_operands(lhs, rhs, closure, context)?;
                let result = match op {
                    ComparisonOp::Equal => compare::equal(&lhs, &rhs, context)?,
                    ComparisonOp::NotEqual => compare::not_equal(&lhs, &rhs, context)?,
                    ComparisonOp::Less => compare::less(&lhs, &rhs, context)?,
                    ComparisonOp::Greater => compare::greater(&lhs, &rhs, context)?,
                    ComparisonOp::LessOrEqual => compare::less_or_equal(&lhs, &rhs, context)?,
                    ComparisonOp::GreaterOrEqual => compare::greater_or_equal(&lhs, &rhs, context)?,
                };
                Ok(Some(Value::Bool(result)))
            },

            Self::IfElse { condition,
                           if_body,
                           else_body, } => {
                exec_if_else(condition, if_body, else_body.as_deref(), closure, context)
            },

            Self::Compound { statements } => {
                for statement in statements {
                    statement.execute(closure, context)?;
                }
                Ok(None)
            },

            Self::Return { statement } => {
                Err(RuntimeError::Return { value: statement.execute(closure, context)? })
            },

            Self::ClassDefinition { class } => {
                let value = Value::Class(Rc::clone(class));
                closure.insert(class.name().to_string(), value.clone());
                Ok(Some(value))
            },

            Self::MethodBody { body } => match body.execute(closure, context) {
                Ok(_) => Ok(None),
                Err(RuntimeError::Return { value }) => Ok(value),
                Err(error) => Err(error),
            },
        }
    }
}

/// Resolves a dotted identifier chain: the first identifier in the closure,
/// every further one in the field map of the instance reached so far.
fn resolve_variable(dotted_ids: &[String], closure: &Closure) -> EvalResult<Value> {
    let Some((first, fields)) = dotted_ids.split_first() else {
        return Err(RuntimeError::UndefinedName { name: String::new() });
    };
    let mut value = match closure.get(first) {
        Some(value) => value.clone(),
        None => return Err(RuntimeError::UndefinedName { name: first.clone() }),
    };
    for field in fields {
        let instance = match &value {
            Value::Instance(instance) => Rc::clone(instance),
            other => {
                return Err(RuntimeError::TypeMismatch { details:
                               format!("Cannot read field '{field}' of {}", other.kind_name()), });
            },
        };
        let looked_up = instance.fields().get(field).cloned();
        value = looked_up.ok_or_else(|| RuntimeError::UndefinedName { name: field.clone() })?;
    }
    Ok(value)
}

fn exec_field_assignment(object: &Statement,
                         field_name: &str,
                         rv: &Statement,
                         closure: &mut Closure,
                         context: &mut Context)
                         -> EvalResult<Option<Value>> {
    let target = object.execute(closure, context)?.unwrap_or(Value::None);
    let instance = match &target {
        Value::Instance(instance) => Rc::clone(instance),
        other => {
            return Err(RuntimeError::TypeMismatch { details:
                           format!("Cannot assign field '{field_name}' on {}",
                                   other.kind_name()), });
        },
    };
    let value = rv.execute(closure, context)?.unwrap_or(Value::None);
    instance.fields_mut().insert(field_name.to_string(), value.clone());
    Ok(Some(value))
}

/// Assembles the printed line in one buffer, writes it to the context's
/// output stream, and yields the same text as a string value.
fn exec_print(args: &[Statement],
              closure: &mut Closure,
              context: &mut Context)
              -> EvalResult<Option<Value>> {
    let mut output = String::new();
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            output.push(' ');
        }
        print_result(&arg.execute(closure, context)?, &mut output, context)?;
    }
    output.push('\n');
    context.output_stream()
           .write_all(output.as_bytes())
           .map_err(|error| RuntimeError::OutputFailed { details: error.to_string() })?;
    Ok(Some(Value::String(output)))
}

/// Appends the printed form of an execution result, where the empty result
/// prints like the `None` value.
fn print_result(result: &Option<Value>,
                out: &mut String,
                context: &mut Context)
                -> EvalResult<()> {
    match result {
        Some(value) => value.print(out, context),
        None => {
            out.push_str("None");
            Ok(())
        },
    }
}

/// Dispatches a method call, or quietly produces nothing when the receiver
/// is not an instance or has no method matching both name and arity.
/// Arguments are evaluated only once the dispatch is known to go ahead.
fn exec_method_call(object: &Statement,
                    method: &str,
                    args: &[Statement],
                    closure: &mut Closure,
                    context: &mut Context)
                    -> EvalResult<Option<Value>> {
    let Some(Value::Instance(instance)) = object.execute(closure, context)? else {
        return Ok(None);
    };
    if !instance.has_method(method, args.len()) {
        return Ok(None);
    }
    let actual_args = eval_arguments(args, closure, context)?;
    instance.call(method, &actual_args, context)
}

fn exec_new_instance(class: &Rc<Class>,
                     args: &[Statement],
                     closure: &mut Closure,
                     context: &mut Context)
                     -> EvalResult<Option<Value>> {
    let instance = Rc::new(ClassInstance::new(Rc::clone(class)));
    if instance.has_method(INIT_METHOD, args.len()) {
        let actual_args = eval_arguments(args, closure, context)?;
        instance.call(INIT_METHOD, &actual_args, context)?;
    }
    Ok(Some(Value::Instance(instance)))
}

fn eval_arguments(args: &[Statement],
                  closure: &mut Closure,
                  context: &mut Context)
                  -> EvalResult<Vec<Value>> {
    let mut actual_args = Vec::with_capacity(args.len());
    for arg in args {
        actual_args.push(arg.execute(closure, context)?.unwrap_or(Value::None));
    }
    Ok(actual_args)
}

/// The condition must produce a boolean. Anything else, including a
/// condition producing nothing, is an error rather than silent truthiness.
fn exec_if_else(condition: &Statement,
                if_body: &Statement,
                else_body: Option<&Statement>,
                closure: &mut Closure,
                context: &mut Context)
                -> EvalResult<Option<Value>> {
    let condition = condition.execute(closure, context)?;
    let Some(Value::Bool(condition)) = condition else {
        return Err(RuntimeError::TypeMismatch { details:
                       "An if condition must produce a boolean".to_string(), });
    };
    if condition {
        if_body.execute(closure, context)
    } else if let Some(else_body) = else_body {
        else_body.execute(closure, context)
    } else {
        Ok(None)
    }
}

fn eval_operands(lhs: &Statement,
                 rhs: &Statement,
                 closure: &mut Closure,
                 context: &mut Context)
                 -> EvalResult<(Value, Value)> {
    let lhs = lhs.execute(closure, context)?.unwrap_or(Value::None);
    let rhs = rhs.execute(closure, context)?.unwrap_or(Value::None);
    Ok((lhs, rhs))
}
