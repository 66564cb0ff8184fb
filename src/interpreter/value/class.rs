use std::{
    cell::{Ref, RefCell, RefMut},
    rc::{Rc, Weak},
};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Closure, Value},
    },
};

/// The method dispatched when an instance is constructed.
pub const INIT_METHOD: &str = "__init__";
/// The method dispatched when an instance is printed.
pub const STR_METHOD: &str = "__str__";
/// The method dispatched when an instance is the left operand of `+`.
pub const ADD_METHOD: &str = "__add__";
/// The method dispatched when an instance is compared for equality.
pub const EQ_METHOD: &str = "__eq__";
/// The method dispatched when an instance is compared for ordering.
pub const LT_METHOD: &str = "__lt__";

/// A single method of a class.
///
/// The formal parameter list excludes `self`: a method declared as
/// `def f(self, x)` has one formal parameter, so its arity matches the
/// argument count at call sites.
#[derive(Debug)]
pub struct Method {
    /// The method's name.
    pub name:          String,
    /// The names of the formal parameters, in declaration order.
    pub formal_params: Vec<String>,
    /// The method's body, wrapped so that a nested `return` resolves here.
    pub body:          Statement,
}

/// A class declared by a `class` definition.
///
/// The parent pointer is weak: a child class does not keep its parent alive.
/// The parent is owned by its own definition statement, which the program
/// holds for as long as the child can be used.
#[derive(Debug)]
pub struct Class {
    name:    String,
    methods: Vec<Rc<Method>>,
    parent:  Option<Weak<Class>>,
}

impl Class {
    /// Creates a class from its name, methods, and optional base class.
    #[must_use]
    pub fn new(name: String, methods: Vec<Rc<Method>>, parent: Option<&Rc<Self>>) -> Self {
        Self { name,
               methods,
               parent: parent.map(Rc::downgrade) }
    }

    /// The class's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a method by name, walking the inheritance chain.
    ///
    /// The receiver's own methods are searched first, then the parent's, and
    /// so on; the first method with a matching name wins. Arity plays no part
    /// in lookup and is only checked at call time.
    #[must_use]
    pub fn get_method(&self, name: &str) -> Option<Rc<Method>> {
        if let Some(method) = self.methods.iter().find(|method| method.name == name) {
            return Some(Rc::clone(method));
        }
        self.parent
            .as_ref()
            .and_then(Weak::upgrade)
            .and_then(|parent| parent.get_method(name))
    }

    /// Reports whether lookup of `name` finds a method declaring exactly
    /// `argument_count` formal parameters.
    #[must_use]
    pub fn has_method(&self, name: &str, argument_count: usize) -> bool {
        self.get_method(name)
            .is_some_and(|method| method.formal_params.len() == argument_count)
    }
}

/// A live object: a reference to its class plus a mutable field map.
///
/// Fields are created on first assignment; reading a field that was never
/// assigned is an error. The field map lives exactly as long as the instance.
#[derive(Debug)]
pub struct ClassInstance {
    class:  Rc<Class>,
    fields: RefCell<Closure>,
}

impl ClassInstance {
    /// Creates a fresh instance of `class` with an empty field map.
    #[must_use]
    pub fn new(class: Rc<Class>) -> Self {
        Self { class,
               fields: RefCell::new(Closure::new()) }
    }

    /// The class this instance was constructed from.
    #[must_use]
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Borrows the instance's field map for reading.
    pub fn fields(&self) -> Ref<'_, Closure> {
        self.fields.borrow()
    }

    /// Borrows the instance's field map for writing.
    pub fn fields_mut(&self) -> RefMut<'_, Closure> {
        self.fields.borrow_mut()
    }

    /// Reports whether this instance can answer `name` with exactly
    /// `argument_count` arguments.
    #[must_use]
    pub fn has_method(&self, name: &str, argument_count: usize) -> bool {
        self.class.has_method(name, argument_count)
    }

    /// Invokes a method on this instance.
    ///
    /// A fresh closure is populated with the formal parameters bound to
    /// `actual_args` plus `self` bound to the receiver, and the method body
    /// is executed against it.
    ///
    /// # Parameters
    /// - `method_name`: Name of the method to dispatch.
    /// - `actual_args`: Evaluated argument values, in call order.
    /// - `context`: Execution context supplying the output stream.
    ///
    /// # Returns
    /// The value produced by the method's `return` statement, or `None` when
    /// the body finished without returning.
    ///
    /// # Errors
    /// - `UndefinedName` if no method with that name exists on the chain.
    /// - `ArityMismatch` if the argument count differs from the method's
    ///   formal parameter count.
    pub fn call(self: &Rc<Self>,
                method_name: &str,
                actual_args: &[Value],
                context: &mut Context)
                -> EvalResult<Option<Value>> {
        let Some(method) = self.class.get_method(method_name) else {
            return Err(RuntimeError::UndefinedName { name: method_name.to_string() });
        };
        if method.formal_params.len() != actual_args.len() {
            return Err(RuntimeError::ArityMismatch { expected: method.formal_params.len(),
                                                     found:    actual_args.len(), });
        }

        let mut frame = Closure::new();
        for (param, value) in method.formal_params.iter().zip(actual_args) {
            frame.insert(param.clone(), value.clone());
        }
        frame.insert("self".to_string(), Value::Instance(Rc::clone(self)));

        method.body.execute(&mut frame, context)
    }
}
