use std::fmt;
use std::rc::Rc;

use crate::ast::Literal;
use crate::eval::{EvalErr, EvalResult, Evaluator};

/// Anything that can sit in operator position and be applied to values.
pub trait Callable {
    fn call(&self, evaluator: &Evaluator, args: &[Value]) -> EvalResult;
    /// Number of arguments expected, `None` when variadic.
    fn arity(&self) -> Option<usize>;
    fn id(&self) -> String;
}

#[derive(Clone)]
pub enum Value {
    Str(String),
    Num(f64),
    Bool(bool),
    Callable(Rc<dyn Callable>),
}

impl Value {
    /// Only the boolean `false` is falsy.
    pub fn is_false(&self) -> bool {
        matches!(self, Value::Bool(false))
    }

    pub fn num(&self) -> Result<f64, EvalErr> {
        match self {
            Value::Num(n) => Ok(*n),
            other => Err(EvalErr::Type(format!("expected a number, found {}", other))),
        }
    }

    pub fn callable<C: Callable + 'static>(c: C) -> Value {
        Value::Callable(Rc::new(c))
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Value {
        match literal {
            Literal::Str(s) => Value::Str(s.clone()),
            Literal::Num(n) => Value::Num(*n),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Str(l), Value::Str(r)) => l == r,
            (Value::Num(l), Value::Num(r)) => l == r,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Callable(l), Value::Callable(r)) => Rc::ptr_eq(l, r),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Num(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Callable(c) => write!(f, "<fn {}>", c.id()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s),
            other => write!(f, "{}", other),
        }
    }
}

pub type NativeFn = fn(&[Value]) -> EvalResult;

/// A host function exposed to egg programs.
pub struct Native {
    name: &'static str,
    arity: Option<usize>,
    f: NativeFn,
}

impl Native {
    pub fn new(name: &'static str, arity: Option<usize>, f: NativeFn) -> Native {
        Native { name, arity, f }
    }
}

impl Callable for Native {
    fn call(&self, _: &Evaluator, args: &[Value]) -> EvalResult {
        (self.f)(args)
    }
    fn arity(&self) -> Option<usize> { self.arity }
    fn id(&self) -> String { self.name.to_string() }
}
