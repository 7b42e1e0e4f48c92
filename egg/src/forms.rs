use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::OnceLock;

use crate::ast::Node;
use crate::eval::{EvalErr, EvalResult, Evaluator};
use crate::scope::Scope;
use crate::value::{Callable, Value};

/// A special form receives its arguments unevaluated and decides what to
/// evaluate, in which order and how many times.
pub type Form = fn(&Evaluator, &[Node], &Rc<Scope>) -> EvalResult;

macro_rules! check {
    ($argcheck:expr, $msg:expr) => {
        if !$argcheck {
            return Err(EvalErr::Syntax($msg.to_string()));
        }
    };
}

/// Table of reserved words. Built up front and read-only once an evaluator
/// borrows it.
#[derive(Clone, Default)]
pub struct SpecialForms {
    forms: HashMap<String, Form>,
}

impl fmt::Debug for SpecialForms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl SpecialForms {
    pub fn empty() -> Self {
        SpecialForms::default()
    }

    /// `if` and `while`.
    pub fn core() -> Self {
        SpecialForms::empty()
            .with("if", eval_if)
            .with("while", eval_while)
    }

    /// The core forms plus `do`, `define`, `set` and `fun`.
    pub fn standard() -> Self {
        SpecialForms::core()
            .with("do", eval_do)
            .with("define", eval_define)
            .with("set", eval_set)
            .with("fun", eval_fun)
    }

    /// Standard table, built on first use and shared by the whole process.
    pub fn shared() -> &'static SpecialForms {
        static SHARED: OnceLock<SpecialForms> = OnceLock::new();
        SHARED.get_or_init(SpecialForms::standard)
    }

    pub fn with<S: Into<String>>(mut self, name: S, form: Form) -> Self {
        self.forms.insert(name.into(), form);
        self
    }

    pub fn get(&self, name: &str) -> Option<Form> {
        self.forms.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.forms.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.forms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn eval_if(ev: &Evaluator, args: &[Node], scope: &Rc<Scope>) -> EvalResult {
    check!(args.len() == 3, "Wrong number of args to if");
    let (test, conseq, alt) = (&args[0], &args[1], &args[2]);
    if ev.eval(test, scope)?.is_false() {
        ev.eval(alt, scope)
    } else {
        ev.eval(conseq, scope)
    }
}

// there's no unit value, a loop always yields false
fn eval_while(ev: &Evaluator, args: &[Node], scope: &Rc<Scope>) -> EvalResult {
    check!(args.len() == 2, "Wrong number of args");
    while !ev.eval(&args[0], scope)?.is_false() {
        ev.eval(&args[1], scope)?;
    }
    Ok(Value::Bool(false))
}

fn eval_do(ev: &Evaluator, args: &[Node], scope: &Rc<Scope>) -> EvalResult {
    let mut value = Value::Bool(false);
    for arg in args {
        value = ev.eval(arg, scope)?;
    }
    Ok(value)
}

fn eval_define(ev: &Evaluator, args: &[Node], scope: &Rc<Scope>) -> EvalResult {
    match args {
        [Node::Word(name), expr] => {
            let value = ev.eval(expr, scope)?;
            scope.define(name.clone(), value.clone());
            Ok(value)
        }
        _ => Err(EvalErr::Syntax("Incorrect use of define".to_string())),
    }
}

fn eval_set(ev: &Evaluator, args: &[Node], scope: &Rc<Scope>) -> EvalResult {
    match args {
        [Node::Word(name), expr] => {
            let value = ev.eval(expr, scope)?;
            if !scope.assign(name, value.clone()) {
                return Err(EvalErr::UndefinedBinding(name.clone()));
            }
            Ok(value)
        }
        _ => Err(EvalErr::Syntax("Incorrect use of set".to_string())),
    }
}

fn eval_fun(_: &Evaluator, args: &[Node], scope: &Rc<Scope>) -> EvalResult {
    let (body, params) = match args.split_last() {
        Some(split) => split,
        None => return Err(EvalErr::Syntax("Functions need a body".to_string())),
    };
    let mut names = Vec::with_capacity(params.len());
    for param in params {
        match param {
            Node::Word(name) => names.push(name.clone()),
            _ => return Err(EvalErr::Syntax("Parameter names must be words".to_string())),
        }
    }
    Ok(Value::callable(Closure {
        params: names,
        body: body.clone(),
        scope: scope.clone(),
    }))
}

/// User function created by `fun`, closing over the scope it was made in.
pub struct Closure {
    params: Vec<String>,
    body: Node,
    scope: Rc<Scope>,
}

impl Callable for Closure {
    fn call(&self, evaluator: &Evaluator, args: &[Value]) -> EvalResult {
        let bindings = self.params.iter().cloned().zip(args.iter().cloned());
        let local = Scope::with_bindings(bindings, Some(self.scope.clone()));
        evaluator.eval(&self.body, &Rc::new(local))
    }

    fn arity(&self) -> Option<usize> {
        Some(self.params.len())
    }

    fn id(&self) -> String {
        format!("fun({})", self.params.join(", "))
    }
}
