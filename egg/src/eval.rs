use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use tracing::trace;

use crate::ast::Node;
use crate::forms::SpecialForms;
use crate::parser::{parse, ParseError};
use crate::scope::Scope;
use crate::stack::ensure_sufficient_stack;
use crate::value::{Callable, Value};

pub const DEFAULT_MAX_DEPTH: usize = 2048;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum EvalErr {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Misuse of a special form, eg: wrong number of arguments.
    #[error("{0}")]
    Syntax(String),
    #[error("Undefined binding: {0}")]
    UndefinedBinding(String),
    #[error("Applying a non-function: {0}")]
    NotCallable(String),
    #[error("{callee} expects {expected} arguments, got {got}")]
    Arity { callee: String, expected: usize, got: usize },
    #[error("{0}")]
    Type(String),
    #[error("Maximum evaluation depth of {0} exceeded")]
    RecursionLimitExceeded(usize),
}

impl EvalErr {
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, EvalErr::Parse(_) | EvalErr::Syntax(_))
    }
}

pub type EvalResult = Result<Value, EvalErr>;

/// Walks a tree against a scope. Special forms are looked up in the table
/// it was built with before the operator of an application is evaluated.
pub struct Evaluator<'f> {
    forms: &'f SpecialForms,
    max_depth: usize,
    depth: Cell<usize>,
}

impl<'f> Evaluator<'f> {
    pub fn new(forms: &'f SpecialForms) -> Self {
        Evaluator { forms, max_depth: DEFAULT_MAX_DEPTH, depth: Cell::new(0) }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn forms(&self) -> &SpecialForms {
        self.forms
    }

    pub fn eval(&self, node: &Node, scope: &Rc<Scope>) -> EvalResult {
        let depth = self.depth.get() + 1;
        if depth > self.max_depth {
            return Err(EvalErr::RecursionLimitExceeded(self.max_depth));
        }
        self.depth.set(depth);
        let result = ensure_sufficient_stack(|| self.eval_node(node, scope));
        self.depth.set(depth - 1);
        result
    }

    fn eval_node(&self, node: &Node, scope: &Rc<Scope>) -> EvalResult {
        match node {
            Node::Value(literal) => Ok(Value::from(literal)),
            Node::Word(name) => scope
                .get(name)
                .ok_or_else(|| EvalErr::UndefinedBinding(name.clone())),
            Node::Apply { operator, args } => {
                if let Node::Word(name) = operator.as_ref() {
                    if let Some(form) = self.forms.get(name) {
                        trace!(form = %name, nargs = args.len(), "special form");
                        return form(self, args, scope);
                    }
                }
                let op = self.eval(operator, scope)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg, scope))
                    .collect::<Result<Vec<_>, _>>()?;
                match op {
                    Value::Callable(callee) => self.apply(callee.as_ref(), &args),
                    other => Err(EvalErr::NotCallable(format!("{:?}", other))),
                }
            }
        }
    }

    /// Invokes `callee` after checking the number of arguments it takes.
    pub fn apply(&self, callee: &dyn Callable, args: &[Value]) -> EvalResult {
        if let Some(expected) = callee.arity() {
            if expected != args.len() {
                return Err(EvalErr::Arity { callee: callee.id(), expected, got: args.len() });
            }
        }
        trace!(callee = %callee.id(), nargs = args.len(), "apply");
        callee.call(self, args)
    }
}

/// Evaluates `node` with the standard special forms.
pub fn evaluate(node: &Node, scope: &Rc<Scope>) -> EvalResult {
    Evaluator::new(SpecialForms::shared()).eval(node, scope)
}

/// Parses and evaluates `source` with the standard special forms.
pub fn run(source: &str, scope: &Rc<Scope>) -> EvalResult {
    let program = parse(source)?;
    evaluate(&program, scope)
}
