mod ast;
mod builtins;
mod eval;
mod forms;
mod parser;
mod scope;
mod stack;
mod value;

pub use ast::{Literal, Node};
pub use builtins::global_scope;
pub use eval::{evaluate, run, EvalErr, EvalResult, Evaluator, DEFAULT_MAX_DEPTH};
pub use forms::{Closure, Form, SpecialForms};
pub use parser::{parse, ParseError, ParseResult, Parser};
pub use scope::Scope;
pub use value::{Callable, Native, NativeFn, Value};

#[cfg(test)]
mod parser_test;
