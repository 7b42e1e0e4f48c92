use std::cmp::Ordering;
use std::rc::Rc;

use crate::eval::{EvalErr, EvalResult};
use crate::scope::Scope;
use crate::value::{Native, NativeFn, Value};

fn type_err(op: &str, lhs: &Value, rhs: &Value) -> EvalErr {
    EvalErr::Type(format!("can't {:?} {} {:?}", lhs, op, rhs))
}

// natives can be called directly, bypassing Evaluator::apply's arity check
fn operands<'a>(op: &str, args: &'a [Value]) -> Result<(&'a Value, &'a Value), EvalErr> {
    match args {
        [l, r] => Ok((l, r)),
        _ => Err(EvalErr::Arity { callee: op.to_string(), expected: 2, got: args.len() }),
    }
}

fn numbers(op: &str, args: &[Value]) -> Result<(f64, f64), EvalErr> {
    let (l, r) = operands(op, args)?;
    Ok((l.num()?, r.num()?))
}

fn plus(args: &[Value]) -> EvalResult {
    match operands("+", args)? {
        (Value::Num(l), Value::Num(r)) => Ok(Value::Num(l + r)),
        (Value::Str(l), other) => Ok(Value::Str(format!("{}{}", l, other))),
        (other, Value::Str(r)) => Ok(Value::Str(format!("{}{}", other, r))),
        (l, r) => Err(type_err("+", l, r)),
    }
}

fn minus(args: &[Value]) -> EvalResult {
    let (l, r) = numbers("-", args)?;
    Ok(Value::Num(l - r))
}

fn times(args: &[Value]) -> EvalResult {
    let (l, r) = numbers("*", args)?;
    Ok(Value::Num(l * r))
}

fn divide(args: &[Value]) -> EvalResult {
    let (l, r) = numbers("/", args)?;
    Ok(Value::Num(l / r))
}

fn modulo(args: &[Value]) -> EvalResult {
    let (l, r) = numbers("%", args)?;
    Ok(Value::Num(l % r))
}

fn eq(args: &[Value]) -> EvalResult {
    let (l, r) = operands("==", args)?;
    Ok(Value::Bool(l == r))
}

fn ne(args: &[Value]) -> EvalResult {
    let (l, r) = operands("!=", args)?;
    Ok(Value::Bool(l != r))
}

// numbers compare numerically, strings lexicographically, NaN is unordered
fn compare(op: &str, args: &[Value]) -> Result<Option<Ordering>, EvalErr> {
    match operands(op, args)? {
        (Value::Num(l), Value::Num(r)) => Ok(l.partial_cmp(r)),
        (Value::Str(l), Value::Str(r)) => Ok(Some(l.cmp(r))),
        (l, r) => Err(type_err(op, l, r)),
    }
}

fn lt(args: &[Value]) -> EvalResult {
    Ok(Value::Bool(compare("<", args)?.map_or(false, Ordering::is_lt)))
}

fn gt(args: &[Value]) -> EvalResult {
    Ok(Value::Bool(compare(">", args)?.map_or(false, Ordering::is_gt)))
}

fn le(args: &[Value]) -> EvalResult {
    Ok(Value::Bool(compare("<=", args)?.map_or(false, Ordering::is_le)))
}

fn ge(args: &[Value]) -> EvalResult {
    Ok(Value::Bool(compare(">=", args)?.map_or(false, Ordering::is_ge)))
}

fn print(args: &[Value]) -> EvalResult {
    match args {
        [value] => {
            println!("{}", value);
            Ok(value.clone())
        }
        _ => Err(EvalErr::Arity { callee: "print".to_string(), expected: 1, got: args.len() }),
    }
}

/// Scope preloaded with booleans, arithmetic, comparisons and `print`.
pub fn global_scope() -> Rc<Scope> {
    let scope = Scope::new();
    scope.define("true", Value::Bool(true));
    scope.define("false", Value::Bool(false));
    let natives: &[(&'static str, usize, NativeFn)] = &[
        ("+", 2, plus),
        ("-", 2, minus),
        ("*", 2, times),
        ("/", 2, divide),
        ("%", 2, modulo),
        ("==", 2, eq),
        ("!=", 2, ne),
        ("<", 2, lt),
        (">", 2, gt),
        ("<=", 2, le),
        (">=", 2, ge),
        ("print", 1, print),
    ];
    for &(name, arity, f) in natives {
        scope.define(name, Value::callable(Native::new(name, Some(arity), f)));
    }
    Rc::new(scope)
}
