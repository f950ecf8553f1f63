//! Builtin library.
//!
//! Every builtin receives its evaluated arguments by value, validates them
//! up front and fails with an `EvalError` naming the function, the argument
//! index, and the types involved. Dispatch is a single match on [`Builtin`].

mod arithmetic;
mod binding;
mod compare;
mod control;
mod effects;
mod list;

use blisp_value::{Builtin, EvalError, EvalResult, Value};

use crate::{Environment, Interpreter};

/// Run builtin `op` on `args` in `env`.
#[tracing::instrument(level = "trace", skip_all, fields(op = op.name(), args = args.len()))]
pub(crate) fn call(
    interp: &mut Interpreter,
    env: &Environment,
    op: Builtin,
    args: Vec<Value>,
) -> EvalResult {
    match op {
        Builtin::Add | Builtin::Sub | Builtin::Mul | Builtin::Div => {
            arithmetic::arithmetic(op, args)
        }
        Builtin::Gt | Builtin::Lt | Builtin::Ge | Builtin::Le => compare::ordering(op, args),
        Builtin::Eq | Builtin::Ne => compare::equality(op, args),
        Builtin::If => control::if_(interp, env, args),
        Builtin::Eval => control::eval(interp, env, args),
        Builtin::List => Ok(Value::QExpr(args)),
        Builtin::Head => list::head(args),
        Builtin::Tail => list::tail(args),
        Builtin::Join => list::join(args),
        Builtin::Def | Builtin::Put => binding::bind(op, env, args),
        Builtin::Lambda => binding::lambda(args),
        Builtin::Print => effects::print(interp, &args),
        Builtin::Error => effects::error(args),
        Builtin::Load => effects::load(interp, env, args),
    }
}

// Argument checks shared by the builtins.

/// Require exactly `expected` arguments.
fn expect_arity(function: &'static str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvalError::ArityMismatch {
            function,
            got: args.len(),
            expected,
        })
    }
}

/// Require at least one argument.
fn expect_some(function: &'static str, args: &[Value]) -> Result<(), EvalError> {
    if args.is_empty() {
        Err(EvalError::MissingArguments { function })
    } else {
        Ok(())
    }
}

/// Take the items of a Q-expression argument.
fn expect_qexpr(function: &'static str, index: usize, value: Value) -> Result<Vec<Value>, EvalError> {
    match value {
        Value::QExpr(items) => Ok(items),
        other => Err(EvalError::type_mismatch(function, index, &other, "Q-Expression")),
    }
}

/// Take the text of a string argument.
fn expect_string(function: &'static str, index: usize, value: Value) -> Result<String, EvalError> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(EvalError::type_mismatch(function, index, &other, "String")),
    }
}

/// The single argument of a one-argument builtin.
fn single(function: &'static str, args: Vec<Value>) -> EvalResult {
    expect_arity(function, &args, 1)?;
    args.into_iter()
        .next()
        .ok_or(EvalError::MissingArguments { function })
}
