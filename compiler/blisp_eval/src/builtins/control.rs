//! `if` and `eval`: builtins that evaluate quoted code.

use blisp_value::{EvalError, EvalResult, Value};

use super::{expect_arity, expect_qexpr, single};
use crate::{Environment, Interpreter};

/// `if cond {then} {else}`: only the selected branch is evaluated.
pub(super) fn if_(interp: &mut Interpreter, env: &Environment, args: Vec<Value>) -> EvalResult {
    expect_arity("if", &args, 3)?;
    let mut args = args.into_iter();
    let (Some(cond), Some(then), Some(otherwise)) = (args.next(), args.next(), args.next()) else {
        return Err(EvalError::MissingArguments { function: "if" });
    };

    let truthy = match cond {
        Value::Integer(n) => n != 0,
        Value::Float(f) => f != 0.0,
        other => {
            return Err(EvalError::type_mismatch("if", 0, &other, "Integer or Float"));
        }
    };
    let then = expect_qexpr("if", 1, then)?;
    let otherwise = expect_qexpr("if", 2, otherwise)?;

    let branch = if truthy { then } else { otherwise };
    Ok(interp.eval(env, Value::qexpr(branch).into_sexpr()))
}

/// `eval {expr}`: evaluate a quoted list as an S-expression.
pub(super) fn eval(interp: &mut Interpreter, env: &Environment, args: Vec<Value>) -> EvalResult {
    let quoted = expect_qexpr("eval", 0, single("eval", args)?)?;
    Ok(interp.eval(env, Value::qexpr(quoted).into_sexpr()))
}
