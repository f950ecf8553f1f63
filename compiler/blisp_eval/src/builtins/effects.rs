//! `print`, `error` and `load`.

use blisp_value::{EvalError, EvalResult, Value};

use super::{expect_string, single};
use crate::{Environment, Interpreter};

/// Print the arguments separated by spaces, then a newline.
pub(super) fn print(interp: &Interpreter, args: &[Value]) -> EvalResult {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    interp.print_handler().println(&line);
    Ok(Value::unit())
}

/// Build a user error from a message.
pub(super) fn error(args: Vec<Value>) -> EvalResult {
    let message = expect_string("error", 0, single("error", args)?)?;
    Ok(Value::Error(EvalError::User(message)))
}

/// Evaluate every expression of a file in `env`.
pub(super) fn load(interp: &mut Interpreter, env: &Environment, args: Vec<Value>) -> EvalResult {
    let path = expect_string("load", 0, single("load", args)?)?;
    interp.load_into(env, &path)?;
    Ok(Value::unit())
}
