//! Q-expression operations: `head`, `tail`, `join`.

use blisp_value::{EvalError, EvalResult, Value};

use super::{expect_qexpr, expect_some, expect_string, single};

/// `head {a b c}` is `{a}`.
pub(super) fn head(args: Vec<Value>) -> EvalResult {
    let items = non_empty("head", single("head", args)?)?;
    Ok(Value::QExpr(items.into_iter().take(1).collect()))
}

/// `tail {a b c}` is `{b c}`.
pub(super) fn tail(args: Vec<Value>) -> EvalResult {
    let mut items = non_empty("tail", single("tail", args)?)?;
    items.remove(0);
    Ok(Value::QExpr(items))
}

fn non_empty(function: &'static str, value: Value) -> Result<Vec<Value>, EvalError> {
    let items = expect_qexpr(function, 0, value)?;
    if items.is_empty() {
        return Err(EvalError::EmptyList { function });
    }
    Ok(items)
}

/// Concatenate Q-expressions, or strings; the first argument picks which.
pub(super) fn join(args: Vec<Value>) -> EvalResult {
    expect_some("join", &args)?;

    match args.first() {
        Some(Value::QExpr(_)) => {
            let mut joined = Vec::new();
            for (index, arg) in args.into_iter().enumerate() {
                joined.extend(expect_qexpr("join", index, arg)?);
            }
            Ok(Value::QExpr(joined))
        }
        Some(Value::Str(_)) => {
            let mut joined = String::new();
            for (index, arg) in args.into_iter().enumerate() {
                joined.push_str(&expect_string("join", index, arg)?);
            }
            Ok(Value::Str(joined))
        }
        Some(other) => Err(EvalError::type_mismatch(
            "join",
            0,
            other,
            "Q-Expression or String",
        )),
        None => Err(EvalError::MissingArguments { function: "join" }),
    }
}
