//! Ordering (`> < >= <=`) and equality (`== !=`).

use std::cmp::Ordering;

use blisp_value::{Builtin, EvalError, EvalResult, Value};

use super::expect_arity;

pub(super) fn ordering(op: Builtin, args: Vec<Value>) -> EvalResult {
    let function = op.name();
    expect_arity(function, &args, 2)?;

    let ordering = match (&args[0], &args[1]) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (a, b) => {
            let x = number(function, 0, a)?;
            let y = number(function, 1, b)?;
            x.partial_cmp(&y)
        }
    };

    let holds = ordering.is_some_and(|ord| match op {
        Builtin::Gt => ord == Ordering::Greater,
        Builtin::Lt => ord == Ordering::Less,
        Builtin::Ge => ord != Ordering::Less,
        _ => ord != Ordering::Greater,
    });
    Ok(Value::bool(holds))
}

fn number(function: &'static str, index: usize, value: &Value) -> Result<f64, EvalError> {
    value
        .as_f64()
        .ok_or_else(|| EvalError::type_mismatch(function, index, value, "Integer or Float"))
}

pub(super) fn equality(op: Builtin, args: Vec<Value>) -> EvalResult {
    expect_arity(op.name(), &args, 2)?;
    let equal = args[0] == args[1];
    Ok(Value::bool(if op == Builtin::Eq { equal } else { !equal }))
}
