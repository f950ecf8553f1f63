//! `def`, `=` and `\`.

use blisp_value::{Builtin, Closure, EvalError, EvalResult, Formal, Value};

use super::{expect_arity, expect_qexpr, expect_some};
use crate::Environment;

/// `def {a b} 1 2` binds in the root environment, `= {a b} 1 2` in the
/// current one.
pub(super) fn bind(op: Builtin, env: &Environment, args: Vec<Value>) -> EvalResult {
    let function = op.name();
    expect_some(function, &args)?;

    let mut args = args.into_iter();
    let symbols = match args.next() {
        Some(first) => symbols(function, expect_qexpr(function, 0, first)?)?,
        None => return Err(EvalError::MissingArguments { function }),
    };
    let values: Vec<Value> = args.collect();

    if symbols.len() != values.len() {
        return Err(EvalError::BindingCountMismatch {
            function,
            symbols: symbols.len(),
            values: values.len(),
        });
    }

    for (name, value) in symbols.into_iter().zip(values) {
        if op == Builtin::Def {
            env.define_global(name, value);
        } else {
            env.bind(name, value);
        }
    }
    Ok(Value::unit())
}

/// `\ {formals} {body}` builds a closure with no captured bindings.
pub(super) fn lambda(args: Vec<Value>) -> EvalResult {
    expect_arity("\\", &args, 2)?;
    let mut args = args.into_iter();
    let (Some(formals), Some(body)) = (args.next(), args.next()) else {
        return Err(EvalError::MissingArguments { function: "\\" });
    };

    let formals = symbols("\\", expect_qexpr("\\", 0, formals)?)?
        .iter()
        .map(|name| Formal::from_symbol(name))
        .collect();
    let body = expect_qexpr("\\", 1, body)?;

    Ok(Value::closure(Closure::new(formals, body)))
}

/// Names of a Q-expression that must hold only symbols.
fn symbols(function: &'static str, items: Vec<Value>) -> Result<Vec<String>, EvalError> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Symbol(name) => Ok(name),
            other => Err(EvalError::NonSymbolFormal {
                function,
                got: other.type_name(),
            }),
        })
        .collect()
}
