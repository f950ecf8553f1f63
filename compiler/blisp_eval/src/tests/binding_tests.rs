//! Tests for `def`, `=` and `\`.

use super::{eval_str, interpreter, run};
use crate::{Closure, EvalError, Formal, Value};
use pretty_assertions::assert_eq;

#[test]
fn def_binds_several_names() {
    let mut interp = interpreter();
    assert_eq!(run(&mut interp, "(def {x y} 1 2)"), Value::unit());
    assert_eq!(run(&mut interp, "(+ x y)"), Value::Integer(3));
}

#[test]
fn def_replaces_previous_binding() {
    assert_eq!(eval_str("(def {x} 1) (def {x} 2) x"), Value::Integer(2));
}

#[test]
fn def_inside_function_is_global() {
    let mut interp = interpreter();
    run(&mut interp, "(def {setg} (\\ {v} {def {g} v}))");
    run(&mut interp, "(setg 5)");
    assert_eq!(run(&mut interp, "g"), Value::Integer(5));
}

#[test]
fn put_inside_function_is_local() {
    let mut interp = interpreter();
    run(&mut interp, "(def {setl} (\\ {v} {= {l} v}))");
    assert_eq!(run(&mut interp, "(setl 5)"), Value::unit());
    assert_eq!(run(&mut interp, "l"), Value::Error(EvalError::unbound("l")));
}

#[test]
fn put_at_top_level_binds_globally() {
    assert_eq!(eval_str("(= {x} 4) x"), Value::Integer(4));
}

#[test]
fn binding_argument_checks() {
    assert_eq!(
        eval_str("(def {x} 1 2)"),
        Value::Error(EvalError::BindingCountMismatch {
            function: "def",
            symbols: 1,
            values: 2,
        })
    );
    assert_eq!(
        eval_str("(= {1} 2)"),
        Value::Error(EvalError::NonSymbolFormal {
            function: "=",
            got: "Integer",
        })
    );
    assert_eq!(
        eval_str("(def 1 2)"),
        Value::Error(EvalError::TypeMismatch {
            function: "def",
            index: 0,
            got: "Integer",
            expected: "Q-Expression",
        })
    );
}

#[test]
fn lambda_builds_closure() {
    assert_eq!(
        eval_str("(\\ {x & xs} {xs})"),
        Value::closure(Closure::new(
            vec![Formal::Named("x".into()), Formal::Variadic, Formal::Named("xs".into())],
            vec![Value::symbol("xs")],
        ))
    );
}

#[test]
fn lambda_argument_checks() {
    assert_eq!(
        eval_str("(\\ {x 1} {x})"),
        Value::Error(EvalError::NonSymbolFormal {
            function: "\\",
            got: "Integer",
        })
    );
    assert_eq!(
        eval_str("(\\ {x} 1)"),
        Value::Error(EvalError::TypeMismatch {
            function: "\\",
            index: 1,
            got: "Integer",
            expected: "Q-Expression",
        })
    );
    assert_eq!(
        eval_str("(\\ {x})"),
        Value::Error(EvalError::ArityMismatch {
            function: "\\",
            got: 1,
            expected: 2,
        })
    );
}
