//! Tests for `print`, `error` and `load`.

use std::path::PathBuf;

use super::{eval_str, interpreter_with_output, run};
use crate::{Builtin, EvalError, Function, Value};
use blisp_value::escape;
use pretty_assertions::assert_eq;

/// Write `contents` to a file unique to this test process.
fn script(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("blisp_{}_{name}.blisp", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

fn load_expr(path: &std::path::Path) -> String {
    format!("(load \"{}\")", escape(&path.to_string_lossy()))
}

#[test]
fn print_writes_arguments_separated_by_spaces() {
    let (mut interp, output) = interpreter_with_output();
    let result = run(&mut interp, "(print 1 \"a\" {1 2} 2.5)");
    assert_eq!(result, Value::unit());
    assert_eq!(output.get_output(), "1 \"a\" {1 2} 2.500000\n");
}

#[test]
fn print_leaves_no_trailing_space() {
    let (mut interp, output) = interpreter_with_output();
    run(&mut interp, "(print 1) (print 1 2)");
    assert_eq!(output.get_output(), "1\n1 2\n");
}

#[test]
fn print_without_arguments_prints_newline() {
    let (mut interp, output) = interpreter_with_output();
    let global = interp.global().clone();
    let result = interp.apply(&global, Function::Builtin(Builtin::Print), vec![]);
    assert_eq!(result, Value::unit());
    assert_eq!(output.get_output(), "\n");
}

#[test]
fn print_functions() {
    let (mut interp, output) = interpreter_with_output();
    run(&mut interp, "(print + (\\ {x} {x}))");
    assert_eq!(output.get_output(), "<builtin> (\\ {x} {x})\n");
}

#[test]
fn error_builds_user_error() {
    assert_eq!(
        eval_str("(error \"boom\")"),
        Value::Error(EvalError::User("boom".into()))
    );
    assert_eq!(
        eval_str("(error 1)"),
        Value::Error(EvalError::TypeMismatch {
            function: "error",
            index: 0,
            got: "Integer",
            expected: "String",
        })
    );
}

#[test]
fn load_evaluates_file_and_continues_past_errors() {
    let path = script(
        "continues",
        "; setup\n(def {a} 1)\n(undefined_thing)\n(def {b} (+ a 1))\n(print \"loaded\")\n",
    );
    let (mut interp, output) = interpreter_with_output();

    assert_eq!(run(&mut interp, &load_expr(&path)), Value::unit());
    assert_eq!(
        output.get_output(),
        "Error: Unbound Symbol 'undefined_thing'\n\"loaded\"\n"
    );
    assert_eq!(run(&mut interp, "b"), Value::Integer(2));

    std::fs::remove_file(path).unwrap();
}

#[test]
fn load_missing_file() {
    let result = eval_str("(load \"/definitely/not/here.blisp\")");
    assert!(matches!(
        result,
        Value::Error(EvalError::LoadFailed { ref path, .. }) if path == "/definitely/not/here.blisp"
    ));
}

#[test]
fn load_unparsable_file() {
    let path = script("unparsable", "(def {x} 1)\n(+ 1");
    let (mut interp, _output) = interpreter_with_output();

    let result = run(&mut interp, &load_expr(&path));
    assert_eq!(
        result,
        Value::Error(EvalError::LoadFailed {
            path: path.to_string_lossy().into_owned(),
            reason: "2:1: unclosed '('".into(),
        })
    );
    // Nothing from a file that does not read is evaluated.
    assert!(interp.global().lookup("x").is_err());

    std::fs::remove_file(path).unwrap();
}

#[test]
fn load_through_interpreter_api() {
    let path = script("api", "(def {answer} 42)");
    let (mut interp, _output) = interpreter_with_output();

    interp.load_file(&path.to_string_lossy()).unwrap();
    assert_eq!(interp.global().lookup("answer"), Ok(Value::Integer(42)));

    std::fs::remove_file(path).unwrap();
}
