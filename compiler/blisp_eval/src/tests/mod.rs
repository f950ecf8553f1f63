//! Builtin library tests, run through source text.

mod binding_tests;
mod effects_tests;

use crate::{buffer_handler, Interpreter, SharedPrintHandler, Value};

/// Interpreter whose output goes to a buffer.
fn interpreter() -> Interpreter {
    Interpreter::builder().print_handler(buffer_handler()).build()
}

/// Interpreter plus a handle on its output buffer.
fn interpreter_with_output() -> (Interpreter, SharedPrintHandler) {
    let handler = buffer_handler();
    let interp = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    (interp, handler)
}

/// Run `source` and return the value of its last expression.
fn run(interp: &mut Interpreter, source: &str) -> Value {
    interp
        .run_source(source)
        .unwrap()
        .pop()
        .unwrap_or_else(Value::unit)
}

fn eval_str(source: &str) -> Value {
    run(&mut interpreter(), source)
}

fn int_list(items: &[i64]) -> Value {
    Value::qexpr(items.iter().copied().map(Value::Integer).collect())
}
