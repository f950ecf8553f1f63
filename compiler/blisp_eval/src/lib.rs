//! blisp evaluator.
//!
//! # Architecture
//!
//! - `Environment`: scope chain of `LocalScope<Scope>` handles
//! - `Interpreter`: `eval` / `apply`, closure application, call-depth limit
//! - `builtins`: the native operations bound in the global environment
//! - `print_handler`: where `print` output and reported errors go
//!
//! Value and error types come from `blisp_value` and are re-exported here.

mod builtins;
mod environment;
pub mod interpreter;
mod print_handler;

pub use blisp_value::{Builtin, Closure, EvalError, EvalResult, Formal, Function, Value};

pub use environment::{Environment, LocalScope, Scope};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};

#[cfg(test)]
mod tests;
