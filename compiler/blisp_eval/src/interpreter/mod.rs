//! Tree-walking evaluator.
//!
//! # Evaluation rules
//!
//! - A `Symbol` evaluates to its binding (a copy); an unbound name becomes an
//!   `Error` value.
//! - An `SExpr` evaluates all of its children left to right. If any of them
//!   yielded an `Error`, the leftmost one is the result. Otherwise zero
//!   children give the empty S-expression, one child gives that child, and
//!   more apply the head to the rest.
//! - Everything else evaluates to itself.
//!
//! # Errors
//!
//! `eval` and `apply` return plain `Value`s: failures travel as
//! `Value::Error`. Builtins work with `EvalResult` internally and are folded
//! back into values at the application boundary.
//!
//! # Call depth
//!
//! Closure applications and the `eval` and `load` builtins count against
//! `max_call_depth`; going past it yields `EvalError::StackOverflow`. Other
//! builtins never nest, so they are not counted. Native recursion runs under
//! `ensure_sufficient_stack`, so the limit is reached before the thread stack
//! is.

mod apply;
mod builder;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use blisp_reader::ReadError;
use blisp_stack::ensure_sufficient_stack;
use blisp_value::{Builtin, EvalError, Function, Value};

use crate::builtins;
use crate::print_handler::SharedPrintHandler;
use crate::Environment;

/// The evaluator plus its global environment and output sink.
pub struct Interpreter {
    global: Environment,
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
    call_depth: usize,
}

impl Interpreter {
    /// Interpreter with the builtins registered, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Start configuring an interpreter.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The root environment.
    pub fn global(&self) -> &Environment {
        &self.global
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate `value` in `env`.
    pub fn eval(&mut self, env: &Environment, value: Value) -> Value {
        ensure_sufficient_stack(|| match value {
            Value::Symbol(name) => env.lookup(&name).unwrap_or_else(Value::Error),
            Value::SExpr(items) => self.eval_sexpr(env, items),
            other => other,
        })
    }

    fn eval_sexpr(&mut self, env: &Environment, items: Vec<Value>) -> Value {
        // Every child is evaluated, side effects included, before any error
        // is reported.
        let mut values: Vec<Value> = items
            .into_iter()
            .map(|item| self.eval(env, item))
            .collect();

        if let Some(index) = values.iter().position(Value::is_error) {
            return values.swap_remove(index);
        }

        if values.len() <= 1 {
            return values.pop().unwrap_or_else(Value::unit);
        }

        let args = values.split_off(1);
        match values.pop() {
            Some(Value::Function(function)) => self.apply(env, function, args),
            Some(other) => Value::Error(EvalError::NotCallable {
                got: other.type_name(),
            }),
            None => Value::unit(),
        }
    }

    /// Apply `function` to already-evaluated `args`, with `env` as the
    /// calling environment.
    ///
    /// Only applications that can start evaluating code afresh (closures,
    /// `eval`, `load`) count against the call depth; other builtins return
    /// without nesting.
    pub fn apply(&mut self, env: &Environment, function: Function, args: Vec<Value>) -> Value {
        let nests = match &function {
            Function::Closure(_) => true,
            Function::Builtin(op) => matches!(op, Builtin::Eval | Builtin::Load),
        };
        if !nests {
            return self.dispatch(env, function, args);
        }

        if self.call_depth >= self.max_call_depth {
            return Value::Error(EvalError::StackOverflow {
                depth: self.max_call_depth,
            });
        }

        self.call_depth += 1;
        let result = self.dispatch(env, function, args);
        self.call_depth -= 1;
        result
    }

    fn dispatch(&mut self, env: &Environment, function: Function, args: Vec<Value>) -> Value {
        let result = match function {
            Function::Builtin(op) => builtins::call(self, env, op, args),
            Function::Closure(closure) => self.apply_closure(env, closure, args),
        };
        result.unwrap_or_else(Value::Error)
    }

    /// Evaluate `value` in the global environment.
    pub fn eval_global(&mut self, value: Value) -> Value {
        let global = self.global.clone();
        self.eval(&global, value)
    }

    /// Read a REPL line as one S-expression and evaluate it.
    pub fn eval_line(&mut self, source: &str) -> Result<Value, ReadError> {
        let expr = blisp_reader::read_line(source)?;
        Ok(self.eval_global(expr))
    }

    /// Evaluate each top-level expression of `source` in order.
    ///
    /// Error results are reported to the print handler and do not stop the
    /// run. Returns every result.
    pub fn run_source(&mut self, source: &str) -> Result<Vec<Value>, ReadError> {
        let program = blisp_reader::read_program(source)?;
        let global = self.global.clone();
        Ok(self.eval_all(&global, program))
    }

    /// Load a file into the global environment.
    pub fn load_file(&mut self, path: &str) -> Result<(), EvalError> {
        let global = self.global.clone();
        self.load_into(&global, path)
    }

    pub(crate) fn load_into(&mut self, env: &Environment, path: &str) -> Result<(), EvalError> {
        let load_failed = |reason: String| EvalError::LoadFailed {
            path: path.to_owned(),
            reason,
        };

        let source = std::fs::read_to_string(path).map_err(|e| load_failed(e.to_string()))?;
        let program = blisp_reader::read_program(&source).map_err(|e| {
            let (line, column) = e.position(&source);
            load_failed(format!("{line}:{column}: {e}"))
        })?;

        tracing::debug!(path, expressions = program.len(), "load");
        self.eval_all(env, program);
        Ok(())
    }

    fn eval_all(&mut self, env: &Environment, program: Vec<Value>) -> Vec<Value> {
        program
            .into_iter()
            .map(|expr| {
                let value = self.eval(env, expr);
                if value.is_error() {
                    self.print_handler.println(&value.to_string());
                }
                value
            })
            .collect()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
