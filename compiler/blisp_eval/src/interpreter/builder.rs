//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use blisp_value::{Builtin, Value};

use super::Interpreter;
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Closure, `eval` and `load` applications allowed to nest before
/// `StackOverflow`.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for creating Interpreter instances.
///
/// The built interpreter always has every builtin bound in its global
/// environment.
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            env: None,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Use `env` as the global environment instead of a fresh one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` and reported errors go. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the maximum nesting of function applications.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let global = self.env.unwrap_or_default();
        for op in Builtin::ALL {
            global.bind(op.name(), Value::builtin(op));
        }

        Interpreter {
            global,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
