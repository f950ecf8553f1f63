//! Error taxonomy for evaluation.
//!
//! Errors are ordinary values: `eval` hands back `Value::Error(EvalError)` and
//! the enclosing S-expression, once all its children have run, yields the
//! leftmost one. Inside builtins the code
//! works with [`EvalResult`] and `?`, and the dispatcher folds the `Err` side
//! back into a value.
//!
//! Each variant carries the structured data of the failure; the `Display`
//! impl renders the user-facing message.

use thiserror::Error;

use crate::Value;

/// Result of a single builtin or environment operation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    // Names
    #[error("Unbound Symbol '{name}'")]
    UnboundSymbol { name: String },

    // Arguments
    #[error(
        "Function '{function}' passed incorrect type for argument {index}. \
         Got {got}, Expected {expected}"
    )]
    TypeMismatch {
        function: &'static str,
        index: usize,
        got: &'static str,
        expected: &'static str,
    },
    #[error("Function '{function}' passed wrong number of arguments. Got {got}, Expected {expected}")]
    ArityMismatch {
        function: &'static str,
        got: usize,
        expected: usize,
    },
    #[error("Function '{function}' passed no arguments")]
    MissingArguments { function: &'static str },
    #[error("Function passed too many arguments. Got {got}, Expected {expected}")]
    TooManyArguments { got: usize, expected: usize },

    // Arithmetic
    #[error("Division By Zero")]
    DivisionByZero,

    // Application
    #[error("S-Expression starts with incorrect type. Got {got}, Expected Function")]
    NotCallable { got: &'static str },
    #[error("Function '{function}' passed {{}}")]
    EmptyList { function: &'static str },
    #[error("Function format invalid. Symbol '&' not followed by single symbol")]
    InvalidVariadicFormat,
    #[error("maximum call depth of {depth} exceeded")]
    StackOverflow { depth: usize },

    // Binding
    #[error("Function '{function}' cannot define non-symbol. Got {got}, Expected Symbol")]
    NonSymbolFormal {
        function: &'static str,
        got: &'static str,
    },
    #[error(
        "Function '{function}' passed mismatched symbols and values. \
         Got {values}, Expected {symbols}"
    )]
    BindingCountMismatch {
        function: &'static str,
        symbols: usize,
        values: usize,
    },

    // Reading and loading
    #[error("invalid number '{literal}'")]
    InvalidNumericLiteral { literal: String },
    #[error("Could not load file '{path}': {reason}")]
    LoadFailed { path: String, reason: String },

    /// Raised by the `error` builtin.
    #[error("{0}")]
    User(String),
}

impl EvalError {
    /// Build a `TypeMismatch` for argument `index` of `function`.
    pub fn type_mismatch(
        function: &'static str,
        index: usize,
        got: &Value,
        expected: &'static str,
    ) -> Self {
        EvalError::TypeMismatch {
            function,
            index,
            got: got.type_name(),
            expected,
        }
    }

    /// Build an `UnboundSymbol` for `name`.
    pub fn unbound(name: impl Into<String>) -> Self {
        EvalError::UnboundSymbol { name: name.into() }
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

#[cfg(test)]
mod tests;
