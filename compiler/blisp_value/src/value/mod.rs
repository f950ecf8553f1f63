//! Runtime values for the blisp interpreter.
//!
//! # Ownership
//!
//! A `Value` is an owned tree. Lists own their items, closures own their
//! captured bindings, and `Clone` produces a fully independent deep copy.
//! Environment lookups hand out copies, so mutating a value obtained from a
//! scope can never affect the binding it came from.
//!
//! # List kinds
//!
//! `SExpr` and `QExpr` share a representation and differ only in how the
//! evaluator treats them. Converting between the two is a pure function
//! ([`Value::into_sexpr`], [`Value::into_qexpr`]); nothing is ever retagged in
//! place.

mod display;
mod function;

pub use display::escape;
pub use function::{Bindings, Builtin, Closure, Formal, Function};

use crate::EvalError;

/// Runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Error travelling through evaluation as a value.
    Error(EvalError),
    /// Exact integer.
    Integer(i64),
    /// Floating-point number (produced by literals with a `.` or by
    /// arithmetic with a fractional result).
    Float(f64),
    /// Unresolved identifier.
    Symbol(String),
    /// String value.
    Str(String),
    /// Expression to be evaluated.
    SExpr(Vec<Value>),
    /// Quoted list; evaluates to itself.
    QExpr(Vec<Value>),
    /// Builtin or user-defined function.
    Function(Function),
}

// Factory Methods

impl Value {
    /// Create a symbol value.
    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// The empty S-expression, returned by side-effecting builtins.
    #[inline]
    pub fn unit() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Create an S-expression.
    #[inline]
    pub fn sexpr(items: Vec<Value>) -> Self {
        Value::SExpr(items)
    }

    /// Create a Q-expression.
    #[inline]
    pub fn qexpr(items: Vec<Value>) -> Self {
        Value::QExpr(items)
    }

    /// Create a builtin function value.
    #[inline]
    pub fn builtin(op: Builtin) -> Self {
        Value::Function(Function::Builtin(op))
    }

    /// Create a user-defined closure value.
    #[inline]
    pub fn closure(closure: Closure) -> Self {
        Value::Function(Function::Closure(closure))
    }

    /// Comparison result as the language represents booleans.
    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Integer(i64::from(b))
    }
}

// Inspection

impl Value {
    /// Name of this value's type, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Error(_) => "Error",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Symbol(_) => "Symbol",
            Value::Str(_) => "String",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Function(_) => "Function",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Numeric view of an `Integer` or `Float`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "numeric comparisons follow f64 semantics"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

// Conversions

impl Value {
    /// Reinterpret a list as an S-expression, ready for evaluation.
    ///
    /// Non-list values are wrapped in a one-element S-expression, which
    /// evaluates to the value itself.
    pub fn into_sexpr(self) -> Value {
        match self {
            Value::QExpr(items) | Value::SExpr(items) => Value::SExpr(items),
            other => Value::SExpr(vec![other]),
        }
    }
}
