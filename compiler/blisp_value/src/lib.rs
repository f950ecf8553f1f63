//! blisp Value - runtime data model for the blisp interpreter.
//!
//! This crate owns every type that can flow through evaluation:
//! - `Value`: the tagged union of runtime data (numbers, symbols, strings,
//!   S-expressions, Q-expressions, functions, errors)
//! - `Function`, `Closure`, `Formal`, `Builtin`: callable values
//! - `EvalError`: the error taxonomy, carried inside `Value::Error`
//!
//! Values are owned trees: `Clone` is a deep copy and no value is ever shared
//! between two owners. Printing lives here too (`Display for Value`).

pub mod errors;
mod value;

pub use errors::{EvalError, EvalResult};
pub use value::{escape, Bindings, Builtin, Closure, Formal, Function, Value};
