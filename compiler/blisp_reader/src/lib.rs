//! Reader for blisp source text.
//!
//! Reading happens in two steps:
//! 1. [`parse`] tokenizes with logos and builds a [`SyntaxNode`] tree in which
//!    every node is tagged (`Number`, `Symbol`, `String`, `Comment`, `SExpr`,
//!    `QExpr`, `Delimiter`, `Root`) and leaves keep their literal text.
//! 2. [`read`] walks the tree and produces `Value`s, dropping comments and
//!    delimiters.
//!
//! The reader has no global state; callers parse as often as they like.

mod error;
mod read;
mod syntax;
mod token;

pub use error::{ReadError, Span};
pub use read::{read, read_children, unescape};
pub use syntax::{parse, SyntaxNode, Tag};

use blisp_value::Value;

/// Read a REPL line: all of its expressions form one S-expression.
///
/// `+ 1 2` reads as `(+ 1 2)`.
pub fn read_line(source: &str) -> Result<Value, ReadError> {
    parse(source).map(|root| read(&root))
}

/// Read a program: one value per top-level expression, in source order.
pub fn read_program(source: &str) -> Result<Vec<Value>, ReadError> {
    parse(source).map(|root| read_children(&root))
}
