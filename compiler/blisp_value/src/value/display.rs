//! Printed form of values.
//!
//! The printed form is what the REPL echoes and what `print` writes. Lists
//! print with their delimiters, strings print quoted with escapes reapplied,
//! and floats always show six decimals so they never read back as integers.

use std::fmt::{self, Write};

use super::{Closure, Function, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Error(err) => write!(f, "Error: {err}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:.6}"),
            Value::Symbol(name) => f.write_str(name),
            Value::Str(s) => write!(f, "\"{}\"", escape(s)),
            Value::SExpr(items) => write_list(f, items, '(', ')'),
            Value::QExpr(items) => write_list(f, items, '{', '}'),
            Value::Function(func) => write!(f, "{func}"),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin(_) => f.write_str("<builtin>"),
            Function::Closure(closure) => write!(f, "{closure}"),
        }
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(\\ {")?;
        for (i, formal) in self.formals.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            f.write_str(formal.as_str())?;
        }
        f.write_str("} ")?;
        write_list(f, &self.body, '{', '}')?;
        f.write_char(')')
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Value], open: char, close: char) -> fmt::Result {
    f.write_char(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{item}")?;
    }
    f.write_char(close)
}

/// Reapply backslash escapes so the text reads back as the same string.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0B}' => out.push_str("\\v"),
            '\u{0C}' => out.push_str("\\f"),
            c => out.push(c),
        }
    }
    out
}
