//! Syntax tree to `Value` translation.

use blisp_stack::ensure_sufficient_stack;
use blisp_value::{EvalError, Value};

use crate::syntax::{SyntaxNode, Tag};

/// Translate a syntax node into a value.
///
/// `Root` reads as an S-expression of the top-level expressions. Trivia nodes
/// (comments, delimiters) read as the empty S-expression; list nodes skip
/// them.
pub fn read(node: &SyntaxNode) -> Value {
    match node.tag {
        Tag::Number => read_number(&node.contents),
        Tag::Symbol => Value::symbol(node.contents.as_str()),
        Tag::String => Value::Str(read_string(&node.contents)),
        Tag::Root | Tag::SExpr => Value::SExpr(read_children(node)),
        Tag::QExpr => Value::QExpr(read_children(node)),
        Tag::Comment | Tag::Delimiter => Value::unit(),
    }
}

/// Read every non-trivia child of a list node.
pub fn read_children(node: &SyntaxNode) -> Vec<Value> {
    ensure_sufficient_stack(|| {
        node.children
            .iter()
            .filter(|child| !child.is_trivia())
            .map(read)
            .collect()
    })
}

/// Numbers with a `.` are floats; anything that does not fit is an error value.
fn read_number(text: &str) -> Value {
    let invalid = || {
        Value::Error(EvalError::InvalidNumericLiteral {
            literal: text.to_owned(),
        })
    };

    if text.contains('.') {
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Value::Float(f),
            _ => invalid(),
        }
    } else {
        text.parse::<i64>().map_or_else(|_| invalid(), Value::Integer)
    }
}

/// Strip the surrounding quotes and decode backslash escapes.
fn read_string(literal: &str) -> String {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);
    unescape(inner)
}

/// Decode backslash escapes. Unknown escapes are kept verbatim.
pub fn unescape(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_owned();
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('a') => out.push('\u{07}'),
            Some('b') => out.push('\u{08}'),
            Some('v') => out.push('\u{0B}'),
            Some('f') => out.push('\u{0C}'),
            Some(c @ ('\\' | '"' | '\'')) => out.push(c),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
