//! `+ - * /`.
//!
//! The first operand is the accumulator and the rest are folded into it left
//! to right. Integer operations stay exact while they can: overflow and
//! inexact division fall back to floating point. The final value is a
//! `Float` when it has a fractional part; otherwise it takes the variant of
//! the first operand.

use blisp_value::{Builtin, EvalError, EvalResult, Value};

use super::expect_some;

const EXPECTED: &str = "Integer or Float";

#[derive(Clone, Copy, Debug, PartialEq)]
enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    fn from_value(function: &'static str, index: usize, value: &Value) -> Result<Num, EvalError> {
        match value {
            Value::Integer(n) => Ok(Num::Int(*n)),
            Value::Float(f) => Ok(Num::Float(*f)),
            other => Err(EvalError::type_mismatch(function, index, other, EXPECTED)),
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "mixed arithmetic is carried out in f64"
    )]
    fn as_f64(self) -> f64 {
        match self {
            Num::Int(n) => n as f64,
            Num::Float(f) => f,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Num::Int(n) => n == 0,
            Num::Float(f) => f == 0.0,
        }
    }

    fn negate(self) -> Num {
        match self {
            Num::Int(n) => n.checked_neg().map_or(Num::Float(-self.as_f64()), Num::Int),
            Num::Float(f) => Num::Float(-f),
        }
    }
}

pub(super) fn arithmetic(op: Builtin, args: Vec<Value>) -> EvalResult {
    let function = op.name();
    expect_some(function, &args)?;

    let nums = args
        .iter()
        .enumerate()
        .map(|(index, value)| Num::from_value(function, index, value))
        .collect::<Result<Vec<_>, _>>()?;

    let (&first, rest) = nums
        .split_first()
        .ok_or(EvalError::MissingArguments { function })?;

    if op == Builtin::Sub && rest.is_empty() {
        return Ok(finish(first, first.negate()));
    }

    let mut acc = first;
    for &operand in rest {
        if op == Builtin::Div && operand.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        acc = step(op, acc, operand);
    }

    Ok(finish(first, acc))
}

fn step(op: Builtin, x: Num, y: Num) -> Num {
    if let (Num::Int(a), Num::Int(b)) = (x, y) {
        if let Some(n) = int_step(op, a, b) {
            return Num::Int(n);
        }
    }

    let (a, b) = (x.as_f64(), y.as_f64());
    Num::Float(match op {
        Builtin::Add => a + b,
        Builtin::Sub => a - b,
        Builtin::Mul => a * b,
        _ => a / b,
    })
}

/// Exact integer result, or `None` when it needs floating point.
fn int_step(op: Builtin, a: i64, b: i64) -> Option<i64> {
    match op {
        Builtin::Add => a.checked_add(b),
        Builtin::Sub => a.checked_sub(b),
        Builtin::Mul => a.checked_mul(b),
        Builtin::Div if a.checked_rem(b)? == 0 => a.checked_div(b),
        _ => None,
    }
}

/// Pick the result variant from the value and the first operand.
#[expect(
    clippy::cast_possible_truncation,
    reason = "only integral values inside the i64 range are converted"
)]
fn finish(first: Num, result: Num) -> Value {
    // 2^63 as f64; the i64 range is [-2^63, 2^63).
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    match (first, result) {
        (_, Num::Int(n)) => Value::Integer(n),
        (Num::Int(_), Num::Float(f)) if f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) => {
            Value::Integer(f as i64)
        }
        (_, Num::Float(f)) => Value::Float(f),
    }
}
