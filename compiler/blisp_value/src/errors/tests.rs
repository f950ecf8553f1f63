use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_type_mismatch_message() {
    let err = EvalError::type_mismatch("head", 0, &Value::Integer(1), "Q-Expression");
    assert_eq!(
        err.to_string(),
        "Function 'head' passed incorrect type for argument 0. Got Integer, Expected Q-Expression"
    );
}

#[test]
fn test_arity_message() {
    let err = EvalError::ArityMismatch {
        function: "if",
        got: 2,
        expected: 3,
    };
    assert_eq!(
        err.to_string(),
        "Function 'if' passed wrong number of arguments. Got 2, Expected 3"
    );
}

#[test]
fn test_empty_list_message_keeps_braces() {
    let err = EvalError::EmptyList { function: "tail" };
    assert_eq!(err.to_string(), "Function 'tail' passed {}");
}

#[test]
fn test_user_error_is_verbatim() {
    assert_eq!(EvalError::User("boom".into()).to_string(), "boom");
}

#[test]
fn test_errors_convert_into_values() {
    let v: Value = EvalError::DivisionByZero.into();
    assert!(v.is_error());
    assert_eq!(v, Value::Error(EvalError::DivisionByZero));
}
