use crate::runtime::{
    binary_ops::{generic_minus, generic_plus, generic_times, string_plus},
    value::Value,
};

#[test]
fn plus_numbers() {
    let result = generic_plus(&Value::Number(2.0), &Value::Number(3.0));
    assert_eq!(result, Value::Number(5.0));
}

#[test]
fn plus_booleans_are_numeric() {
    let result = generic_plus(&Value::Boolean(true), &Value::Boolean(false));
    assert_eq!(result, Value::Number(1.0));
}

#[test]
fn plus_string_left_dominates() {
    let result = generic_plus(&Value::String("a".into()), &Value::Number(1.0));
    assert_eq!(result, Value::String("a1".into()));
}

#[test]
fn plus_string_right_dominates() {
    let result = generic_plus(&Value::Number(1.0), &Value::String("a".into()));
    assert_eq!(result, Value::String("1a".into()));
}

#[test]
fn plus_string_and_boolean() {
    let result = generic_plus(&Value::Boolean(true), &Value::String("!".into()));
    assert_eq!(result, Value::String("true!".into()));
}

#[test]
fn minus_has_no_string_mode() {
    // "5" coerces to 0, not to the parsed number 5.
    let result = generic_minus(&Value::String("5".into()), &Value::Number(2.0));
    assert_eq!(result, Value::Number(-2.0));
}

#[test]
fn minus_numbers() {
    let result = generic_minus(&Value::Number(10.0), &Value::Number(4.5));
    assert_eq!(result, Value::Number(5.5));
}

#[test]
fn times_coerces_booleans() {
    let result = generic_times(&Value::Boolean(true), &Value::Number(4.0));
    assert_eq!(result, Value::Number(4.0));
}

#[test]
fn times_string_is_zero() {
    let result = generic_times(&Value::String("3".into()), &Value::Number(7.0));
    assert_eq!(result, Value::Number(0.0));
}

#[test]
fn string_plus_matches_generic_plus() {
    let fast = string_plus("x", "y");
    let general = generic_plus(&Value::String("x".into()), &Value::String("y".into()));
    assert_eq!(fast, general);
}

#[test]
fn plus_nan_propagates() {
    let result = generic_plus(&Value::Number(f64::NAN), &Value::Number(1.0));
    match result {
        Value::Number(n) => assert!(n.is_nan()),
        other => panic!("expected number, got {:?}", other),
    }
}
