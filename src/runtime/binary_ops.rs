use crate::runtime::value::Value;

/// Generic `+` over two scalar values.
///
/// String concatenation dominates: if *either* operand is a string, both
/// operands are coerced to strings and concatenated, so `"a" + 1` and
/// `1 + "a"` both take the string path. Only when neither operand is a
/// string does `+` become numeric addition over [`Value::to_number`]
/// projections.
pub fn generic_plus(l: &Value, r: &Value) -> Value {
    if matches!(l, Value::String(_)) || matches!(r, Value::String(_)) {
        return Value::String(format!("{}{}", l.to_string_value(), r.to_string_value()).into());
    }
    Value::Number(l.to_number() + r.to_number())
}

/// Generic `-` over two scalar values.
///
/// Always numeric; there is no string-subtraction mode. A string operand
/// coerces to `0.0` like any other non-number.
pub fn generic_minus(l: &Value, r: &Value) -> Value {
    Value::Number(l.to_number() - r.to_number())
}

/// Generic `*` over two scalar values. Always numeric, like [`generic_minus`].
pub fn generic_times(l: &Value, r: &Value) -> Value {
    Value::Number(l.to_number() * r.to_number())
}

/// All-string fast path for `+`.
///
/// Callers invoke this only when both operands are statically known to be
/// strings, skipping the coercion dispatch. Output is byte-identical to
/// [`generic_plus`] on two string values.
pub fn string_plus(l: &str, r: &str) -> Value {
    Value::String(format!("{}{}", l, r).into())
}
