use std::{fmt, rc::Rc};

/// Scalar runtime value exchanged with generated native code.
///
/// Exactly three variants exist; the embedding layer classifies anything
/// else (objects, null, undefined) before calling in, so an unrepresentable
/// input cannot reach this engine. Adding a variant later is a compile-time
/// change at every match below.
///
/// Using `Rc<str>` instead of `Rc<String>` avoids double indirection and
/// makes cloning a string value O(1). Values are immutable after
/// construction; concatenation produces a new value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Any IEEE-754 double, including NaN and the infinities.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
    /// UTF-8 string value.
    String(Rc<str>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "\"{}\"", v),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl Value {
    /// Returns the canonical runtime type label used in diagnostics.
    ///
    /// These labels are user-visible and are expected to remain stable.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Boolean(_) => "Boolean",
            Value::String(_) => "String",
        }
    }

    /// Projects this value onto a double.
    ///
    /// Booleans map to `1.0`/`0.0`. Strings always map to `0.0`: the engine
    /// never attempts numeric parsing of string contents.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::String(_) => 0.0,
        }
    }

    /// Returns whether this value is truthy.
    ///
    /// Zero is the only falsy number (NaN and the infinities compare
    /// non-equal to zero and are therefore truthy); the empty string is the
    /// only falsy string.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0,
            Value::Boolean(b) => *b,
            Value::String(s) => !s.is_empty(),
        }
    }

    /// Converts this value to its string form.
    ///
    /// The string path is identity: the same `Rc` allocation comes back.
    /// Numbers equal to their truncation render as integer literals
    /// (`42.0` becomes `"42"`, never `"42.0"`).
    pub fn to_string_value(&self) -> Rc<str> {
        match self {
            Value::Number(n) => render_number(*n).into(),
            Value::Boolean(true) => "true".into(),
            Value::Boolean(false) => "false".into(),
            Value::String(s) => Rc::clone(s),
        }
    }
}

/// Decimal rendering of a double.
///
/// Whole doubles print without a fractional suffix via an `i64` cast. The
/// cast only keeps full precision for finite values strictly below 2^63, so
/// non-finite and out-of-range doubles take the standard formatter instead
/// (which is locale-independent and already exponent-free). `-0.0` takes
/// the integer branch and renders `"0"`.
fn render_number(n: f64) -> String {
    const I64_MIN: f64 = i64::MIN as f64;
    const I64_MAX: f64 = i64::MAX as f64;

    if n.is_finite() && n == n.trunc() && (I64_MIN..I64_MAX).contains(&n) {
        return (n as i64).to_string();
    }
    n.to_string()
}
