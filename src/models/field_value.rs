use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// Shown in table cells whose field is absent or falsy.
pub const PLACEHOLDER: &str = "-";

/// A single cell of a dataset record, kept exactly as the JSON source gave it.
///
/// Display follows template-string conversion: strings verbatim, integral
/// numbers without a fractional part, booleans as `true`/`false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Value);

impl FieldValue {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    pub fn is_number(&self) -> bool {
        self.0.is_number()
    }

    /// `null`, `false`, `0` and the empty string.
    pub fn is_falsy(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        }
    }

    /// Equality where `2021` and `2021.0` are one value but `2021` and
    /// `"2021"` are not.
    pub fn same_value(&self, other: &FieldValue) -> bool {
        match (&self.0, &other.0) {
            (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
            (a, b) => a == b,
        }
    }
}

fn fmt_number(n: &Number, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_i64() || n.is_u64() {
        return write!(f, "{}", n);
    }
    match n.as_f64() {
        Some(x) if x.fract() == 0.0 => write!(f, "{:.0}", x),
        Some(x) => write!(f, "{}", x),
        None => write!(f, "{}", n),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => fmt_number(n, f),
            other => write!(f, "{}", other),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue(Value::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue(Value::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue(Value::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue(Value::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn displays_like_a_template_string() {
        assert_eq!(FieldValue::from("Kenya").to_string(), "Kenya");
        assert_eq!(FieldValue::from(2021).to_string(), "2021");
        assert_eq!(FieldValue::from(150.0).to_string(), "150");
        assert_eq!(FieldValue::from(12.25).to_string(), "12.25");
        assert_eq!(FieldValue::from(json!(true)).to_string(), "true");
    }

    #[test]
    fn falsy_values() {
        assert!(FieldValue::from("").is_falsy());
        assert!(FieldValue::from(0).is_falsy());
        assert!(FieldValue::from(0.0).is_falsy());
        assert!(FieldValue::from(json!(false)).is_falsy());
        assert!(!FieldValue::from("0").is_falsy());
        assert!(!FieldValue::from(-3).is_falsy());
    }

    #[test]
    fn numbers_compare_by_value_not_encoding() {
        assert!(FieldValue::from(2021).same_value(&FieldValue::from(2021.0)));
        assert!(!FieldValue::from(2021).same_value(&FieldValue::from("2021")));
    }
}
