//! Built-in sanitizers
//!
//! Sanitizers compute a replacement value. On failure the error says why and
//! the caller keeps the original value.

use serde_json::{Number, Value};

use crate::foundation::{Sanitize, ValidationError, describe};

/// Coerces strings and numbers to an integer.
///
/// Strings are trimmed and parsed; a decimal string is truncated toward
/// zero, like a float input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ToInt;

impl Sanitize for ToInt {
    type Value = Value;

    fn sanitize(&self, input: &Value) -> Result<Value, ValidationError> {
        match input {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(input.clone()),
            Value::Number(n) => n
                .as_f64()
                .and_then(truncate)
                .ok_or_else(|| ValidationError::invalid_value("Number cannot be represented as an integer")),
            Value::String(s) => {
                let s = s.trim();
                if let Ok(i) = s.parse::<i64>() {
                    return Ok(Value::from(i));
                }
                s.parse::<f64>()
                    .ok()
                    .and_then(truncate)
                    .ok_or_else(|| {
                        ValidationError::invalid_value("Cannot convert to an integer")
                            .with_detail("actual", s.to_owned())
                    })
            }
            other => Err(ValidationError::type_mismatch("string or number", describe(other))),
        }
    }
}

fn truncate(f: f64) -> Option<Value> {
    if f.is_finite() && f.abs() < i64::MAX as f64 {
        Some(Value::from(f.trunc() as i64))
    } else {
        None
    }
}

/// Coerces strings and numbers to a floating point number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ToFloat;

impl Sanitize for ToFloat {
    type Value = Value;

    fn sanitize(&self, input: &Value) -> Result<Value, ValidationError> {
        let parsed = match input {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            other => {
                return Err(ValidationError::type_mismatch(
                    "string or number",
                    describe(other),
                ));
            }
        };
        parsed
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| {
                ValidationError::invalid_value("Cannot convert to a number")
                    .with_detail("actual", input.to_string())
            })
    }
}

/// String transformation applied by [`StringSanitizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringTransform {
    /// Strip leading and trailing whitespace.
    Trim,
    /// Lowercase every character.
    Lowercase,
    /// Uppercase every character.
    Uppercase,
}

/// Applies a [`StringTransform`] to string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringSanitizer {
    /// The transformation to apply.
    pub transform: StringTransform,
}

impl Sanitize for StringSanitizer {
    type Value = Value;

    fn sanitize(&self, input: &Value) -> Result<Value, ValidationError> {
        let s = input
            .as_str()
            .ok_or_else(|| ValidationError::type_mismatch("string", describe(input)))?;
        let out = match self.transform {
            StringTransform::Trim => s.trim().to_owned(),
            StringTransform::Lowercase => s.to_lowercase(),
            StringTransform::Uppercase => s.to_uppercase(),
        };
        Ok(Value::String(out))
    }
}

/// Integer coercion.
#[must_use]
pub const fn to_int() -> ToInt {
    ToInt
}

/// Float coercion.
#[must_use]
pub const fn to_float() -> ToFloat {
    ToFloat
}

/// Whitespace trimming.
#[must_use]
pub const fn trim() -> StringSanitizer {
    StringSanitizer {
        transform: StringTransform::Trim,
    }
}

/// Lowercasing.
#[must_use]
pub const fn to_lowercase() -> StringSanitizer {
    StringSanitizer {
        transform: StringTransform::Lowercase,
    }
}

/// Uppercasing.
#[must_use]
pub const fn to_uppercase() -> StringSanitizer {
    StringSanitizer {
        transform: StringTransform::Uppercase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("123"), json!(123))]
    #[case(json!("  42 "), json!(42))]
    #[case(json!("12.9"), json!(12))]
    #[case(json!(-3.7), json!(-3))]
    #[case(json!(7), json!(7))]
    fn to_int_cases(#[case] input: Value, #[case] expected: Value) {
        assert_eq!(to_int().sanitize(&input).unwrap(), expected);
    }

    #[test]
    fn to_int_failures() {
        assert_eq!(
            to_int().sanitize(&json!("abc")).unwrap_err().kind,
            ErrorKind::InvalidValue
        );
        assert_eq!(
            to_int().sanitize(&json!(true)).unwrap_err().kind,
            ErrorKind::InvalidType
        );
    }

    #[test]
    fn to_float_parses() {
        assert_eq!(to_float().sanitize(&json!("1.5")).unwrap(), json!(1.5));
        assert_eq!(to_float().sanitize(&json!(2)).unwrap(), json!(2.0));
        assert!(to_float().sanitize(&json!("NaN")).is_err());
        assert!(to_float().sanitize(&Value::Null).is_err());
    }

    #[test]
    fn string_transforms() {
        assert_eq!(
            trim().sanitize(&json!("   hello!    ")).unwrap(),
            json!("hello!")
        );
        assert_eq!(to_lowercase().sanitize(&json!("AbC")).unwrap(), json!("abc"));
        assert_eq!(to_uppercase().sanitize(&json!("AbC")).unwrap(), json!("ABC"));
        assert_eq!(
            trim().sanitize(&json!(1)).unwrap_err().kind,
            ErrorKind::InvalidType
        );
    }
}
