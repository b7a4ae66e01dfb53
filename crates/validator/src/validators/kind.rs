//! Structural type validators

use serde_json::Value;

use crate::foundation::{ValidationError, ValueKind, describe};

crate::validator! {
    /// Validates that a value has the given runtime kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use assurance_validator::foundation::{Validate, ValueKind};
    /// use assurance_validator::validators::is_kind;
    /// use serde_json::json;
    ///
    /// assert!(is_kind(ValueKind::Array).validate(&json!([1, 2])).is_ok());
    /// assert!(is_kind(ValueKind::Array).validate(&json!({})).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IsKind { kind: ValueKind } for Value;
    rule(self, input) { self.kind.matches(input) }
    error(self, input) { ValidationError::type_mismatch(self.kind.name(), describe(input)) }
    fn is_kind(kind: ValueKind);
}

crate::validator! {
    /// Validates that a value is an integral number.
    ///
    /// Non-numbers fail with `InvalidType`, numbers with a fractional part
    /// with `InvalidValue`.
    pub IsInt for Value;
    rule(input) { is_integral(input) }
    error(input) {
        if input.is_number() {
            ValidationError::invalid_value("Expected an integer")
                .with_detail("actual", input.to_string())
        } else {
            ValidationError::type_mismatch("integer", describe(input))
        }
    }
    fn is_int();
}

fn is_integral(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0),
        _ => false,
    }
}
