//! Length and membership validators

use serde_json::Value;

use crate::foundation::{ValidationError, describe};

/// Length of a string (in chars) or an array.
fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

crate::validator! {
    /// Validates that a string or array length is within an inclusive range.
    ///
    /// # Examples
    ///
    /// ```
    /// use assurance_validator::foundation::Validate;
    /// use assurance_validator::validators::length_range;
    /// use serde_json::json;
    ///
    /// assert!(length_range(1, 3).validate(&json!([1, 2])).is_ok());
    /// assert!(length_range(1, 3).validate(&json!("abcd")).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LengthRange { min: usize, max: usize } for Value;
    rule(self, input) { length(input).is_some_and(|len| len >= self.min && len <= self.max) }
    error(self, input) {
        match length(input) {
            Some(len) => ValidationError::invalid_value(format!(
                "Length must be between {} and {}",
                self.min, self.max
            ))
            .with_detail("actual", len.to_string()),
            None => ValidationError::type_mismatch("string or array", describe(input)),
        }
    }
    fn length_range(min: usize, max: usize);
}

crate::validator! {
    /// Validates that a value equals one of the allowed values.
    #[derive(PartialEq, Eq)]
    pub OneOf { allowed: Vec<Value> } for Value;
    rule(self, input) { self.allowed.contains(input) }
    error(self, input) {
        let allowed: Vec<String> = self.allowed.iter().map(Value::to_string).collect();
        ValidationError::invalid_value(format!("Must be one of: {}", allowed.join(", ")))
            .with_detail("actual", input.to_string())
    }
    new(allowed: impl IntoIterator<Item = Value>) {
        Self { allowed: allowed.into_iter().collect() }
    }
    fn one_of(allowed: impl IntoIterator<Item = Value>);
}
