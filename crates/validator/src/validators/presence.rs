//! Presence validators
//!
//! A value is *missing* when it is absent, `null` or the empty string (see
//! [`is_missing`]). `0` and `false` are present.

use serde_json::Value;

use crate::foundation::{ValidationError, is_missing};

crate::validator! {
    /// Validates that a value is present.
    ///
    /// Fails with `MissingField`.
    pub Required for Value;
    rule(input) { !is_missing(input) }
    error(input) { ValidationError::missing_field("This field is required") }
    fn required();
}

crate::validator! {
    /// Validates that a string, array or object has at least one element.
    ///
    /// Scalars other than `null` and `""` pass.
    pub NotEmpty for Value;
    rule(input) {
        match input {
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            other => !is_missing(other),
        }
    }
    error(input) { ValidationError::invalid_value("Must not be empty") }
    fn not_empty();
}
