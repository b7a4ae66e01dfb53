//! Numeric validators
//!
//! Every validator here fails with `InvalidType` for non-numeric input and
//! with `InvalidValue` when a number violates the bound. [`Min`] and [`Max`]
//! also accept strings and compare their length in characters.

use serde_json::Value;

use crate::foundation::{ValidationError, describe};

/// Numeric view of a value, if it is a number.
fn number(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// Number, or character count for strings.
fn magnitude(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => Some(s.chars().count() as f64),
        other => number(other),
    }
}

fn not_a_number(input: &Value) -> ValidationError {
    ValidationError::type_mismatch("number", describe(input))
}

// ============================================================================
// POSITIVE
// ============================================================================

crate::validator! {
    /// Validates that a number is positive.
    ///
    /// Zero is accepted unless the validator was built with
    /// [`strictly_positive`].
    ///
    /// # Examples
    ///
    /// ```
    /// use assurance_validator::foundation::Validate;
    /// use assurance_validator::validators::{positive, strictly_positive};
    /// use serde_json::json;
    ///
    /// assert!(positive().validate(&json!(0)).is_ok());
    /// assert!(strictly_positive().validate(&json!(0)).is_err());
    /// assert!(positive().validate(&json!(-5)).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Positive { allow_zero: bool } for Value;
    rule(self, input) {
        number(input).is_some_and(|n| if self.allow_zero { n >= 0.0 } else { n > 0.0 })
    }
    error(self, input) {
        if input.is_number() {
            let message = if self.allow_zero {
                "Value must be zero or positive"
            } else {
                "Value must be positive"
            };
            ValidationError::invalid_value(message).with_detail("actual", input.to_string())
        } else {
            not_a_number(input)
        }
    }
    new(allow_zero: bool) { Self { allow_zero } }
    fn positive_with(allow_zero: bool);
}

/// Positive validator that accepts zero.
#[must_use]
pub fn positive() -> Positive {
    Positive::new(true)
}

/// Positive validator that rejects zero.
#[must_use]
pub fn strictly_positive() -> Positive {
    Positive::new(false)
}

// ============================================================================
// BOUNDS
// ============================================================================

crate::validator! {
    /// Validates that a number is strictly greater than a bound.
    #[derive(Copy, PartialEq)]
    pub GreaterThan { bound: f64 } for Value;
    rule(self, input) { number(input).is_some_and(|n| n > self.bound) }
    error(self, input) {
        if input.is_number() {
            ValidationError::invalid_value(format!("Value must be greater than {}", self.bound))
                .with_detail("bound", self.bound.to_string())
                .with_detail("actual", input.to_string())
        } else {
            not_a_number(input)
        }
    }
    fn greater_than(bound: f64);
}

crate::validator! {
    /// Validates that a number is strictly less than a bound.
    #[derive(Copy, PartialEq)]
    pub LessThan { bound: f64 } for Value;
    rule(self, input) { number(input).is_some_and(|n| n < self.bound) }
    error(self, input) {
        if input.is_number() {
            ValidationError::invalid_value(format!("Value must be less than {}", self.bound))
                .with_detail("bound", self.bound.to_string())
                .with_detail("actual", input.to_string())
        } else {
            not_a_number(input)
        }
    }
    fn less_than(bound: f64);
}

crate::validator! {
    /// Validates that a number (or string length) is at least a minimum.
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 } for Value;
    rule(self, input) { magnitude(input).is_some_and(|n| n >= self.min) }
    error(self, input) {
        match input {
            Value::String(_) => ValidationError::invalid_value(
                format!("Must be at least {} characters", self.min),
            ),
            Value::Number(_) => ValidationError::invalid_value(
                format!("Value must be at least {}", self.min),
            )
            .with_detail("actual", input.to_string()),
            other => ValidationError::type_mismatch("number or string", describe(other)),
        }
    }
    fn min(min: f64);
}

crate::validator! {
    /// Validates that a number (or string length) does not exceed a maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use assurance_validator::foundation::Validate;
    /// use assurance_validator::validators::max;
    /// use serde_json::json;
    ///
    /// assert!(max(50.0).validate(&json!(50)).is_ok());
    /// assert!(max(40.0).validate(&json!(50)).is_err());
    /// assert!(max(3.0).validate(&json!("abcd")).is_err());
    /// ```
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 } for Value;
    rule(self, input) { magnitude(input).is_some_and(|n| n <= self.max) }
    error(self, input) {
        match input {
            Value::String(_) => ValidationError::invalid_value(
                format!("Must be at most {} characters", self.max),
            ),
            Value::Number(_) => ValidationError::invalid_value(
                format!("Value must be at most {}", self.max),
            )
            .with_detail("actual", input.to_string()),
            other => ValidationError::type_mismatch("number or string", describe(other)),
        }
    }
    fn max(max: f64);
}
