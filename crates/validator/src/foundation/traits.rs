//! Core traits for the validation system
//!
//! [`Validate`] is implemented by every leaf predicate, [`Sanitize`] by every
//! leaf coercion. Both are pure: they look at one value and report, they never
//! write anything back themselves.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Generic over the input type so that validators can target `str`, numbers
/// or whole JSON values. The built-in validators all take
/// [`serde_json::Value`], which lets them tell a wrong type
/// ([`ErrorKind::InvalidType`](crate::foundation::ErrorKind::InvalidType))
/// apart from a violated constraint
/// ([`ErrorKind::InvalidValue`](crate::foundation::ErrorKind::InvalidValue)).
///
/// # Examples
///
/// ```
/// use assurance_validator::foundation::{Validate, ValidationError};
/// use serde_json::{Value, json};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         match input.as_i64() {
///             Some(n) if n % 2 == 0 => Ok(()),
///             Some(_) => Err(ValidationError::invalid_value("Must be even")),
///             None => Err(ValidationError::invalid_type("Expected integer")),
///         }
///     }
/// }
///
/// assert!(Even.validate(&json!(4)).is_ok());
/// assert!(Even.validate(&json!(3)).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// SANITIZER TRAIT
// ============================================================================

/// A coercion from one value to a new one.
///
/// Sanitizers return the replacement value; writing it back is the caller's
/// job. A value that cannot be coerced yields an error and must be left
/// untouched.
pub trait Sanitize {
    /// The type being coerced.
    type Value;

    /// Produces the sanitized replacement for `input`.
    fn sanitize(&self, input: &Self::Value) -> Result<Self::Value, ValidationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = Value;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct Stringify;

    impl Sanitize for Stringify {
        type Value = Value;

        fn sanitize(&self, input: &Value) -> Result<Value, ValidationError> {
            Ok(Value::String(input.to_string()))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate(&json!(null)).is_ok());
    }

    #[test]
    fn test_validator_by_reference() {
        let validator = &AlwaysValid;
        assert!(validator.validate(&json!(1)).is_ok());
    }

    #[test]
    fn test_sanitizer_trait() {
        assert_eq!(Stringify.sanitize(&json!(12)).unwrap(), json!("12"));
    }
}
