//! Core validation types and traits
//!
//! This module contains the fundamental building blocks shared by every
//! validator and by the session engine built on top of them:
//!
//! - **Traits**: [`Validate`], [`Sanitize`]
//! - **Errors**: [`ErrorKind`], [`ValidationError`], [`ValidationErrors`],
//!   and the [`ErrorRegistry`] handed to custom validators
//! - **Kinds**: [`ValueKind`], the closed set of runtime type tags
//!
//! # Examples
//!
//! ```
//! use assurance_validator::foundation::{ErrorKind, Validate};
//! use assurance_validator::validators::is_kind;
//! use assurance_validator::foundation::ValueKind;
//! use serde_json::json;
//!
//! let validator = is_kind(ValueKind::String);
//! assert!(validator.validate(&json!("hello")).is_ok());
//! assert_eq!(
//!     validator.validate(&json!(666)).unwrap_err().kind,
//!     ErrorKind::InvalidType,
//! );
//! ```

pub mod error;
pub mod kind;
pub mod traits;

pub use error::{ERRORS, ErrorKind, ErrorRegistry, ValidationError, ValidationErrors};
pub use kind::{UnknownKindError, ValueKind, describe};
pub use traits::{Sanitize, Validate};

use serde_json::Value;

/// Whether a value counts as missing: `null` or the empty string.
///
/// Absent keys are represented as `null` by the engine, so they are missing
/// too. Falsy-but-present values such as `0` and `false` are not.
#[must_use]
pub fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Validates a value with multiple validators, collecting every failure.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = Value;

        fn validate(&self, _input: &Value) -> Result<(), ValidationError> {
            Err(ValidationError::validation("Always fails"))
        }
    }

    #[test]
    fn test_is_missing() {
        assert!(is_missing(&Value::Null));
        assert!(is_missing(&json!("")));
        assert!(!is_missing(&json!(0)));
        assert!(!is_missing(&json!(false)));
        assert!(!is_missing(&json!(" ")));
        assert!(!is_missing(&json!([])));
    }

    #[test]
    fn test_validate_with_all_collects() {
        let fails = AlwaysFails;
        let result = validate_with_all(&json!(1), &[&fails, &fails]);
        assert_eq!(result.unwrap_err().len(), 2);
    }
}
