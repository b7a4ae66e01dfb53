//! String content validators
//!
//! Non-string input fails with `InvalidType`; a string that violates the
//! rule fails with `InvalidValue`.

use std::sync::LazyLock;

use serde_json::Value;

use crate::foundation::{ValidationError, describe};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

fn not_a_string(input: &Value) -> ValidationError {
    ValidationError::type_mismatch("string", describe(input))
}

// ============================================================================
// CONSISTS OF
// ============================================================================

crate::validator! {
    /// Validates that every character of a string belongs to a charset.
    ///
    /// # Examples
    ///
    /// ```
    /// use assurance_validator::foundation::Validate;
    /// use assurance_validator::validators::consists_of;
    /// use serde_json::json;
    ///
    /// let lower = consists_of("abcdefghijklmnopqrstuvwxyz");
    /// assert!(lower.validate(&json!("abcjodsaogpowsnpoewanf")).is_ok());
    /// assert!(lower.validate(&json!("at_sign_@_not_allowed")).is_err());
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub ConsistsOf { charset: String } for Value;
    rule(self, input) {
        input.as_str().is_some_and(|s| s.chars().all(|c| self.charset.contains(c)))
    }
    error(self, input) {
        match input.as_str() {
            Some(s) => {
                let offending: String = s.chars().filter(|c| !self.charset.contains(*c)).collect();
                ValidationError::invalid_value("Contains characters outside the allowed set")
                    .with_detail("offending", offending)
            }
            None => not_a_string(input),
        }
    }
    new(charset: impl Into<String>) { Self { charset: charset.into() } }
    fn consists_of(charset: impl Into<String>);
}

// ============================================================================
// REGEX
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    pub MatchesRegex { pattern: regex::Regex } for Value;
    rule(self, input) { input.as_str().is_some_and(|s| self.pattern.is_match(s)) }
    error(self, input) {
        if input.is_string() {
            ValidationError::invalid_value("Does not match the required pattern")
                .with_detail("pattern", self.pattern.as_str().to_owned())
        } else {
            not_a_string(input)
        }
    }
    new(pattern: regex::Regex) { Self { pattern } }
    fn matches_regex(pattern: regex::Regex);
}

impl MatchesRegex {
    /// Compiles `pattern` and builds the validator.
    pub fn parse(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(regex::Regex::new(pattern)?))
    }
}

crate::validator! {
    /// Validates email format.
    pub Email for Value;
    rule(input) { input.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s)) }
    error(input) {
        if input.is_string() {
            ValidationError::invalid_value("Invalid email address")
        } else {
            not_a_string(input)
        }
    }
    fn email();
}
