//! Runtime kinds of JSON values
//!
//! [`ValueKind`] is the closed tag set accepted by type checks. Tags parse
//! from their lowercase names; anything else is rejected up front instead of
//! silently passing.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `"..."`
    String,
    /// Any JSON number, integral or not.
    Number,
    /// `true` / `false`
    Boolean,
    /// `[...]`
    Array,
    /// `{...}`
    Object,
    /// `null`, also used for absent fields.
    Null,
}

impl ValueKind {
    /// Every kind, in declaration order.
    pub const ALL: [ValueKind; 6] = [
        ValueKind::String,
        ValueKind::Number,
        ValueKind::Boolean,
        ValueKind::Array,
        ValueKind::Object,
        ValueKind::Null,
    ];

    /// Returns the kind of the given value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Null => ValueKind::Null,
        }
    }

    /// Whether `value` is of this kind.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        Self::of(value) == self
    }

    /// The lowercase tag name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a kind tag is not one of the recognized names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value kind `{name}`")]
pub struct UnknownKindError {
    /// The rejected tag.
    pub name: String,
}

impl FromStr for ValueKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownKindError { name: s.to_owned() })
    }
}

/// Short name of a value's kind, for messages.
#[must_use]
pub fn describe(value: &Value) -> &'static str {
    ValueKind::of(value).name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_of() {
        assert_eq!(ValueKind::of(&json!("x")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!(false)), ValueKind::Boolean);
        assert_eq!(ValueKind::of(&json!([])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!({})), ValueKind::Object);
        assert_eq!(ValueKind::of(&Value::Null), ValueKind::Null);
    }

    #[test]
    fn test_parse_round_trips_names() {
        for kind in ValueKind::ALL {
            assert_eq!(kind.name().parse::<ValueKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "strnig".parse::<ValueKind>().unwrap_err();
        assert_eq!(err.name, "strnig");
        assert_eq!(err.to_string(), "unknown value kind `strnig`");
    }
}
