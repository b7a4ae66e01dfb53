//! Error types for validation failures
//!
//! A failure is a flat record: an [`ErrorKind`] tag, the fully-qualified
//! field path it belongs to (`param`), and a human-readable message.
//! Failures are collected into [`ValidationErrors`] in the order they were
//! produced and are never thrown.
//!
//! All static string fields use `Cow<'static, str>` so that the common case
//! of literal messages does not allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The closed set of failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ErrorKind {
    /// Base kind; used for failures that are neither a type nor a value problem.
    #[default]
    #[serde(rename = "ValidationError")]
    Validation,
    /// The value is present but has the wrong type for the check.
    InvalidType,
    /// The value has the right type but violates a constraint.
    InvalidValue,
    /// A required value is absent, `null` or an empty string.
    MissingField,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 4] = [
        ErrorKind::Validation,
        ErrorKind::InvalidType,
        ErrorKind::InvalidValue,
        ErrorKind::MissingField,
    ];

    /// The tag string carried by errors of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::InvalidType => "InvalidType",
            ErrorKind::InvalidValue => "InvalidValue",
            ErrorKind::MissingField => "MissingField",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure.
///
/// Leaf validators create errors without a `param`; the engine fills in the
/// field path when the error is recorded.
///
/// # Examples
///
/// ```
/// use assurance_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::invalid_value("only adults allowed").with_param("age");
/// assert_eq!(error.kind, ErrorKind::InvalidValue);
/// assert_eq!(error.param.as_deref(), Some("age"));
/// assert_eq!(error.to_string(), "[age] InvalidValue: only adults allowed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Failure category, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: ErrorKind,

    /// Fully-qualified, alias-applied field path.
    ///
    /// Examples: `"age"`, `"bands[2]"`, `"schedule.wednesday.start"`
    pub param: Option<String>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Extra key-value context such as `expected` / `actual`.
    ///
    /// Typically 0-2 entries.
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub details: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a new error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            param: None,
            message: message.into(),
            details: SmallVec::new(),
        }
    }

    /// Sets the field path.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Adds a detail entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_detail(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.details.push((key.into(), value.into()));
        self
    }

    /// Looks up a detail value by key.
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// The kind tag as a string, e.g. `"InvalidType"`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Converts the error to a JSON object.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(param) = &self.param {
            write!(f, "[{}] {}: {}", param, self.kind, self.message)?;
        } else {
            write!(f, "{}: {}", self.kind, self.message)?;
        }

        if !self.details.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.details.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a base-kind error.
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Creates an `InvalidType` error.
    pub fn invalid_type(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidType, message)
    }

    /// Creates an `InvalidValue` error.
    pub fn invalid_value(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidValue, message)
    }

    /// Creates a `MissingField` error.
    pub fn missing_field(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::MissingField, message)
    }

    /// Creates an `InvalidType` error describing the expected and actual types.
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::invalid_type(format!("Expected {expected}, found {actual}"))
            .with_detail("expected", expected)
            .with_detail("actual", actual)
    }
}

// ============================================================================
// ERROR REGISTRY
// ============================================================================

/// Read-only factory of error kinds handed to custom validators.
///
/// Custom validators build typed errors through the registry instead of
/// reaching for ambient constructors.
///
/// # Examples
///
/// ```
/// use assurance_validator::foundation::{ERRORS, ErrorKind};
///
/// let error = ERRORS.invalid_value("only adults allowed");
/// assert_eq!(error.kind, ErrorKind::InvalidValue);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorRegistry;

/// The registry instance passed to every custom validator.
pub static ERRORS: ErrorRegistry = ErrorRegistry;

impl ErrorRegistry {
    /// The kinds this registry can construct.
    #[must_use]
    pub fn kinds(&self) -> &'static [ErrorKind] {
        &ErrorKind::ALL
    }

    /// Constructs an error of an arbitrary kind.
    pub fn make(&self, kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::new(kind, message)
    }

    /// Constructs a base-kind error.
    pub fn validation(&self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::validation(message)
    }

    /// Constructs an `InvalidType` error.
    pub fn invalid_type(&self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::invalid_type(message)
    }

    /// Constructs an `InvalidValue` error.
    pub fn invalid_value(&self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::invalid_value(message)
    }

    /// Constructs a `MissingField` error.
    pub fn missing_field(&self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::missing_field(message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Ordered, append-only collection of validation errors.
///
/// Errors are kept in the order they were added; nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Removes every error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Converts to a `Vec`.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl std::ops::Index<usize> for ValidationErrors {
    type Output = ValidationError;

    fn index(&self, index: usize) -> &Self::Output {
        &self.errors[index]
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
