//! Per-field validator chain
//!
//! A [`Chain`] is bound to one field of the current frame. Each step either
//! checks the field's current value or sanitizes it, writing the result back
//! into the owning container so later steps, and later reads of the data,
//! observe it.
//!
//! A chain records at most one error: once a step fails, or
//! [`Chain::optional`] sees a missing value, every following step is a
//! no-op. A field excluded by the session allow-list produces a chain whose
//! steps never run at all.

use serde_json::Value;

use assurance_validator::foundation::{
    ERRORS, ErrorRegistry, Sanitize, Validate, ValidationError, ValidationErrors, ValueKind,
    describe, is_missing,
};
use assurance_validator::sanitizers;
use assurance_validator::validators;

use crate::path::FieldPath;
use crate::scope::Scope;
use crate::settings::Settings;
use crate::slot::Slot;

// ============================================================================
// ERROR SINK
// ============================================================================

/// Where a chain records its errors.
#[derive(Debug)]
pub(crate) enum Sink<'a> {
    /// The session's collector.
    Borrowed(&'a mut ValidationErrors),
    /// A private collector, for single-field chains.
    Owned(ValidationErrors),
}

impl Sink<'_> {
    pub(crate) fn get(&self) -> &ValidationErrors {
        match self {
            Sink::Borrowed(errors) => errors,
            Sink::Owned(errors) => errors,
        }
    }

    pub(crate) fn get_mut(&mut self) -> &mut ValidationErrors {
        match self {
            Sink::Borrowed(errors) => errors,
            Sink::Owned(errors) => errors,
        }
    }
}

// ============================================================================
// CHAIN
// ============================================================================

/// Fluent validator chain over a single field.
///
/// Obtained from [`Assurance::me`](crate::Assurance::me),
/// [`Scope::me`], [`Scope::it`] or [`Assurance::single`](crate::Assurance::single).
///
/// # Examples
///
/// ```
/// use assurance::prelude::*;
/// use serde_json::json;
///
/// let mut data = json!({ "age": "21" });
/// let errors = Assurance::single(&mut data, "age")
///     .to_int()
///     .is(ValueKind::Number)
///     .is_positive()
///     .end();
///
/// assert!(errors.is_empty());
/// assert_eq!(data["age"], json!(21));
/// ```
#[derive(Debug)]
pub struct Chain<'a> {
    slot: Slot<'a>,
    path: FieldPath,
    depth: usize,
    settings: &'a Settings,
    errors: Sink<'a>,
    optional: bool,
    skipped: bool,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(
        slot: Slot<'a>,
        path: FieldPath,
        depth: usize,
        settings: &'a Settings,
        errors: Sink<'a>,
    ) -> Self {
        let skipped = matches!(slot, Slot::Detached);
        Self {
            slot,
            path,
            depth,
            settings,
            errors,
            optional: false,
            skipped,
        }
    }

    // ------------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------------

    /// Marks the field optional.
    ///
    /// When the current value is `null`, absent or `""`, every following step
    /// is skipped. `0` and `false` are present values.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        if !self.skipped && is_missing(self.slot.value()) {
            tracing::trace!(path = %self.path, "optional field missing, skipping chain");
            self.skipped = true;
        }
        self
    }

    /// Writes `value` into the field when its current value is missing.
    ///
    /// Call before [`optional`](Self::optional): a skipped chain writes
    /// nothing.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        if !self.skipped && is_missing(self.slot.value()) {
            self.write(value.into());
        }
        self
    }

    // ------------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------------

    /// Fails with `MissingField` when the value is `null`, absent or `""`.
    pub fn required(self) -> Self {
        self.check(validators::required())
    }

    /// Fails with `InvalidType` unless the value has the given kind.
    pub fn is(self, kind: ValueKind) -> Self {
        self.check(validators::is_kind(kind))
    }

    /// Requires an integral number.
    pub fn is_int(self) -> Self {
        self.check(validators::is_int())
    }

    /// Requires a number `>= 0`.
    pub fn is_positive(self) -> Self {
        self.check(validators::positive())
    }

    /// Requires a positive number, rejecting zero unless `allow_zero`.
    pub fn is_positive_with(self, allow_zero: bool) -> Self {
        self.check(validators::positive_with(allow_zero))
    }

    /// Requires a number strictly greater than `bound`.
    pub fn gt(self, bound: f64) -> Self {
        self.check(validators::greater_than(bound))
    }

    /// Requires a number strictly less than `bound`.
    pub fn lt(self, bound: f64) -> Self {
        self.check(validators::less_than(bound))
    }

    /// Requires a number `<= max`, or a string of at most `max` characters.
    pub fn max(self, max: f64) -> Self {
        self.check(validators::max(max))
    }

    /// Requires a number `>= min`, or a string of at least `min` characters.
    pub fn min(self, min: f64) -> Self {
        self.check(validators::min(min))
    }

    /// Requires a string made only of characters in `charset`.
    pub fn consists_of(self, charset: impl Into<String>) -> Self {
        self.check(validators::consists_of(charset))
    }

    /// Requires a string or array whose length lies in `min..=max`.
    pub fn len(self, min: usize, max: usize) -> Self {
        self.check(validators::length_range(min, max))
    }

    /// Requires the value to equal one of `allowed`.
    pub fn one_of(self, allowed: impl IntoIterator<Item = Value>) -> Self {
        self.check(validators::one_of(allowed))
    }

    /// Requires a string that looks like an email address.
    pub fn is_email(self) -> Self {
        self.check(validators::email())
    }

    /// Requires a string matching `pattern`.
    pub fn matches(self, pattern: regex::Regex) -> Self {
        self.check(validators::matches_regex(pattern))
    }

    /// Rejects empty strings, arrays and objects.
    pub fn not_empty(self) -> Self {
        self.check(validators::not_empty())
    }

    /// Runs any [`Validate`] implementation against the current value.
    pub fn check<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = Value>,
    {
        if self.skipped {
            return self;
        }
        if let Err(error) = validator.validate(self.slot.value()) {
            self.record(error);
        }
        self
    }

    /// Runs a user-supplied check.
    ///
    /// `check` receives the current value (`None` when absent) and the
    /// error constructors. An error it returns is recorded with its message
    /// preserved; its `param` defaults to this field's path.
    ///
    /// ```
    /// use assurance::prelude::*;
    /// use serde_json::json;
    ///
    /// let mut data = json!({ "name": "Jack" });
    /// let errors = Assurance::single(&mut data, "name")
    ///     .custom(|value, errors| match value.and_then(|v| v.as_str()) {
    ///         Some("Jack") => Err(errors.invalid_value("Jack is taken")),
    ///         _ => Ok(()),
    ///     })
    ///     .end();
    ///
    /// assert_eq!(errors[0].message, "Jack is taken");
    /// ```
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: FnOnce(Option<&Value>, &ErrorRegistry) -> Result<(), ValidationError>,
    {
        if self.skipped {
            return self;
        }
        if let Err(error) = check(self.slot.get(), &ERRORS) {
            self.record(error);
        }
        self
    }

    // ------------------------------------------------------------------------
    // Sanitizers
    // ------------------------------------------------------------------------

    /// Coerces numeric strings and numbers to an integer.
    pub fn to_int(self) -> Self {
        self.sanitize(sanitizers::to_int())
    }

    /// Coerces numeric strings to a float.
    pub fn to_float(self) -> Self {
        self.sanitize(sanitizers::to_float())
    }

    /// Trims surrounding whitespace from a string.
    pub fn trim(self) -> Self {
        self.sanitize(sanitizers::trim())
    }

    /// Lowercases a string.
    pub fn to_lowercase(self) -> Self {
        self.sanitize(sanitizers::to_lowercase())
    }

    /// Uppercases a string.
    pub fn to_uppercase(self) -> Self {
        self.sanitize(sanitizers::to_uppercase())
    }

    /// Runs any [`Sanitize`] implementation and writes its output back.
    ///
    /// A failed sanitizer records its error and leaves the value untouched.
    pub fn sanitize<S>(mut self, sanitizer: S) -> Self
    where
        S: Sanitize<Value = Value>,
    {
        if self.skipped {
            return self;
        }
        match sanitizer.sanitize(self.slot.value()) {
            Ok(value) => self.write(value),
            Err(error) => self.record(error),
        }
        self
    }

    // ------------------------------------------------------------------------
    // Nesting
    // ------------------------------------------------------------------------

    /// Enters the field's value as a new frame.
    ///
    /// Arrays call `visit` once per element, with the element as the frame
    /// and `field[index]` as its path. Objects call `visit` once with the
    /// object as the frame. A missing value is skipped; any other value
    /// records an `InvalidType` error.
    pub fn nest<F>(mut self, mut visit: F) -> Self
    where
        F: FnMut(&mut Scope<'_>),
    {
        if self.skipped {
            return self;
        }

        let depth = self.depth + 1;
        if depth > self.settings.max_depth {
            tracing::warn!(
                path = %self.path,
                max_depth = self.settings.max_depth,
                "nesting depth limit reached"
            );
            let error = ValidationError::validation(format!(
                "Nesting deeper than {} levels",
                self.settings.max_depth
            ))
            .with_detail("max_depth", self.settings.max_depth.to_string());
            self.record(error);
            return self;
        }

        let settings = self.settings;
        let mismatch = match self.slot.get_mut() {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => {
                tracing::debug!(path = %self.path, depth, elements = items.len(), "entering array frame");
                for (index, item) in items.iter_mut().enumerate() {
                    let mut scope = Scope::new(
                        item,
                        self.path.index(index),
                        depth,
                        settings,
                        self.errors.get_mut(),
                    );
                    visit(&mut scope);
                }
                tracing::debug!(path = %self.path, depth, errors = self.errors.get().len(), "leaving array frame");
                None
            }
            Some(value) if value.is_object() => {
                tracing::debug!(path = %self.path, depth, "entering object frame");
                let mut scope = Scope::new(
                    value,
                    self.path.clone(),
                    depth,
                    settings,
                    self.errors.get_mut(),
                );
                visit(&mut scope);
                tracing::debug!(path = %self.path, depth, errors = self.errors.get().len(), "leaving object frame");
                None
            }
            Some(other) => Some(describe(other)),
        };

        if let Some(actual) = mismatch {
            self.record(ValidationError::type_mismatch("array or object", actual));
        }
        self
    }

    // ------------------------------------------------------------------------
    // Results
    // ------------------------------------------------------------------------

    /// Ends the chain and returns every error collected so far.
    ///
    /// For chains borrowed from a session this is a snapshot of the whole
    /// session's errors, not only this field's.
    pub fn end(self) -> ValidationErrors {
        match self.errors {
            Sink::Borrowed(errors) => errors.clone(),
            Sink::Owned(errors) => errors,
        }
    }

    /// Errors collected so far.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        self.errors.get()
    }

    /// Whether any error has been collected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.get().has_errors()
    }

    /// Path of the field, with aliases applied.
    #[must_use]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Current value of the field, `None` when absent.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.slot.get()
    }

    /// Whether [`optional`](Self::optional) was called.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Whether the remaining steps are being skipped, after a failure or
    /// on a missing optional value.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    fn record(&mut self, mut error: ValidationError) {
        self.skipped = true;
        if error.param.is_none() {
            error.param = Some(self.path.to_string());
        }
        tracing::trace!(
            path = %self.path,
            kind = %error.kind,
            message = %error.message,
            "validation failed"
        );
        self.errors.get_mut().add(error);
    }

    fn write(&mut self, value: Value) {
        if !self.slot.set(value) {
            tracing::warn!(path = %self.path, "sanitized value not written back: frame holds no such field");
        }
    }
}
