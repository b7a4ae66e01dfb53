//! Validation sessions
//!
//! An [`Assurance`] borrows the root value for its whole lifetime, collects
//! errors from every chain started on it and hands them back on
//! [`end`](Assurance::end). Sanitizers write straight into the borrowed root.

use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use assurance_validator::foundation::{ValidationError, ValidationErrors};

use crate::chain::{Chain, Sink};
use crate::error::ArgumentError;
use crate::path::FieldPath;
use crate::scope::Scope;
use crate::settings::Settings;
use crate::slot::Slot;

static DEFAULT_SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::default);

/// A validation session over one root value.
///
/// # Examples
///
/// ```
/// use assurance::prelude::*;
/// use serde_json::json;
///
/// let mut person = json!({
///     "name": "Jack",
///     "age": "21",
///     "likes": ["cheese", 3],
/// });
///
/// let mut session = Assurance::new(&mut person);
/// session.me("name").is(ValueKind::String);
/// session.me("age").to_int().is_int().is_positive();
/// session.nest("likes", |like| {
///     like.it().is(ValueKind::String);
/// });
///
/// let errors = session.end();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].param.as_deref(), Some("likes[1]"));
/// assert_eq!(person["age"], json!(21));
/// ```
#[derive(Debug)]
pub struct Assurance<'a> {
    root: &'a mut Value,
    settings: Settings,
    errors: ValidationErrors,
}

impl<'a> Assurance<'a> {
    /// Starts a session with default settings.
    pub fn new(root: &'a mut Value) -> Self {
        Self::with_settings(root, Settings::default())
    }

    /// Starts a session with explicit settings.
    pub fn with_settings(root: &'a mut Value, settings: Settings) -> Self {
        Self {
            root,
            settings,
            errors: ValidationErrors::new(),
        }
    }

    /// Starts a session from the positional `(onlyFields, alias)` arguments.
    ///
    /// See [`Settings::from_args`] for the accepted shapes.
    pub fn from_args(
        root: &'a mut Value,
        only: Option<Value>,
        alias: Option<Value>,
    ) -> Result<Self, ArgumentError> {
        Ok(Self::with_settings(root, Settings::from_args(only, alias)?))
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Restricts error reporting to the given root-level fields.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_only<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.settings.only = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Reports `field` as `display` in error paths.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_alias(mut self, field: impl Into<String>, display: impl Into<String>) -> Self {
        self.settings
            .aliases
            .get_or_insert_with(IndexMap::new)
            .insert(field.into(), display.into());
        self
    }

    /// Adds several aliases at once.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.settings
            .aliases
            .get_or_insert_with(IndexMap::new)
            .extend(aliases.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the deepest level nesting callbacks may run at.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.settings.max_depth = max_depth;
        self
    }

    /// The allow-list, if any.
    #[must_use]
    pub fn only(&self) -> Option<&IndexSet<String>> {
        self.settings.only.as_ref()
    }

    /// The alias map, if any.
    #[must_use]
    pub fn aliases(&self) -> Option<&IndexMap<String, String>> {
        self.settings.aliases.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ------------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------------

    /// The root frame.
    pub fn scope(&mut self) -> Scope<'_> {
        Scope::new(
            &mut *self.root,
            FieldPath::root(),
            0,
            &self.settings,
            &mut self.errors,
        )
    }

    /// Starts a chain on a root-level field.
    pub fn me(&mut self, field: &str) -> Chain<'_> {
        self.scope().into_field(field)
    }

    /// Nests into a root-level field; see [`Chain::nest`].
    pub fn nest<F>(&mut self, field: &str, visit: F)
    where
        F: FnMut(&mut Scope<'_>),
    {
        self.me(field).nest(visit);
    }

    /// Chain on one field of `root`, with its own error collector.
    ///
    /// ```
    /// use assurance::prelude::*;
    /// use serde_json::json;
    ///
    /// let mut data = json!({ "age": 21 });
    /// let errors = Assurance::single(&mut data, "age").max(18.0).end();
    /// assert_eq!(errors[0].param.as_deref(), Some("age"));
    /// ```
    pub fn single(root: &'a mut Value, field: &str) -> Chain<'a> {
        Chain::new(
            Slot::resolve(root, field),
            FieldPath::from(field),
            0,
            &DEFAULT_SETTINGS,
            Sink::Owned(ValidationErrors::new()),
        )
    }

    // ------------------------------------------------------------------------
    // Results
    // ------------------------------------------------------------------------

    /// Every error collected so far, in the order recorded.
    ///
    /// Calling `end` again returns the same errors plus any recorded since;
    /// use [`reset`](Self::reset) to start over.
    pub fn end(&self) -> &[ValidationError] {
        tracing::debug!(errors = self.errors.len(), "validation session ended");
        self.errors.errors()
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    /// Clears the collected errors.
    pub fn reset(&mut self) {
        self.errors.clear();
    }

    /// Ends the session, returning the collected errors.
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// The root value, with sanitized fields written back.
    #[must_use]
    pub fn root(&self) -> &Value {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assurance_validator::foundation::ValueKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn builders_configure_settings() {
        let mut root = json!({});
        let session = Assurance::new(&mut root)
            .with_only(["age"])
            .with_alias("age", "AGE")
            .with_aliases([("name", "NAME")])
            .with_max_depth(3);

        assert_eq!(session.only().map(IndexSet::len), Some(1));
        assert_eq!(session.aliases().map(IndexMap::len), Some(2));
        assert_eq!(session.settings().max_depth, 3);
    }

    #[test]
    fn end_is_cumulative_until_reset() {
        let mut root = json!({ "a": 1, "b": 2 });
        let mut session = Assurance::new(&mut root);

        session.me("a").is(ValueKind::String);
        assert_eq!(session.end().len(), 1);

        session.me("b").is(ValueKind::String);
        assert_eq!(session.end().len(), 2);

        session.reset();
        assert!(!session.has_errors());
        assert!(session.end().is_empty());
    }

    #[test]
    fn alias_renames_param() {
        let mut root = json!({ "age": "x" });
        let mut session =
            Assurance::from_args(&mut root, Some(json!({ "age": "ALIAS" })), None).unwrap();
        session.me("age").is(ValueKind::Number);

        assert_eq!(session.end()[0].param.as_deref(), Some("ALIAS"));
    }

    #[test]
    fn from_args_rejects_bad_alias() {
        let mut root = json!({});
        let err = Assurance::from_args(&mut root, Some(json!("age")), Some(json!(1))).unwrap_err();
        assert_eq!(err, ArgumentError::AliasNotObject);
    }

    #[test]
    fn single_has_private_collector() {
        let mut root = json!({ "age": -1 });
        let errors = Assurance::single(&mut root, "age").is_positive().end();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn into_errors_returns_collector() {
        let mut root = json!({ "a": "x" });
        let mut session = Assurance::new(&mut root);
        session.me("a").is_int();
        let errors = session.into_errors();
        assert_eq!(errors.len(), 1);
    }
}
