//! Traversal frames
//!
//! A [`Scope`] is one frame of the traversal: the value fields are resolved
//! against, its path from the root and its nesting depth. Nested callbacks
//! receive a fresh child scope borrowed from their parent's chain, so frames
//! are strictly last-in first-out and a callback can never reach the frame
//! of a sibling or of its caller.

use serde_json::Value;

use assurance_validator::foundation::ValidationErrors;

use crate::chain::{Chain, Sink};
use crate::path::FieldPath;
use crate::settings::Settings;
use crate::slot::Slot;

/// One traversal frame.
///
/// The root frame is obtained from [`Assurance::scope`](crate::Assurance::scope);
/// nested frames are handed to the callback of [`Chain::nest`].
#[derive(Debug)]
pub struct Scope<'a> {
    container: &'a mut Value,
    path: FieldPath,
    depth: usize,
    settings: &'a Settings,
    errors: &'a mut ValidationErrors,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(
        container: &'a mut Value,
        path: FieldPath,
        depth: usize,
        settings: &'a Settings,
        errors: &'a mut ValidationErrors,
    ) -> Self {
        Self {
            container,
            path,
            depth,
            settings,
            errors,
        }
    }

    /// Starts a chain on `field` of this frame.
    ///
    /// Object frames resolve `field` as a key, array frames as an index.
    /// In the root frame, a field outside the session allow-list yields a
    /// chain whose steps do nothing.
    pub fn me(&mut self, field: &str) -> Chain<'_> {
        field_chain(
            &mut *self.container,
            &self.path,
            self.depth,
            self.settings,
            &mut *self.errors,
            field,
        )
    }

    /// Nests into `field` of this frame; see [`Chain::nest`].
    pub fn nest<F>(&mut self, field: &str, visit: F)
    where
        F: FnMut(&mut Scope<'_>),
    {
        self.me(field).nest(visit);
    }

    /// Starts a chain on the frame's own value.
    ///
    /// Inside an array callback this is the current element.
    pub fn it(&mut self) -> Chain<'_> {
        Chain::new(
            Slot::Value(&mut *self.container),
            self.path.clone(),
            self.depth,
            self.settings,
            Sink::Borrowed(&mut *self.errors),
        )
    }

    /// Consumes the frame into a chain on `field`, keeping the full borrow.
    pub(crate) fn into_field(self, field: &str) -> Chain<'a> {
        field_chain(
            self.container,
            &self.path,
            self.depth,
            self.settings,
            self.errors,
            field,
        )
    }

    /// Path of this frame.
    #[must_use]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Nesting depth; the root frame is `0`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The frame's value.
    #[must_use]
    pub fn value(&self) -> &Value {
        self.container
    }

    /// Errors collected by the session so far.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        self.errors
    }
}

fn field_chain<'s>(
    container: &'s mut Value,
    path: &FieldPath,
    depth: usize,
    settings: &'s Settings,
    errors: &'s mut ValidationErrors,
    field: &str,
) -> Chain<'s> {
    let sink = Sink::Borrowed(errors);
    let path = path.key(settings.display_name(field));

    if depth == 0 && !settings.allows(field) {
        tracing::trace!(field, "field not in allow-list, chain detached");
        return Chain::new(Slot::Detached, path, depth, settings, sink);
    }

    Chain::new(Slot::resolve(container, field), path, depth, settings, sink)
}
