//! # assurance
//!
//! Fluent, chained validation and sanitization of fields inside a
//! [`serde_json::Value`].
//!
//! A session ([`Assurance`]) borrows the root value. Each call to
//! [`Assurance::me`] starts a [`Chain`] on one field; chain steps check the
//! field's current value or rewrite it in place. Errors are collected in the
//! order they occur and returned by [`Assurance::end`].
//!
//! ## Quick Start
//!
//! ```
//! use assurance::prelude::*;
//! use serde_json::json;
//!
//! let mut person = json!({
//!     "name": "Jack",
//!     "age": " 21 ",
//!     "schedule": { "wednesday": { "start": 9 } },
//! });
//!
//! let mut session = Assurance::new(&mut person).with_alias("age", "Age");
//! session.me("name").is(ValueKind::String).len(1, 32);
//! session.me("age").to_int().is_int().gt(17.0);
//! session.nest("schedule", |schedule| {
//!     schedule.nest("wednesday", |day| {
//!         day.me("start").is(ValueKind::String);
//!     });
//! });
//!
//! let errors = session.end();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].kind, ErrorKind::InvalidType);
//! assert_eq!(errors[0].param.as_deref(), Some("schedule.wednesday.start"));
//! ```
//!
//! ## Nesting
//!
//! [`Chain::nest`] enters a field's value as a new frame: once per element
//! for arrays (paths `field[i]`), once for objects. Callbacks receive a
//! [`Scope`], which offers the same [`me`](Scope::me) and
//! [`nest`](Scope::nest) as the session plus [`it`](Scope::it) for the
//! frame's own value.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` when frames are entered and
//! left, `trace` for each recorded failure, `warn` when the depth limit is
//! hit or a sanitized value cannot be stored. No subscriber is installed.

mod chain;
pub mod error;
pub mod path;
pub mod prelude;
mod scope;
mod session;
pub mod settings;
mod slot;

pub use assurance_validator as validator;
pub use assurance_validator::foundation::{
    ERRORS, ErrorKind, ErrorRegistry, ValidationError, ValidationErrors, ValueKind,
};
pub use chain::Chain;
pub use error::ArgumentError;
pub use path::{FieldPath, PathSegment};
pub use scope::Scope;
pub use session::Assurance;
pub use settings::{DEFAULT_MAX_DEPTH, Settings};

/// Starts a single-field chain; see [`Assurance::single`].
pub fn single<'a>(root: &'a mut serde_json::Value, field: &str) -> Chain<'a> {
    Assurance::single(root, field)
}
