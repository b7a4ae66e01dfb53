//! # assurance-validator
//!
//! Leaf predicates and sanitizers over [`serde_json::Value`], plus the error
//! taxonomy they report with.
//!
//! The session engine in the `assurance` crate drives these one field at a
//! time; they can also be used on their own.
//!
//! ## Quick Start
//!
//! ```
//! use assurance_validator::prelude::*;
//! use serde_json::json;
//!
//! assert!(is_kind(ValueKind::Number).validate(&json!(12)).is_ok());
//!
//! let err = greater_than(50.0).validate(&json!("ffafa")).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::InvalidType);
//!
//! assert_eq!(to_int().sanitize(&json!("123")).unwrap(), json!(123));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Error Kinds
//!
//! - **`InvalidType`**: value present but of the wrong type
//! - **`InvalidValue`**: right type, constraint violated
//! - **`MissingField`**: required value absent, `null` or `""`
//! - **`ValidationError`**: the base kind

pub mod foundation;
mod macros;
pub mod prelude;
pub mod sanitizers;
pub mod validators;
