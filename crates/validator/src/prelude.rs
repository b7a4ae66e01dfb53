//! Prelude module for convenient imports.
//!
//! ```
//! use assurance_validator::prelude::*;
//! ```

pub use crate::foundation::{
    ERRORS, ErrorKind, ErrorRegistry, Sanitize, Validate, ValidationError, ValidationErrors,
    ValueKind, is_missing,
};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::sanitizers::{
    StringTransform, ToFloat, ToInt, to_float, to_int, to_lowercase, to_uppercase, trim,
};
