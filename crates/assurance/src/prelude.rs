//! Prelude module for convenient imports.
//!
//! ```
//! use assurance::prelude::*;
//! ```

pub use crate::{
    ArgumentError, Assurance, Chain, ERRORS, ErrorKind, ErrorRegistry, FieldPath, Scope,
    Settings, ValidationError, ValidationErrors, ValueKind,
};

pub use assurance_validator::foundation::{Sanitize, Validate};
