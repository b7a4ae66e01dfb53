//! Programmer errors
//!
//! These are returned from construction and never collected: they describe
//! misuse of the API rather than invalid data.

use assurance_validator::foundation::UnknownKindError;

/// Invalid arguments passed when building a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// The alias argument was not a map of field names to display names.
    #[error("alias not an object")]
    AliasNotObject,

    /// The allow-list argument was neither a string nor an array of strings.
    #[error("onlyFields must be a string or an array of strings, got {actual}")]
    OnlyFieldsNotStrings {
        /// Kind of the rejected argument.
        actual: &'static str,
    },

    /// A type tag that is not one of the recognized kinds.
    #[error(transparent)]
    UnknownKind(#[from] UnknownKindError),
}

impl ArgumentError {
    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AliasNotObject => "ASSURE_ALIAS_NOT_OBJECT",
            Self::OnlyFieldsNotStrings { .. } => "ASSURE_ONLY_NOT_STRINGS",
            Self::UnknownKind(_) => "ASSURE_UNKNOWN_KIND",
        }
    }
}
