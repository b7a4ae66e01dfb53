//! Built-in validators
//!
//! Every validator takes a [`serde_json::Value`] so it can distinguish a wrong
//! type from a violated constraint.
//!
//! # Categories
//!
//! - **Kind**: [`IsKind`], [`IsInt`]
//! - **Numeric**: [`Positive`], [`GreaterThan`], [`LessThan`], [`Min`], [`Max`]
//! - **String**: [`ConsistsOf`], [`MatchesRegex`], [`Email`]
//! - **Collection**: [`LengthRange`], [`OneOf`]
//! - **Presence**: [`Required`], [`NotEmpty`]

pub mod collection;
pub mod kind;
pub mod numeric;
pub mod presence;
pub mod string;

pub use collection::{LengthRange, OneOf, length_range, one_of};
pub use kind::{IsInt, IsKind, is_int, is_kind};
pub use numeric::{
    GreaterThan, LessThan, Max, Min, Positive, greater_than, less_than, max, min, positive,
    positive_with, strictly_positive,
};
pub use presence::{NotEmpty, Required, not_empty, required};
pub use string::{ConsistsOf, Email, MatchesRegex, consists_of, email, matches_regex};
