//! Session configuration
//!
//! [`Settings`] is shared read-only by every scope and chain of a session.
//! It can be built with typed setters or parsed from loosely-shaped JSON
//! arguments with [`Settings::from_args`].

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use assurance_validator::foundation::describe;

use crate::error::ArgumentError;

/// Default bound on nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for one [`Assurance`](crate::Assurance) session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root-level field names allowed to produce errors; `None` allows all.
    pub only: Option<IndexSet<String>>,
    /// Field name to display name used in error paths.
    pub aliases: Option<IndexMap<String, String>>,
    /// Deepest nesting level a callback may be entered at.
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            only: None,
            aliases: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Settings {
    /// Builds settings from the positional `(onlyFields, alias)` calling form.
    ///
    /// - `second` may be a string or array of strings (allow-list), or an
    ///   object (alias map) when `third` is absent.
    /// - `third`, when present, must be an object mapping names to strings.
    pub fn from_args(second: Option<Value>, third: Option<Value>) -> Result<Self, ArgumentError> {
        let mut settings = Self::default();

        match (second, third) {
            (None | Some(Value::Null), None) => {}
            (Some(Value::Object(map)), None) => {
                settings.aliases = Some(parse_aliases(&Value::Object(map))?);
            }
            (second, third) => {
                if let Some(only) = second.filter(|v| !v.is_null()) {
                    settings.only = Some(parse_only(&only)?);
                }
                if let Some(alias) = third {
                    settings.aliases = Some(parse_aliases(&alias)?);
                }
            }
        }

        Ok(settings)
    }

    /// Whether `field`, declared in the root frame, may produce errors.
    #[must_use]
    pub fn allows(&self, field: &str) -> bool {
        self.only.as_ref().is_none_or(|only| only.contains(field))
    }

    /// The display name for `field`.
    #[must_use]
    pub fn display_name<'a>(&'a self, field: &'a str) -> &'a str {
        self.aliases
            .as_ref()
            .and_then(|aliases| aliases.get(field))
            .map_or(field, String::as_str)
    }
}

fn parse_only(value: &Value) -> Result<IndexSet<String>, ArgumentError> {
    match value {
        Value::String(field) => Ok(IndexSet::from([field.clone()])),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or(ArgumentError::OnlyFieldsNotStrings {
                        actual: describe(item),
                    })
            })
            .collect(),
        other => Err(ArgumentError::OnlyFieldsNotStrings {
            actual: describe(other),
        }),
    }
}

fn parse_aliases(value: &Value) -> Result<IndexMap<String, String>, ArgumentError> {
    let Value::Object(map) = value else {
        return Err(ArgumentError::AliasNotObject);
    };
    map.iter()
        .map(|(field, display)| {
            display
                .as_str()
                .map(|display| (field.clone(), display.to_owned()))
                .ok_or(ArgumentError::AliasNotObject)
        })
        .collect()
}
