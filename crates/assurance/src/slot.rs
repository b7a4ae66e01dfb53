//! Field resolution
//!
//! A [`Slot`] is the mutable handle to one field of the current frame: it
//! reads the field's current value and writes sanitized values back into the
//! owning container.

use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Handle to a field inside its container.
#[derive(Debug)]
pub(crate) enum Slot<'a> {
    /// Member of an object; the key may not exist yet.
    Member {
        map: &'a mut Map<String, Value>,
        key: String,
    },
    /// An existing value: an array element or a whole frame value.
    Value(&'a mut Value),
    /// The container cannot hold the field (scalar frame, index out of range).
    ///
    /// Written values are kept here for the rest of the chain only.
    Orphan(Option<Value>),
    /// Field excluded by the allow-list; never read or written.
    Detached,
}

impl<'a> Slot<'a> {
    /// Resolves `name` against `container`.
    ///
    /// Objects resolve by key. Arrays resolve numeric names as indices.
    pub(crate) fn resolve(container: &'a mut Value, name: &str) -> Self {
        match container {
            Value::Object(map) => Slot::Member {
                map,
                key: name.to_owned(),
            },
            Value::Array(items) => match name.parse::<usize>() {
                Ok(index) if index < items.len() => Slot::Value(&mut items[index]),
                _ => Slot::Orphan(None),
            },
            _ => Slot::Orphan(None),
        }
    }

    /// Current value, if the field exists.
    pub(crate) fn get(&self) -> Option<&Value> {
        match self {
            Slot::Member { map, key } => map.get(key.as_str()),
            Slot::Value(value) => Some(&**value),
            Slot::Orphan(local) => local.as_ref(),
            Slot::Detached => None,
        }
    }

    /// Current value, with absent fields reading as `null`.
    pub(crate) fn value(&self) -> &Value {
        self.get().unwrap_or(&NULL)
    }

    /// Mutable access to the current value, if the field exists.
    pub(crate) fn get_mut(&mut self) -> Option<&mut Value> {
        match self {
            Slot::Member { map, key } => map.get_mut(key.as_str()),
            Slot::Value(value) => Some(&mut **value),
            Slot::Orphan(local) => local.as_mut(),
            Slot::Detached => None,
        }
    }

    /// Writes `value` into the container.
    ///
    /// Returns `false` when the value could not reach the container.
    pub(crate) fn set(&mut self, value: Value) -> bool {
        match self {
            Slot::Member { map, key } => {
                map.insert(key.clone(), value);
                true
            }
            Slot::Value(slot) => {
                **slot = value;
                true
            }
            Slot::Orphan(local) => {
                *local = Some(value);
                false
            }
            Slot::Detached => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn member_reads_and_inserts() {
        let mut root = json!({ "age": 21 });

        let slot = Slot::resolve(&mut root, "age");
        assert_eq!(slot.get(), Some(&json!(21)));

        let mut slot = Slot::resolve(&mut root, "missing");
        assert_eq!(slot.get(), None);
        assert_eq!(slot.value(), &Value::Null);
        assert!(slot.set(json!("exists")));

        assert_eq!(root["missing"], json!("exists"));
    }

    #[test]
    fn array_resolves_numeric_names() {
        let mut root = json!(["a", "b"]);

        let mut slot = Slot::resolve(&mut root, "1");
        assert_eq!(slot.get(), Some(&json!("b")));
        assert!(slot.set(json!("c")));
        assert_eq!(root, json!(["a", "c"]));

        assert!(Slot::resolve(&mut root, "5").get().is_none());
        assert!(Slot::resolve(&mut root, "x").get().is_none());
    }

    #[test]
    fn scalar_container_keeps_writes_local() {
        let mut root = json!(3);
        let mut slot = Slot::resolve(&mut root, "any");
        assert!(slot.get().is_none());
        assert!(!slot.set(json!(1)));
        assert_eq!(slot.get(), Some(&json!(1)));
        assert_eq!(root, json!(3));
    }
}
