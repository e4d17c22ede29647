//! Change sets for partial updates.
//!
//! A [`ChangeSet`] holds only the fields whose edited value differs from the
//! original record. It is the only payload sent to an update; fields it does
//! not mention are left untouched by the backend.

use serde::Serialize;
use serde_json::{Map, Value};

/// The minimal diff of edited fields sent on update.
///
/// # Example
///
/// ```rust
/// use boxinator_admin::rest::ChangeSet;
/// use serde_json::json;
///
/// let original = json!({"firstName": "Jane", "email": "j@x.com"});
/// let edited = json!({"firstName": "Jane", "email": "jane@x.com"});
///
/// let changes = ChangeSet::between(&original, &edited);
/// assert_eq!(changes.to_json(), json!({"email": "jane@x.com"}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChangeSet(Map<String, Value>);

impl ChangeSet {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Diffs two JSON objects.
    ///
    /// A key is included if and only if it is present in `current` and its
    /// value differs from `original`. Nested objects are diffed recursively.
    /// Keys only present in `original` are never included: a partial update
    /// cannot remove a field.
    #[must_use]
    pub fn between(original: &Value, current: &Value) -> Self {
        match diff_json_objects(original, current) {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Records a changed field.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of changed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if `field` changed.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns the new value of `field`, if it changed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Iterates over the changed field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the change set as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<ChangeSet> for Value {
    fn from(changes: ChangeSet) -> Self {
        Self::Object(changes.0)
    }
}

fn diff_json_objects(original: &Value, current: &Value) -> Value {
    match (original, current) {
        (Value::Object(orig_map), Value::Object(curr_map)) => {
            let mut diff = Map::new();

            for (key, curr_value) in curr_map {
                match orig_map.get(key) {
                    Some(orig_value) if orig_value == curr_value => {}
                    Some(orig_value) if orig_value.is_object() && curr_value.is_object() => {
                        let nested = diff_json_objects(orig_value, curr_value);
                        if nested.as_object().is_some_and(|m| !m.is_empty()) {
                            diff.insert(key.clone(), nested);
                        }
                    }
                    _ => {
                        diff.insert(key.clone(), curr_value.clone());
                    }
                }
            }

            Value::Object(diff)
        }
        _ if original == current => Value::Null,
        _ => current.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unchanged_objects_produce_empty_change_set() {
        let record = json!({"receiver": "Kari", "weight": 4});
        assert!(ChangeSet::between(&record, &record).is_empty());
    }

    #[test]
    fn test_only_modified_fields_are_included() {
        let original = json!({"id": 1, "firstName": "Jane", "email": "j@x.com"});
        let edited = json!({"id": 1, "firstName": "Jane", "email": "jane@x.com"});

        let changes = ChangeSet::between(&original, &edited);

        assert_eq!(changes.len(), 1);
        assert_eq!(changes.get("email"), Some(&json!("jane@x.com")));
        assert!(!changes.contains("firstName"));
    }

    #[test]
    fn test_fields_missing_from_original_are_included() {
        let changes = ChangeSet::between(&json!({}), &json!({"boxColour": "#ff0000"}));
        assert_eq!(changes.to_json(), json!({"boxColour": "#ff0000"}));
    }

    #[test]
    fn test_removed_fields_are_not_included() {
        let changes = ChangeSet::between(&json!({"zipCode": 1234}), &json!({}));
        assert!(changes.is_empty());
    }

    #[test]
    fn test_nested_objects_are_diffed_recursively() {
        let original = json!({"destinationCountry": {"id": 2, "name": "Norway"}});
        let edited = json!({"destinationCountry": {"id": 2, "name": "Sweden"}});

        let changes = ChangeSet::between(&original, &edited);
        assert_eq!(
            changes.to_json(),
            json!({"destinationCountry": {"name": "Sweden"}})
        );
    }

    #[test]
    fn test_type_change_is_a_change() {
        let changes = ChangeSet::between(&json!({"weight": 4}), &json!({"weight": "4"}));
        assert_eq!(changes.get("weight"), Some(&json!("4")));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut changes = ChangeSet::new();
        changes.insert("weight", json!(12));
        changes.insert("boxColour", json!("blue"));

        assert_eq!(
            serde_json::to_value(&changes).unwrap(),
            json!({"boxColour": "blue", "weight": 12})
        );
        assert_eq!(changes.fields().count(), 2);
    }
}
