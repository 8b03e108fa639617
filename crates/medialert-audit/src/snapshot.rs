//! Tolerant normalization of audit snapshots.

use serde_json::{Map, Value};
use tracing::warn;

/// A normalized audit snapshot: a flat map of field name to value.
///
/// Built from whatever the backend stored — an object, a JSON-encoded
/// string, or nothing. Construction never fails; every unusable input
/// becomes the empty snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    fields: Map<String, Value>,
}

impl Snapshot {
    /// The empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize a raw snapshot value.
    pub fn parse(raw: &Value) -> Self {
        match raw {
            Value::Object(map) => Self {
                fields: map.clone(),
            },
            Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
                Ok(Value::Object(map)) => Self { fields: map },
                Ok(_) => Self::empty(),
                Err(e) => {
                    warn!(error = %e, "Snapshot string is not valid JSON, treating as empty");
                    Self::empty()
                }
            },
            _ => Self::empty(),
        }
    }

    /// Whether the snapshot carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up one field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Field names.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_passes_through() {
        let snap = Snapshot::parse(&json!({ "nombre": "Ana" }));
        assert_eq!(snap.get("nombre"), Some(&json!("Ana")));
    }

    #[test]
    fn test_encoded_string_is_decoded() {
        let snap = Snapshot::parse(&json!("{\"estado\":\"activa\"}"));
        assert_eq!(snap.get("estado"), Some(&json!("activa")));
    }

    #[test]
    fn test_garbage_string_degrades_to_empty() {
        let snap = Snapshot::parse(&json!("{not json"));
        assert!(snap.is_empty());
    }

    #[test]
    fn test_non_object_inputs_degrade_to_empty() {
        assert!(Snapshot::parse(&Value::Null).is_empty());
        assert!(Snapshot::parse(&json!(42)).is_empty());
        assert!(Snapshot::parse(&json!([1, 2])).is_empty());
        assert!(Snapshot::parse(&json!("\"just a string\"")).is_empty());
    }
}
