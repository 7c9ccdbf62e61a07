// File: src/values.rs
// Purpose: Read capability over current field values and the submission snapshot

use std::borrow::Cow;
use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::field::{FieldId, FieldRegistry};

/// Reads the current raw value of a field from the UI layer.
///
/// Resolved once when the form is initialised. `None` means the UI holds no
/// value (an unchecked radio group, a missing input) and is treated as empty.
pub trait ValueSource {
    fn value_of(&self, id: &FieldId) -> Option<Cow<'_, str>>;
}

impl<T: ValueSource + ?Sized> ValueSource for &T {
    fn value_of(&self, id: &FieldId) -> Option<Cow<'_, str>> {
        (**self).value_of(id)
    }
}

/// In-memory value store, used by tests and headless integrations
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    values: HashMap<FieldId, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the raw value of a field (user typed or picked something)
    pub fn set(&mut self, id: impl Into<FieldId>, value: impl Into<String>) -> &mut Self {
        self.values.insert(id.into(), value.into());
        self
    }

    /// Checks one option of a radio group; the previous choice is replaced
    pub fn select(&mut self, group: impl Into<FieldId>, option: impl Into<String>) -> &mut Self {
        self.set(group, option)
    }

    pub fn clear(&mut self, id: &str) -> &mut Self {
        self.values.remove(id);
        self
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }
}

impl ValueSource for FieldValues {
    fn value_of(&self, id: &FieldId) -> Option<Cow<'_, str>> {
        self.values.get(id).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl<K: Into<FieldId>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Read-only copy of every registered field's trimmed value, in registry order.
///
/// Handed to the transport collaborator once the form is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    entries: Vec<(FieldId, String)>,
}

impl FormSnapshot {
    pub fn capture(registry: &FieldRegistry, source: &dyn ValueSource) -> Self {
        let entries = registry
            .ids()
            .map(|id| {
                let value = source
                    .value_of(id)
                    .map(|v| v.trim().to_string())
                    .unwrap_or_default();
                (id.clone(), value)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(field, _)| field.as_str() == id)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &str)> {
        self.entries.iter().map(|(id, value)| (id, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, value) in &self.entries {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldKind, FieldSpec};

    #[test]
    fn test_field_values_set_and_clear() {
        let mut values = FieldValues::new();
        values.set("fname", "Alice").select("gender", "female");
        assert_eq!(values.get("fname"), Some("Alice"));

        values.select("gender", "male");
        assert_eq!(values.get("gender"), Some("male"));

        values.clear("gender");
        assert_eq!(values.value_of(&FieldId::new("gender")), None);
    }

    #[test]
    fn test_snapshot_is_trimmed_and_ordered() {
        let registry = FieldRegistry::new(vec![
            FieldSpec::new("fname", "First Name", FieldKind::Text { min_length: 3 }),
            FieldSpec::new("email", "Email", FieldKind::Email { required: true }),
        ])
        .unwrap();
        let values: FieldValues = [("email", " a@b.co "), ("fname", "  Alice")]
            .into_iter()
            .collect();

        let snapshot = FormSnapshot::capture(&registry, &values);
        let pairs: Vec<(&str, &str)> = snapshot.iter().map(|(k, v)| (k.as_str(), v)).collect();
        assert_eq!(pairs, vec![("fname", "Alice"), ("email", "a@b.co")]);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json, serde_json::json!({"fname": "Alice", "email": "a@b.co"}));
    }
}
