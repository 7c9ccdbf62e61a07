// File: src/field.rs
// Purpose: Field identifiers, kinds and the immutable field registry

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Identifier of a field or field group, unique within one form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FieldId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FieldId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Semantic kind of a field together with its rule parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, e.g. a name
    Text {
        #[serde(default = "default_min_length")]
        min_length: usize,
    },

    /// Email address checked with the browser's built-in format rule
    Email {
        #[serde(default = "default_true")]
        required: bool,
    },

    /// Number with optional inclusive bounds
    Number {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
        /// Appended to the lower-bound message ("years old")
        #[serde(default)]
        unit: Option<String>,
    },

    /// Dropdown; the placeholder entry counts as no selection
    Choice {
        #[serde(default)]
        options: Vec<String>,
        #[serde(default)]
        placeholder: String,
    },

    /// Mutually exclusive options sharing one container
    RadioGroup { options: Vec<String> },
}

fn default_min_length() -> usize {
    3
}

fn default_true() -> bool {
    true
}

impl FieldKind {
    /// Where annotations for this field are placed
    pub fn anchor(&self) -> Anchor {
        match self {
            FieldKind::RadioGroup { .. } => Anchor::Group,
            _ => Anchor::Field,
        }
    }

    pub fn is_group(&self) -> bool {
        self.anchor() == Anchor::Group
    }
}

/// Anchor point for a field's annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Next to the input itself
    Field,
    /// On the container wrapping all options of a group
    Group,
}

/// One registered field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: FieldId,

    /// Noun interpolated into messages ("First Name", "country")
    pub label: String,

    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(id: impl Into<FieldId>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }

    fn check(&self) -> Result<()> {
        let problem = |msg: String| Err(FormError::Config(format!("field '{}': {}", self.id, msg)));

        if self.id.as_str().trim().is_empty() {
            return Err(FormError::Config("field with an empty id".to_string()));
        }
        if self.label.trim().is_empty() {
            return problem("label is empty".to_string());
        }

        match &self.kind {
            FieldKind::Text { .. } | FieldKind::Email { .. } => Ok(()),
            FieldKind::Number { min, max, .. } => {
                if min.is_some_and(|v| !v.is_finite()) || max.is_some_and(|v| !v.is_finite()) {
                    return problem("numeric bounds must be finite".to_string());
                }
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        return problem(format!("min {} is greater than max {}", min, max));
                    }
                }
                Ok(())
            }
            FieldKind::Choice { options, placeholder } => {
                if options.iter().any(|o| o.trim().is_empty()) {
                    return problem("options must not be empty strings".to_string());
                }
                let placeholder = placeholder.trim();
                if !placeholder.is_empty() && options.iter().any(|o| o.trim() == placeholder) {
                    return problem(format!("placeholder '{}' is listed as an option", placeholder));
                }
                Ok(())
            }
            FieldKind::RadioGroup { options } => {
                if options.is_empty() {
                    return problem("radio group has no options".to_string());
                }
                if options.iter().any(|o| o.trim().is_empty()) {
                    return problem("options must not be empty strings".to_string());
                }
                Ok(())
            }
        }
    }
}

/// Fields of one form, fixed at initialization and kept in declaration order
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: Vec<FieldSpec>,
    index: HashMap<FieldId, usize>,
}

impl FieldRegistry {
    /// Builds the registry, rejecting malformed rule tables
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self> {
        let mut index = HashMap::with_capacity(fields.len());

        for (position, field) in fields.iter().enumerate() {
            field.check()?;
            if index.insert(field.id.clone(), position).is_some() {
                return Err(FormError::Config(format!(
                    "field '{}' is registered twice",
                    field.id
                )));
            }
        }

        Ok(Self { fields, index })
    }

    /// Looks up a field; an unknown id is a programming error
    pub fn get(&self, id: &str) -> Result<&FieldSpec> {
        self.index
            .get(id)
            .map(|&position| &self.fields[position])
            .ok_or_else(|| FormError::UnknownField(FieldId::new(id)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &FieldId> {
        self.fields.iter().map(|f| &f.id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(id: &str) -> FieldSpec {
        FieldSpec::new(id, "Name", FieldKind::Text { min_length: 3 })
    }

    #[test]
    fn test_registry_keeps_declaration_order() {
        let registry = FieldRegistry::new(vec![text("b"), text("a"), text("c")]).unwrap();
        let ids: Vec<&str> = registry.ids().map(FieldId::as_str).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let err = FieldRegistry::new(vec![text("fname"), text("fname")]).unwrap_err();
        assert!(matches!(err, FormError::Config(msg) if msg.contains("registered twice")));
    }

    #[test]
    fn test_unknown_field_lookup() {
        let registry = FieldRegistry::new(vec![text("fname")]).unwrap();
        assert!(registry.get("fname").is_ok());
        assert!(matches!(
            registry.get("lname"),
            Err(FormError::UnknownField(id)) if id.as_str() == "lname"
        ));
    }

    #[test]
    fn test_malformed_rules_are_rejected() {
        let inverted = FieldSpec::new(
            "age",
            "Age",
            FieldKind::Number { min: Some(90.0), max: Some(18.0), unit: None },
        );
        assert!(FieldRegistry::new(vec![inverted]).is_err());

        let unbounded = FieldSpec::new(
            "age",
            "Age",
            FieldKind::Number { min: Some(f64::INFINITY), max: None, unit: None },
        );
        let err = FieldRegistry::new(vec![unbounded]).unwrap_err();
        assert!(matches!(err, FormError::Config(msg) if msg.contains("must be finite")));

        let empty_group = FieldSpec::new("gender", "gender", FieldKind::RadioGroup { options: vec![] });
        assert!(FieldRegistry::new(vec![empty_group]).is_err());

        let placeholder_option = FieldSpec::new(
            "country",
            "country",
            FieldKind::Choice {
                options: vec!["--".to_string(), "Canada".to_string()],
                placeholder: "--".to_string(),
            },
        );
        assert!(FieldRegistry::new(vec![placeholder_option]).is_err());

        // Compared after trimming, like the engine does
        let padded_placeholder = FieldSpec::new(
            "country",
            "country",
            FieldKind::Choice {
                options: vec!["--".to_string(), "Canada".to_string()],
                placeholder: " -- ".to_string(),
            },
        );
        assert!(FieldRegistry::new(vec![padded_placeholder]).is_err());

        let no_label = FieldSpec::new("fname", " ", FieldKind::Text { min_length: 3 });
        assert!(FieldRegistry::new(vec![no_label]).is_err());
    }

    #[test]
    fn test_anchor_by_kind() {
        assert_eq!(FieldKind::Email { required: true }.anchor(), Anchor::Field);
        assert_eq!(
            FieldKind::RadioGroup { options: vec!["a".into()] }.anchor(),
            Anchor::Group
        );
        assert!(FieldKind::RadioGroup { options: vec!["a".into()] }.is_group());
        assert!(!FieldKind::Choice { options: vec![], placeholder: String::new() }.is_group());
    }
}
