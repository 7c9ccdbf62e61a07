// File: src/config.rs
// Purpose: Form definitions loaded from TOML (fields, rule parameters, status texts)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::FormError;
use crate::field::{FieldKind, FieldRegistry, FieldSpec};

/// A complete form definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormMeta,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// Form-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormMeta {
    #[serde(default = "default_name")]
    pub name: String,

    /// Status line while a submission is being checked
    #[serde(default = "default_pending_text")]
    pub pending_text: String,

    #[serde(default = "default_success_text")]
    pub success_text: String,

    #[serde(default = "default_failure_text")]
    pub failure_text: String,

    /// Status line when the form passed but could not be handed off
    #[serde(default = "default_handoff_failed_text")]
    pub handoff_failed_text: String,
}

// Default values
fn default_name() -> String {
    "form".to_string()
}

fn default_pending_text() -> String {
    "Checking for errors...".to_string()
}

fn default_success_text() -> String {
    "All data is valid! Submitting form...".to_string()
}

fn default_failure_text() -> String {
    "Please fix the errors highlighted in red above.".to_string()
}

fn default_handoff_failed_text() -> String {
    "The form could not be submitted. Please try again.".to_string()
}

impl Default for FormMeta {
    fn default() -> Self {
        Self {
            name: default_name(),
            pending_text: default_pending_text(),
            success_text: default_success_text(),
            failure_text: default_failure_text(),
            handoff_failed_text: default_handoff_failed_text(),
        }
    }
}

impl FormConfig {
    /// Load a form definition from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form definition: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse form definition: {:?}", path))
    }

    /// Parse a form definition and check its rule table
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FormConfig = toml::from_str(content)?;
        config.registry()?;
        Ok(config)
    }

    /// Validated, immutable field registry for this form
    pub fn registry(&self) -> Result<FieldRegistry, FormError> {
        if self.fields.is_empty() {
            return Err(FormError::Config(format!(
                "form '{}' declares no fields",
                self.form.name
            )));
        }
        FieldRegistry::new(self.fields.clone())
    }

    /// The sign-up form: first name, email, age, country and gender
    pub fn registration() -> Self {
        Self {
            form: FormMeta {
                name: "registration".to_string(),
                ..FormMeta::default()
            },
            fields: vec![
                FieldSpec::new("fname", "First Name", FieldKind::Text { min_length: 3 }),
                FieldSpec::new("email", "Email", FieldKind::Email { required: true }),
                FieldSpec::new(
                    "age",
                    "Age",
                    FieldKind::Number {
                        min: Some(18.0),
                        max: Some(90.0),
                        unit: Some("years old".to_string()),
                    },
                ),
                FieldSpec::new(
                    "country",
                    "country",
                    FieldKind::Choice {
                        options: ["Canada", "USA", "Mexico", "United Kingdom", "India", "Australia"]
                            .into_iter()
                            .map(String::from)
                            .collect(),
                        placeholder: String::new(),
                    },
                ),
                FieldSpec::new(
                    "gender",
                    "gender",
                    FieldKind::RadioGroup {
                        options: ["male", "female", "other"]
                            .into_iter()
                            .map(String::from)
                            .collect(),
                    },
                ),
            ],
        }
    }
}
