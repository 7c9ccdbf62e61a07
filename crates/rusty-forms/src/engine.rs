// File: src/engine.rs
// Purpose: Per-field rule catalogue, evaluated in order with the first failure winning

use rusty_forms_validation as check;
use rusty_forms_validation::Bound;

use crate::error::Result;
use crate::field::{FieldId, FieldKind, FieldRegistry, FieldSpec};
use crate::outcome::ValidationOutcome;
use crate::values::ValueSource;

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address (e.g., user@mail.com).";

/// Stateless evaluator over a fixed field registry.
///
/// Evaluation reads only the value of the field being checked, so it is a
/// pure function of that value: same input, same outcome.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    registry: FieldRegistry,
}

impl RuleEngine {
    pub fn new(registry: FieldRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Evaluates a registered field against the value currently held by `source`.
    ///
    /// Returns `Err` only for programming errors (unknown field); user input
    /// problems come back as `Ok(ValidationOutcome::Invalid { .. })`.
    pub fn evaluate(&self, id: &FieldId, source: &dyn ValueSource) -> Result<ValidationOutcome> {
        let spec = self.registry.get(id.as_str())?;
        let raw = source.value_of(id);
        Ok(Self::run(spec, raw.as_deref().unwrap_or("")))
    }

    /// Evaluates a registered field against an explicit raw value
    pub fn evaluate_value(&self, id: &str, raw: &str) -> Result<ValidationOutcome> {
        let spec = self.registry.get(id)?;
        Ok(Self::run(spec, raw))
    }

    fn run(spec: &FieldSpec, raw: &str) -> ValidationOutcome {
        let value = raw.trim();
        tracing::trace!(field = %spec.id, "evaluating rules");

        let outcome = match check_rules(spec, value) {
            Some(message) => ValidationOutcome::invalid(message),
            None => ValidationOutcome::Valid,
        };

        if let Some(message) = outcome.message() {
            tracing::debug!(field = %spec.id, "rule failed: {}", message);
        }
        outcome
    }
}

/// Message of the first failing rule, if any. `value` is already trimmed.
fn check_rules(spec: &FieldSpec, value: &str) -> Option<String> {
    let label = spec.label.as_str();

    match &spec.kind {
        FieldKind::Text { min_length } => {
            if value.is_empty() {
                return Some(format!("{} cannot be empty.", label));
            }
            if check::validate_min_length(value, *min_length).is_err() {
                return Some(format!(
                    "{} must be at least {} characters.",
                    label, min_length
                ));
            }
            None
        }

        FieldKind::Email { required } => {
            // An empty optional email passes the built-in check
            if value.is_empty() && !required {
                return None;
            }
            (!check::is_valid_email(value)).then(|| EMAIL_MESSAGE.to_string())
        }

        FieldKind::Number { min, max, unit } => {
            if value.is_empty() {
                return Some(format!("{} is required.", label));
            }
            let Some(number) = check::parse_number(value) else {
                return Some(format!("{} must be a number.", label));
            };
            match check::check_bounds(number, *min, *max) {
                Bound::Below => Some(lower_bound_message(min.unwrap_or_default(), unit.as_deref())),
                Bound::Above => Some(format!(
                    "{} cannot be higher than {}.",
                    label,
                    max.unwrap_or_default()
                )),
                Bound::Within => None,
            }
        }

        FieldKind::Choice { options, placeholder } => {
            let unselected = value.is_empty()
                || value == placeholder.trim()
                || (!options.is_empty() && !check::is_one_of(value, options));
            unselected.then(|| format!("Please select a {} from the list.", label))
        }

        FieldKind::RadioGroup { options } => {
            let unselected = value.is_empty() || !check::is_one_of(value, options);
            unselected.then(|| format!("Please select a {}.", label))
        }
    }
}

fn lower_bound_message(min: f64, unit: Option<&str>) -> String {
    match unit {
        Some(unit) if !unit.trim().is_empty() => {
            format!("You must be at least {} {}.", min, unit.trim())
        }
        _ => format!("You must be at least {}.", min),
    }
}
