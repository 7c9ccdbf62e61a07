// File: src/outcome.rs
// Purpose: Validation outcomes, per-field visual state and the form decision

use serde::Serialize;

/// Result of evaluating one field's rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationOutcome {
    Valid,
    Invalid { message: String },
}

impl ValidationOutcome {
    /// Failing outcome; the message is what the user sees next to the field
    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "invalid outcome without a message");
        Self::Invalid { message }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid { message } => Some(message),
        }
    }
}

/// What the user currently sees for a field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldVisualState {
    #[default]
    Untouched,
    Error(String),
    Success,
}

impl FieldVisualState {
    pub fn is_error(&self) -> bool {
        matches!(self, FieldVisualState::Error(_))
    }
}

/// Aggregate verdict at submission time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormDecision {
    Accepted,
    Rejected,
}

impl FormDecision {
    /// AND-reduction over outcomes. Callers pass every outcome; nothing is skipped.
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a ValidationOutcome>) -> Self {
        let all_valid = outcomes.into_iter().fold(true, |acc, o| acc & o.is_valid());
        if all_valid {
            FormDecision::Accepted
        } else {
            FormDecision::Rejected
        }
    }

    pub fn is_accepted(&self) -> bool {
        *self == FormDecision::Accepted
    }
}
