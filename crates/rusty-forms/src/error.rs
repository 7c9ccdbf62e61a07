// File: src/error.rs
// Purpose: Faults for the integrating developer (never shown to the end user)

use crate::field::FieldId;

/// Programming and configuration errors, plus a failed handoff to the
/// transport collaborator.
///
/// User input problems are never reported through this type; they are
/// [`ValidationOutcome::Invalid`](crate::ValidationOutcome::Invalid) values
/// rendered next to the field.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("field '{0}' is not registered with this form")]
    UnknownField(FieldId),

    #[error("invalid form configuration: {0}")]
    Config(String),

    #[error("submission handoff failed: {0}")]
    Submission(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
