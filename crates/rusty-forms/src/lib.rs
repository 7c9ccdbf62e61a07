//! # rusty-forms
//!
//! Client-side form validation engine: per-field rules, inline error
//! feedback and a submission gate.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_forms::{FieldId, FieldValues, FormConfig, FormController, FormSnapshot, InMemorySurface};
//!
//! let mut form = FormController::new(
//!     &FormConfig::registration(),
//!     FieldValues::new(),
//!     InMemorySurface::new(),
//!     |snapshot: &FormSnapshot| -> anyhow::Result<()> {
//!         println!("sending {} fields", snapshot.len());
//!         Ok(())
//!     },
//! )?;
//!
//! form.values_mut().set("fname", "Al");
//! form.exit(&FieldId::new("fname"))?;
//! assert_eq!(
//!     form.surface().annotation("fname"),
//!     Some("First Name must be at least 3 characters.")
//! );
//! # Ok::<(), rusty_forms::FormError>(())
//! ```
//!
//! ## Architecture
//!
//! - **`RuleEngine`** - pure evaluation of a field's rules, first failure wins
//! - **`FeedbackPresenter`** - sole writer of each field's visual state, issues
//!   render commands to a [`RenderSurface`]
//! - **`FormController`** - per-field Untouched/Touched state machine bound to
//!   UI triggers, and the submission gate
//!
//! Rendering goes through [`RenderSurface`] and value reads through
//! [`ValueSource`]. Accepted forms are handed to a [`SubmitHandler`].

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod field;
pub mod outcome;
pub mod presenter;
pub mod surface;
pub mod values;

pub use config::{FormConfig, FormMeta};
pub use controller::{FormController, SubmissionReport, SubmitHandler, Trigger};
pub use engine::RuleEngine;
pub use error::FormError;
pub use field::{Anchor, FieldId, FieldKind, FieldRegistry, FieldSpec};
pub use outcome::{FieldVisualState, FormDecision, ValidationOutcome};
pub use presenter::{FeedbackPresenter, RenderSurface, Summary, SummaryTone};
pub use surface::{Command, InMemorySurface, VisualClass};
pub use values::{FieldValues, FormSnapshot, ValueSource};

// Primitive checks, for custom integrations
pub use rusty_forms_validation as validation;
