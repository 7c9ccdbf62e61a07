// File: src/presenter.rs
// Purpose: Sole writer of per-field visual state; turns outcomes into render commands

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{FormError, Result};
use crate::field::{Anchor, FieldId, FieldRegistry};
use crate::outcome::{FieldVisualState, ValidationOutcome};

/// Tone of the form-level status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTone {
    Pending,
    Success,
    Failure,
}

/// Form-level status line shown near the submit control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub tone: SummaryTone,
    pub text: String,
}

impl Summary {
    pub fn new(tone: SummaryTone, text: impl Into<String>) -> Self {
        Self { tone, text: text.into() }
    }
}

/// Commands the engine issues to the rendering layer.
///
/// The core never reasons about the element tree, only about identifiers.
/// Implementations must honour replace semantics: a target never shows more
/// than one annotation.
pub trait RenderSurface {
    /// Shows `message` next to the target, replacing any annotation already
    /// there. Field anchors also switch to the error styling.
    fn render_error(&mut self, target: &FieldId, anchor: Anchor, message: &str);

    /// Switches a field to the success styling and drops its annotation
    fn render_success(&mut self, target: &FieldId);

    /// Removes the target's annotation, leaving styling alone
    fn clear_annotation(&mut self, target: &FieldId, anchor: Anchor);

    /// Replaces the form-level status line
    fn render_summary(&mut self, summary: &Summary);
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn render_error(&mut self, target: &FieldId, anchor: Anchor, message: &str) {
        (**self).render_error(target, anchor, message)
    }

    fn render_success(&mut self, target: &FieldId) {
        (**self).render_success(target)
    }

    fn clear_annotation(&mut self, target: &FieldId, anchor: Anchor) {
        (**self).clear_annotation(target, anchor)
    }

    fn render_summary(&mut self, summary: &Summary) {
        (**self).render_summary(summary)
    }
}

#[derive(Debug)]
struct Slot {
    anchor: Anchor,
    state: FieldVisualState,
}

/// Owns the rendering surface and the single visual state of every target.
///
/// Each `apply` issues at most one command, and none when the target already
/// shows what the outcome asks for, so repeated outcomes cannot flicker.
#[derive(Debug)]
pub struct FeedbackPresenter<S> {
    surface: S,
    slots: HashMap<FieldId, Slot>,
}

impl<S: RenderSurface> FeedbackPresenter<S> {
    /// Every registered field starts Untouched
    pub fn new(registry: &FieldRegistry, surface: S) -> Self {
        let slots = registry
            .iter()
            .map(|spec| {
                let slot = Slot {
                    anchor: spec.kind.anchor(),
                    state: FieldVisualState::Untouched,
                };
                (spec.id.clone(), slot)
            })
            .collect();

        Self { surface, slots }
    }

    /// Moves a target to the visual state matching `outcome`
    pub fn apply(&mut self, id: &FieldId, outcome: &ValidationOutcome) -> Result<()> {
        let slot = self
            .slots
            .get_mut(id)
            .ok_or_else(|| FormError::UnknownField(id.clone()))?;

        match outcome {
            ValidationOutcome::Invalid { message } => {
                if matches!(&slot.state, FieldVisualState::Error(shown) if shown == message) {
                    return Ok(());
                }
                self.surface.render_error(id, slot.anchor, message);
                slot.state = FieldVisualState::Error(message.clone());
            }
            ValidationOutcome::Valid => {
                if slot.state == FieldVisualState::Success {
                    return Ok(());
                }
                match slot.anchor {
                    Anchor::Field => self.surface.render_success(id),
                    // Groups carry no success styling; only the message goes
                    Anchor::Group => {
                        if slot.state.is_error() {
                            self.surface.clear_annotation(id, Anchor::Group);
                        }
                    }
                }
                slot.state = FieldVisualState::Success;
            }
        }

        tracing::trace!(field = %id, state = ?slot.state, "visual state updated");
        Ok(())
    }

    pub fn present_summary(&mut self, summary: &Summary) {
        self.surface.render_summary(summary);
    }

    pub fn state(&self, id: &str) -> Option<&FieldVisualState> {
        self.slots.get(id).map(|slot| &slot.state)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
