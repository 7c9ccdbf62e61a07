// File: src/surface.rs
// Purpose: Headless render surface that models what the user would see

use std::collections::BTreeMap;

use crate::field::{Anchor, FieldId};
use crate::presenter::{RenderSurface, Summary};

/// Styling applied to a field input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualClass {
    Error,
    Success,
}

/// A command received from the presenter, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RenderError {
        target: FieldId,
        anchor: Anchor,
        message: String,
    },
    RenderSuccess {
        target: FieldId,
    },
    ClearAnnotation {
        target: FieldId,
        anchor: Anchor,
    },
    RenderSummary(Summary),
}

/// In-memory [`RenderSurface`].
///
/// Keeps at most one annotation per target, the styling of each field input
/// and the current status line, plus a log of every command received.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    annotations: BTreeMap<FieldId, String>,
    classes: BTreeMap<FieldId, VisualClass>,
    summary: Option<Summary>,
    commands: Vec<Command>,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn annotation(&self, target: &str) -> Option<&str> {
        self.annotations.get(target).map(String::as_str)
    }

    /// Targets currently showing an annotation, sorted by id
    pub fn annotated(&self) -> Vec<&str> {
        self.annotations.keys().map(FieldId::as_str).collect()
    }

    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    pub fn class(&self, target: &str) -> Option<VisualClass> {
        self.classes.get(target).copied()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drains the command log, keeping the rendered state
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSurface for InMemorySurface {
    fn render_error(&mut self, target: &FieldId, anchor: Anchor, message: &str) {
        self.annotations.insert(target.clone(), message.to_string());
        if anchor == Anchor::Field {
            self.classes.insert(target.clone(), VisualClass::Error);
        }
        self.commands.push(Command::RenderError {
            target: target.clone(),
            anchor,
            message: message.to_string(),
        });
    }

    fn render_success(&mut self, target: &FieldId) {
        self.annotations.remove(target);
        self.classes.insert(target.clone(), VisualClass::Success);
        self.commands.push(Command::RenderSuccess {
            target: target.clone(),
        });
    }

    fn clear_annotation(&mut self, target: &FieldId, anchor: Anchor) {
        self.annotations.remove(target);
        self.commands.push(Command::ClearAnnotation {
            target: target.clone(),
            anchor,
        });
    }

    fn render_summary(&mut self, summary: &Summary) {
        self.summary = Some(summary.clone());
        self.commands.push(Command::RenderSummary(summary.clone()));
    }
}
