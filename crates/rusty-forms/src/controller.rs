// File: src/controller.rs
// Purpose: Binds UI triggers to the rule engine and the presenter

use std::collections::HashMap;

use serde::Serialize;

use crate::config::{FormConfig, FormMeta};
use crate::engine::RuleEngine;
use crate::error::{FormError, Result};
use crate::field::FieldId;
use crate::outcome::{FormDecision, ValidationOutcome};
use crate::presenter::{FeedbackPresenter, RenderSurface, Summary, SummaryTone};
use crate::values::{FormSnapshot, ValueSource};

/// Receives the accepted form's values. Collection and transport live here.
pub trait SubmitHandler {
    fn submit(&mut self, snapshot: &FormSnapshot) -> anyhow::Result<()>;
}

impl<F> SubmitHandler for F
where
    F: FnMut(&FormSnapshot) -> anyhow::Result<()>,
{
    fn submit(&mut self, snapshot: &FormSnapshot) -> anyhow::Result<()> {
        self(snapshot)
    }
}

/// A discrete user interaction, delivered one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The field lost focus
    Exit(FieldId),
    /// Live typing
    ValueChanged(FieldId),
    /// A dropdown or radio group picked a new option
    SelectionChanged(FieldId),
    SubmitAttempted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Touch {
    #[default]
    Untouched,
    Touched,
}

/// Everything evaluated by one submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReport {
    pub decision: FormDecision,
    /// Every field and group, in registry order
    pub outcomes: Vec<(FieldId, ValidationOutcome)>,
}

impl SubmissionReport {
    pub fn outcome(&self, id: &str) -> Option<&ValidationOutcome> {
        self.outcomes
            .iter()
            .find(|(field, _)| field.as_str() == id)
            .map(|(_, outcome)| outcome)
    }

    pub fn failed(&self) -> impl Iterator<Item = &FieldId> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_valid())
            .map(|(id, _)| id)
    }
}

/// Per-form state machine tying triggers to evaluate + apply.
///
/// Triggers are handled to completion one at a time (`&mut self`), so a
/// field's visual state is never written by two triggers at once.
pub struct FormController<V, S, H> {
    engine: RuleEngine,
    presenter: FeedbackPresenter<S>,
    values: V,
    handler: H,
    touch: HashMap<FieldId, Touch>,
    meta: FormMeta,
}

impl<V, S, H> FormController<V, S, H>
where
    V: ValueSource,
    S: RenderSurface,
    H: SubmitHandler,
{
    /// Resolves the field registry once; a malformed table is fatal
    pub fn new(config: &FormConfig, values: V, surface: S, handler: H) -> Result<Self> {
        let registry = config.registry()?;
        let presenter = FeedbackPresenter::new(&registry, surface);
        let touch = registry.ids().map(|id| (id.clone(), Touch::Untouched)).collect();

        tracing::debug!(
            "Form '{}' initialised with {} fields",
            config.form.name,
            registry.len()
        );

        Ok(Self {
            engine: RuleEngine::new(registry),
            presenter,
            values,
            handler,
            touch,
            meta: config.form.clone(),
        })
    }

    /// Dispatches one trigger. Only submission produces a report.
    pub fn handle(&mut self, trigger: Trigger) -> Result<Option<SubmissionReport>> {
        match trigger {
            Trigger::Exit(id) => self.exit(&id).map(|_| None),
            Trigger::ValueChanged(id) => self.value_changed(&id).map(|_| None),
            Trigger::SelectionChanged(id) => self.selection_changed(&id).map(|_| None),
            Trigger::SubmitAttempted => self.submit_attempted().map(Some),
        }
    }

    /// Field lost focus: always validate and mark the field Touched.
    ///
    /// Individual radio options have no meaningful exit, so a group is left
    /// for submission.
    pub fn exit(&mut self, id: &FieldId) -> Result<()> {
        if self.engine.registry().get(id.as_str())?.kind.is_group() {
            return Ok(());
        }
        self.touch.insert(id.clone(), Touch::Touched);
        self.validate(id).map(|_| ())
    }

    /// Live typing: only re-validates a Touched field that is showing an
    /// error, so corrections clear the annotation without an exit.
    pub fn value_changed(&mut self, id: &FieldId) -> Result<()> {
        self.engine.registry().get(id.as_str())?;

        let touched = self.touch.get(id).copied().unwrap_or_default() == Touch::Touched;
        let showing_error = self.presenter.state(id.as_str()).is_some_and(|s| s.is_error());

        if touched && showing_error {
            self.validate(id)?;
        }
        Ok(())
    }

    /// A dropdown change counts as leaving the field. A radio group change
    /// follows the live-typing guard: it clears the group annotation once a
    /// submission has flagged it.
    pub fn selection_changed(&mut self, id: &FieldId) -> Result<()> {
        if self.engine.registry().get(id.as_str())?.kind.is_group() {
            self.value_changed(id)
        } else {
            self.exit(id)
        }
    }

    /// Re-validates every field and group regardless of Touched state, then
    /// hands off the snapshot if all of them pass.
    pub fn submit_attempted(&mut self) -> Result<SubmissionReport> {
        self.presenter
            .present_summary(&Summary::new(SummaryTone::Pending, &self.meta.pending_text));

        let mut outcomes = Vec::with_capacity(self.engine.registry().len());
        for spec in self.engine.registry().iter() {
            let outcome = self.engine.evaluate(&spec.id, &self.values)?;
            self.presenter.apply(&spec.id, &outcome)?;
            self.touch.insert(spec.id.clone(), Touch::Touched);
            outcomes.push((spec.id.clone(), outcome));
        }

        let decision = FormDecision::from_outcomes(outcomes.iter().map(|(_, o)| o));
        let report = SubmissionReport { decision, outcomes };

        match decision {
            FormDecision::Accepted => {
                let snapshot = FormSnapshot::capture(self.engine.registry(), &self.values);
                if let Err(e) = self.handler.submit(&snapshot) {
                    tracing::error!("Submission handoff failed: {:#}", e);
                    self.presenter.present_summary(&Summary::new(
                        SummaryTone::Failure,
                        &self.meta.handoff_failed_text,
                    ));
                    return Err(FormError::Submission(format!("{:#}", e)));
                }
                tracing::info!("Form '{}' accepted", self.meta.name);
                self.presenter
                    .present_summary(&Summary::new(SummaryTone::Success, &self.meta.success_text));
            }
            FormDecision::Rejected => {
                tracing::info!(
                    "Form '{}' rejected: {} field(s) failing",
                    self.meta.name,
                    report.failed().count()
                );
                self.presenter
                    .present_summary(&Summary::new(SummaryTone::Failure, &self.meta.failure_text));
            }
        }

        Ok(report)
    }

    /// True once the field has been left or submitted
    pub fn is_touched(&self, id: &str) -> bool {
        self.touch.get(id) == Some(&Touch::Touched)
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn presenter(&self) -> &FeedbackPresenter<S> {
        &self.presenter
    }

    pub fn surface(&self) -> &S {
        self.presenter.surface()
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    /// Write access for integrations that own the value store
    pub fn values_mut(&mut self) -> &mut V {
        &mut self.values
    }

    fn validate(&mut self, id: &FieldId) -> Result<ValidationOutcome> {
        let outcome = self.engine.evaluate(id, &self.values)?;
        self.presenter.apply(id, &outcome)?;
        Ok(outcome)
    }
}
