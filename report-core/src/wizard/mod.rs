//! Generic multi-step wizard engine.

mod state;
mod steps;

use thiserror::Error;
use tracing::debug;

pub use state::{Mergeable, WizardState};
pub use steps::{FieldView, StepDescriptor, StepSequence, StepStatus, StepView};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("a wizard needs at least one step")]
    EmptySequence,

    #[error("step ordinals must be contiguous from 1: expected {expected}, found {found}")]
    NonContiguousOrdinal { expected: usize, found: usize },

    #[error("step {requested} is out of range 1..={max}")]
    OrdinalOutOfRange { requested: usize, max: usize },
}

/// A form aggregate together with the step sequence that edits it.
#[derive(Debug, Clone)]
pub struct Wizard<F> {
    state: WizardState<F>,
    steps: StepSequence<F>,
}

impl<F: Mergeable> Wizard<F> {
    pub fn new(
        form: F,
        steps: Vec<StepDescriptor<F>>,
    ) -> Result<Self, WizardError> {
        Ok(Self {
            state: WizardState::new(form),
            steps: StepSequence::new(steps)?,
        })
    }

    pub fn form(&self) -> &F {
        self.state.form()
    }

    pub fn update(
        &mut self,
        patch: F::Patch,
    ) -> &F {
        debug!(step = self.steps.current(), "form updated");
        self.state.update(patch)
    }

    pub fn reset(
        &mut self,
        form: F,
    ) {
        self.state.reset(form);
    }

    pub fn snapshot(&self) -> F {
        self.state.snapshot()
    }

    pub fn steps(&self) -> &StepSequence<F> {
        &self.steps
    }

    pub fn next(&mut self) -> usize {
        self.steps.next()
    }

    pub fn previous(&mut self) -> usize {
        self.steps.previous()
    }

    pub fn jump_to(
        &mut self,
        ordinal: usize,
    ) -> Result<usize, WizardError> {
        self.steps.jump_to(ordinal)
    }

    pub fn current_title(&self) -> &'static str {
        self.steps.current_step().title
    }

    /// Renders the current step against the current form.
    pub fn render_current(&self) -> StepView {
        (self.steps.current_step().render)(self.state.form())
    }
}
