//! Ordered step sequence with free navigation.
//!
//! States are the ordinals `1..=N`; the sequence starts at `1` and `N` is the
//! review/export step. `next` and `previous` saturate at the ends and
//! `jump_to` may land on any valid ordinal without checking earlier steps.

use tracing::debug;

use super::WizardError;
use crate::models::narrative::HelpfulLink;

/// A labelled value shown on a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
}

impl FieldView {
    pub fn new(
        label: &'static str,
        value: impl ToString,
    ) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

/// Presentation-agnostic content of one rendered step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepView {
    pub fields: Vec<FieldView>,
    pub notes: Vec<String>,
    pub links: Vec<HelpfulLink>,
}

impl StepView {
    pub fn field(
        mut self,
        label: &'static str,
        value: impl ToString,
    ) -> Self {
        self.fields.push(FieldView::new(label, value));
        self
    }

    pub fn note(
        mut self,
        text: impl Into<String>,
    ) -> Self {
        self.notes.push(text.into());
        self
    }

    pub fn link(
        mut self,
        link: HelpfulLink,
    ) -> Self {
        self.links.push(link);
        self
    }
}

pub struct StepDescriptor<F> {
    pub ordinal: usize,
    pub title: &'static str,
    pub render: fn(&F) -> StepView,
}

impl<F> StepDescriptor<F> {
    pub const fn new(
        ordinal: usize,
        title: &'static str,
        render: fn(&F) -> StepView,
    ) -> Self {
        Self {
            ordinal,
            title,
            render,
        }
    }
}

impl<F> Clone for StepDescriptor<F> {
    fn clone(&self) -> Self {
        Self {
            ordinal: self.ordinal,
            title: self.title,
            render: self.render,
        }
    }
}

impl<F> std::fmt::Debug for StepDescriptor<F> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("StepDescriptor")
            .field("ordinal", &self.ordinal)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Progress indicator state of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

#[derive(Debug, Clone)]
pub struct StepSequence<F> {
    steps: Vec<StepDescriptor<F>>,
    current: usize,
}

impl<F> StepSequence<F> {
    /// Builds a sequence positioned on step 1.
    ///
    /// # Errors
    /// * [`WizardError::EmptySequence`] when `steps` is empty.
    /// * [`WizardError::NonContiguousOrdinal`] when ordinals are not
    ///   `1, 2, ..., N` in order.
    pub fn new(steps: Vec<StepDescriptor<F>>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::EmptySequence);
        }
        for (index, step) in steps.iter().enumerate() {
            if step.ordinal != index + 1 {
                return Err(WizardError::NonContiguousOrdinal {
                    expected: index + 1,
                    found: step.ordinal,
                });
            }
        }
        Ok(Self { steps, current: 1 })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &StepDescriptor<F> {
        &self.steps[self.current - 1]
    }

    pub fn steps(&self) -> &[StepDescriptor<F>] {
        &self.steps
    }

    pub fn is_terminal(&self) -> bool {
        self.current == self.steps.len()
    }

    pub fn next(&mut self) -> usize {
        if self.current < self.steps.len() {
            self.current += 1;
            debug!(step = self.current, "advanced wizard step");
        }
        self.current
    }

    pub fn previous(&mut self) -> usize {
        if self.current > 1 {
            self.current -= 1;
            debug!(step = self.current, "moved back a wizard step");
        }
        self.current
    }

    /// Moves straight to `ordinal`. Earlier steps are not required to be
    /// complete.
    ///
    /// # Errors
    /// [`WizardError::OrdinalOutOfRange`] when `ordinal` is outside
    /// `1..=N`; the position is left unchanged.
    pub fn jump_to(
        &mut self,
        ordinal: usize,
    ) -> Result<usize, WizardError> {
        if ordinal == 0 || ordinal > self.steps.len() {
            return Err(WizardError::OrdinalOutOfRange {
                requested: ordinal,
                max: self.steps.len(),
            });
        }
        self.current = ordinal;
        debug!(step = ordinal, "jumped to wizard step");
        Ok(self.current)
    }

    pub fn progress(&self) -> Vec<(&StepDescriptor<F>, StepStatus)> {
        self.steps
            .iter()
            .map(|step| {
                let status = match step.ordinal.cmp(&self.current) {
                    std::cmp::Ordering::Less => StepStatus::Complete,
                    std::cmp::Ordering::Equal => StepStatus::Current,
                    std::cmp::Ordering::Greater => StepStatus::Upcoming,
                };
                (step, status)
            })
            .collect()
    }

    /// "Step k of N".
    pub fn position_label(&self) -> String {
        format!("Step {} of {}", self.current, self.steps.len())
    }
}
