//! Owned form aggregate with patch-based updates.

/// A form aggregate that accepts shallow partial updates.
///
/// Every field present in a patch replaces the corresponding field of the
/// aggregate; absent fields pass through unchanged. Nested records are
/// replaced wholesale, never merged.
pub trait Mergeable: Clone {
    type Patch: Default;

    fn merged(
        &self,
        patch: Self::Patch,
    ) -> Self;
}

/// The single owner of a wizard's form aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState<F> {
    form: F,
}

impl<F: Mergeable> WizardState<F> {
    pub fn new(form: F) -> Self {
        Self { form }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Applies `patch` and returns the new aggregate.
    pub fn update(
        &mut self,
        patch: F::Patch,
    ) -> &F {
        self.form = self.form.merged(patch);
        &self.form
    }

    /// Replaces the whole aggregate, e.g. to restore defaults.
    pub fn reset(
        &mut self,
        form: F,
    ) {
        self.form = form;
    }

    /// Owned copy of the current aggregate, detached from later updates.
    pub fn snapshot(&self) -> F {
        self.form.clone()
    }
}

impl<F: Mergeable + Default> Default for WizardState<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}
