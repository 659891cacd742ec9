use std::future::Future;

use folio_models::{
    form::{FieldErrors, FieldStates, FormField},
    submission::SubmissionResult,
};

/// Contact form state machine, driven by the rendering layer.
pub trait FormService: Send + Sync + 'static {
    /// Updates the raw value of `field`. Touched fields are re-validated.
    fn on_field_change(&self, field: FormField, value: String) -> impl Future<Output = ()> + Send;

    /// Marks `field` as touched and validates it.
    fn on_field_blur(&self, field: FormField) -> impl Future<Output = ()> + Send;

    /// Validates the whole form and, if valid, delivers it through the
    /// submission gateway.
    fn on_submit(&self) -> impl Future<Output = SubmitOutcome> + Send;

    /// Current state for rendering.
    fn snapshot(&self) -> impl Future<Output = FormSnapshot> + Send;
}

/// Receives the result of every completed submission, exactly once.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait OutcomeNotifier: Send + Sync + 'static {
    fn notify(&self, result: SubmissionResult);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Whole-form validation is running. Only lasts for the synchronous part
    /// of [`FormService::on_submit`].
    Validating,
    /// A payload has been handed to the gateway and no result arrived yet.
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub phase: FormPhase,
    pub fields: FieldStates,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission is still in flight. Nothing was sent.
    Rejected,
    /// At least one field is invalid. Nothing was sent.
    Invalid(FieldErrors),
    /// The gateway was called once and the notifier received this result.
    Completed(SubmissionResult),
}

#[cfg(feature = "mock")]
impl MockOutcomeNotifier {
    pub fn with_notify(mut self, result: SubmissionResult) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(result))
            .return_const(());
        self
    }
}
