use std::sync::Arc;

use folio_core_contact_contracts::SubmissionGateway;
use folio_core_form_contracts::{
    FormPhase, FormService, FormSnapshot, OutcomeNotifier, SubmitOutcome,
};
use folio_models::form::{validate_all, FieldStates, FormField};
use tokio::{runtime::Handle, sync::Mutex};
use tracing::{debug, trace, warn};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct FormServiceImpl<Gateway, Notifier> {
    gateway: Gateway,
    notifier: Notifier,
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    phase: FormPhase,
    fields: FieldStates,
    /// Incremented for every payload handed to the gateway.
    submission: u64,
}

/// Puts the form back into [`FormPhase::Editing`] if an in-flight
/// [`FormService::on_submit`] is dropped before the gateway resolved.
struct SubmittingGuard {
    state: Arc<Mutex<State>>,
    submission: u64,
    armed: bool,
}

impl SubmittingGuard {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        debug!("submission cancelled before the gateway resolved");
        let submission = self.submission;
        let reset = move |state: &mut State| {
            if state.submission == submission && state.phase == FormPhase::Submitting {
                state.phase = FormPhase::Editing;
            }
        };

        if let Ok(mut state) = self.state.try_lock() {
            reset(&mut state);
        } else if let Ok(handle) = Handle::try_current() {
            let state = Arc::clone(&self.state);
            handle.spawn(async move { reset(&mut *state.lock().await) });
        } else {
            warn!("Failed to reset cancelled submission, form stays in submitting phase");
        }
    }
}

impl<Gateway, Notifier> FormServiceImpl<Gateway, Notifier> {
    /// Creates a form with all fields empty and untouched.
    pub fn new(gateway: Gateway, notifier: Notifier) -> Self {
        Self {
            gateway,
            notifier,
            state: Default::default(),
        }
    }
}

impl<Gateway, Notifier> FormService for FormServiceImpl<Gateway, Notifier>
where
    Gateway: SubmissionGateway,
    Notifier: OutcomeNotifier,
{
    async fn on_field_change(&self, field: FormField, value: String) {
        let mut state = self.state.lock().await;
        let field_state = state.fields.get_mut(field);
        field_state.value = value;
        if field_state.touched {
            field_state.error = field.validate(&field_state.value).err();
        }
    }

    async fn on_field_blur(&self, field: FormField) {
        let mut state = self.state.lock().await;
        let field_state = state.fields.get_mut(field);
        field_state.touched = true;
        field_state.error = field.validate(&field_state.value).err();
        trace!(field = field.as_str(), error = ?field_state.error, "blur");
    }

    async fn on_submit(&self) -> SubmitOutcome {
        let (payload, guard) = {
            let mut state = self.state.lock().await;
            if state.phase == FormPhase::Submitting {
                debug!("submission already in flight, ignoring submit");
                return SubmitOutcome::Rejected;
            }

            state.phase = FormPhase::Validating;
            let validated = validate_all(&state.fields.values());
            let errors = validated.as_ref().err().cloned().unwrap_or_default();
            for field in FormField::ALL {
                let field_state = state.fields.get_mut(field);
                field_state.touched = true;
                field_state.error = errors.get(field);
            }

            match validated {
                Ok(payload) => {
                    state.phase = FormPhase::Submitting;
                    state.submission += 1;
                    let guard = SubmittingGuard {
                        state: Arc::clone(&self.state),
                        submission: state.submission,
                        armed: true,
                    };
                    (payload, guard)
                }
                Err(errors) => {
                    trace!(invalid_fields = errors.iter().count(), "validation failed");
                    state.phase = FormPhase::Editing;
                    return SubmitOutcome::Invalid(errors);
                }
            }
        };

        trace!("submitting");
        let result = self.gateway.send(payload).await;

        {
            let mut state = self.state.lock().await;
            if result.is_success() {
                state.fields = FieldStates::default();
            }
            state.phase = FormPhase::Editing;
        }
        guard.disarm();

        debug!(success = result.is_success(), "submission completed");
        self.notifier.notify(result.clone());

        SubmitOutcome::Completed(result)
    }

    async fn snapshot(&self) -> FormSnapshot {
        let state = self.state.lock().await;
        FormSnapshot {
            phase: state.phase,
            fields: state.fields.clone(),
        }
    }
}
