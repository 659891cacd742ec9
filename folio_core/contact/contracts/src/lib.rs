use std::future::Future;

use folio_models::{contact::ContactPayload, submission::SubmissionResult};

/// Delivers a validated payload to the configured backend.
///
/// Exactly one network attempt is made per call. Backend and transport errors
/// are folded into [`SubmissionResult::Failure`].
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SubmissionGateway: Send + Sync + 'static {
    fn send(&self, payload: ContactPayload) -> impl Future<Output = SubmissionResult> + Send;
}

#[cfg(feature = "mock")]
impl MockSubmissionGateway {
    pub fn with_send(mut self, payload: ContactPayload, result: SubmissionResult) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
