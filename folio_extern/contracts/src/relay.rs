use std::future::Future;

use folio_models::contact::ContactPayload;

/// Static-host form relay (the hosting provider's built-in form processing).
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RelayApiService: Send + Sync + 'static {
    /// Posts the payload as a form submission. Resolves to `Ok` as soon as the
    /// relay answered at all, regardless of the response status.
    fn submit(&self, payload: ContactPayload) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockRelayApiService {
    pub fn with_submit(mut self, payload: ContactPayload, ok: bool) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| {
                Box::pin(std::future::ready(if ok {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("connection refused"))
                }))
            });
        self
    }
}
