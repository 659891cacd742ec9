use std::sync::Arc;

use folio_extern_contracts::relay::RelayApiService;
use folio_models::contact::ContactPayload;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct RelayApiServiceImpl {
    config: RelayApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct RelayApiServiceConfig {
    pub endpoint: Arc<Url>,
    pub form_name: Arc<str>,
    pub honeypot_field: Arc<str>,
}

impl RelayApiServiceImpl {
    pub fn new(config: RelayApiServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            client: HttpClient::new()?,
        })
    }
}

impl RelayApiService for RelayApiServiceImpl {
    async fn submit(&self, payload: ContactPayload) -> anyhow::Result<()> {
        let form = [
            ("form-name", &*self.config.form_name),
            ("name", &**payload.name),
            ("email", payload.email.as_str()),
            ("message", &**payload.message),
            (&*self.config.honeypot_field, ""),
        ];

        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .form(&form)
            .send()
            .await?;

        debug!(status = %response.status(), "form relay responded");

        Ok(())
    }
}
