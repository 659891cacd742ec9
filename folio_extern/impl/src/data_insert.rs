use std::sync::Arc;

use anyhow::anyhow;
use folio_extern_contracts::data_insert::{
    ContactSubmissionRecord, DataInsertApiService, DataInsertError,
};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct DataInsertApiServiceImpl {
    config: DataInsertApiServiceConfig,
    collection_url: Arc<Url>,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct DataInsertApiServiceConfig {
    pub base_url: Arc<Url>,
    pub api_key: Arc<str>,
    pub collection: Arc<str>,
}

impl DataInsertApiServiceImpl {
    /// Fails if `base_url` has no hierarchical path to append the collection
    /// route to (e.g. `mailto:` urls).
    pub fn new(config: DataInsertApiServiceConfig) -> anyhow::Result<Self> {
        let mut collection_url = (*config.base_url).clone();
        collection_url
            .path_segments_mut()
            .map_err(|()| anyhow!("Data store base url {} cannot be a base", config.base_url))?
            .pop_if_empty()
            .extend(["rest", "v1", &config.collection]);

        Ok(Self {
            config,
            collection_url: collection_url.into(),
            client: HttpClient::new()?,
        })
    }
}

impl DataInsertApiService for DataInsertApiServiceImpl {
    async fn insert(&self, record: ContactSubmissionRecord) -> Result<(), DataInsertError> {
        let response = self
            .client
            .post((*self.collection_url).clone())
            .header("apikey", &*self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Prefer", "return=minimal")
            .json(&record)
            .send()
            .await
            .map_err(anyhow::Error::from)?;

        let status = response.status();
        debug!(%status, "data store responded");
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Insert failed with status {}", status.as_u16()));

        Err(DataInsertError::Write { message })
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}
