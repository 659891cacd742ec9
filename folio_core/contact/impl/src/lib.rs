use std::sync::Arc;

use folio_core_contact_contracts::SubmissionGateway;
use folio_extern_contracts::{
    data_insert::{ContactSubmissionRecord, DataInsertApiService, DataInsertError},
    relay::RelayApiService,
};
use folio_models::{contact::ContactPayload, submission::SubmissionResult};
use tracing::{debug, warn};

/// The delivery strategy selected for this deployment.
#[derive(Debug, Clone)]
pub enum SubmissionGatewayImpl<RelayApi, DataInsertApi> {
    /// Form-encoded post to a static host's form relay.
    RelayPost { relay_api: RelayApi },
    /// Structured insert into a hosted data store.
    DataInsert {
        data_insert_api: DataInsertApi,
        config: DataInsertGatewayConfig,
    },
}

#[derive(Debug, Clone)]
pub struct DataInsertGatewayConfig {
    /// Opaque client description stored as `user_agent`.
    pub client_metadata: Arc<str>,
}

impl<RelayApi, DataInsertApi> SubmissionGateway for SubmissionGatewayImpl<RelayApi, DataInsertApi>
where
    RelayApi: RelayApiService,
    DataInsertApi: DataInsertApiService,
{
    async fn send(&self, payload: ContactPayload) -> SubmissionResult {
        match self {
            Self::RelayPost { relay_api } => {
                debug!("posting submission to form relay");
                match relay_api.submit(payload).await {
                    Ok(()) => SubmissionResult::Success,
                    Err(err) => {
                        warn!("Failed to reach form relay: {err:#}");
                        SubmissionResult::network_error()
                    }
                }
            }
            Self::DataInsert {
                data_insert_api,
                config,
            } => {
                let record = ContactSubmissionRecord {
                    name: payload.name.into_inner(),
                    email: payload.email.into_inner(),
                    message: payload.message.into_inner(),
                    user_agent: config.client_metadata.to_string(),
                };

                debug!("inserting submission into data store");
                match data_insert_api.insert(record).await {
                    Ok(()) => SubmissionResult::Success,
                    Err(DataInsertError::Write { message }) => {
                        warn!("Data store rejected submission: {message}");
                        SubmissionResult::Failure(message)
                    }
                    Err(DataInsertError::Other(err)) => {
                        warn!("Failed to reach data store: {err:#}");
                        SubmissionResult::network_error()
                    }
                }
            }
        }
    }
}
