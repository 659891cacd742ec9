use folio_config::{ActiveGateway, Config};
use folio_core_contact_impl::{DataInsertGatewayConfig, SubmissionGatewayImpl};
use folio_extern_impl::{
    data_insert::{DataInsertApiServiceConfig, DataInsertApiServiceImpl},
    http::USER_AGENT,
    relay::{RelayApiServiceConfig, RelayApiServiceImpl},
};

pub type Gateway = SubmissionGatewayImpl<RelayApiServiceImpl, DataInsertApiServiceImpl>;

/// Builds the gateway for the strategy selected in `config`.
///
/// `client_metadata` takes precedence over the configured metadata for the
/// data insert strategy and is ignored otherwise.
pub fn gateway(config: &Config, client_metadata: Option<String>) -> anyhow::Result<Gateway> {
    Ok(match config.gateway.active()? {
        ActiveGateway::RelayPost(relay) => Gateway::RelayPost {
            relay_api: RelayApiServiceImpl::new(RelayApiServiceConfig {
                endpoint: relay.endpoint.clone().into(),
                form_name: relay.form_name.as_str().into(),
                honeypot_field: relay.honeypot_field.as_str().into(),
            })?,
        },
        ActiveGateway::DataInsert(data_insert) => Gateway::DataInsert {
            data_insert_api: DataInsertApiServiceImpl::new(DataInsertApiServiceConfig {
                base_url: data_insert.base_url.clone().into(),
                api_key: data_insert.api_key.as_str().into(),
                collection: data_insert.collection.as_str().into(),
            })?,
            config: DataInsertGatewayConfig {
                client_metadata: client_metadata
                    .or_else(|| data_insert.client_metadata.clone())
                    .unwrap_or_else(|| USER_AGENT.clone())
                    .into(),
            },
        },
    })
}
