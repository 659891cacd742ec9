use std::path::Path;

use anyhow::{bail, Context};
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Loads the config files in order, then applies each override as an inline
/// TOML snippet (e.g. `gateway.strategy = "data_insert"`).
pub fn load_with_override(paths: &[impl AsRef<Path>], overrides: &[&str]) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    let config = overrides
        .iter()
        .fold(builder, |builder, snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize::<Config>()
        .context("Failed to load config")?;

    config.gateway.active()?;

    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub gateway: GatewayConfig,
}

#[derive(Debug, Deserialize)]
pub struct GatewayConfig {
    pub strategy: GatewayStrategy,
    pub relay_post: Option<RelayPostConfig>,
    pub data_insert: Option<DataInsertConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayStrategy {
    RelayPost,
    DataInsert,
}

#[derive(Debug, Deserialize)]
pub struct RelayPostConfig {
    pub endpoint: Url,
    #[serde(default = "default_form_name")]
    pub form_name: String,
    #[serde(default = "default_honeypot_field")]
    pub honeypot_field: String,
}

#[derive(Debug, Deserialize)]
pub struct DataInsertConfig {
    pub base_url: Url,
    pub api_key: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    pub client_metadata: Option<String>,
}

/// The backend section selected by [`GatewayConfig::strategy`].
#[derive(Debug, Clone, Copy)]
pub enum ActiveGateway<'a> {
    RelayPost(&'a RelayPostConfig),
    DataInsert(&'a DataInsertConfig),
}

impl GatewayConfig {
    pub fn active(&self) -> anyhow::Result<ActiveGateway<'_>> {
        Ok(match self.strategy {
            GatewayStrategy::RelayPost => match &self.relay_post {
                Some(config) => ActiveGateway::RelayPost(config),
                None => {
                    bail!("gateway.strategy is relay_post but [gateway.relay_post] is missing")
                }
            },
            GatewayStrategy::DataInsert => match &self.data_insert {
                Some(config) => ActiveGateway::DataInsert(config),
                None => {
                    bail!("gateway.strategy is data_insert but [gateway.data_insert] is missing")
                }
            },
        })
    }
}

fn default_form_name() -> String {
    "contact".into()
}

fn default_honeypot_field() -> String {
    "bot-field".into()
}

fn default_collection() -> String {
    "contact_submissions".into()
}

#[cfg(test)]
mod tests {
    use folio_utils::assert_matches;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert_eq!(config.gateway.strategy, GatewayStrategy::RelayPost);
        assert_matches!(
            config.gateway.active().unwrap(),
            ActiveGateway::RelayPost(RelayPostConfig { form_name, honeypot_field, .. })
                if form_name == "contact" && honeypot_field == "bot-field"
        );
    }

    #[test]
    fn override_strategy() {
        let config = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &[r#"gateway.strategy = "data_insert""#],
        )
        .unwrap();
        assert_matches!(
            config.gateway.active().unwrap(),
            ActiveGateway::DataInsert(DataInsertConfig { collection, client_metadata: None, .. })
                if collection == "contact_submissions"
        );
    }

    #[test]
    fn defaults() {
        let config = load_with_override(
            &[] as &[&Path],
            &[
                r#"gateway.strategy = "relay_post""#,
                r#"gateway.relay_post.endpoint = "https://example.com/""#,
            ],
        )
        .unwrap();
        let relay = config.gateway.relay_post.unwrap();
        assert_eq!(relay.form_name, "contact");
        assert_eq!(relay.honeypot_field, "bot-field");
    }

    #[test]
    fn missing_active_section() {
        let result = load_with_override(
            &[] as &[&Path],
            &[
                r#"gateway.strategy = "data_insert""#,
                r#"gateway.relay_post.endpoint = "https://example.com/""#,
            ],
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_strategy() {
        let result = load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &[r#"gateway.strategy = "carrier_pigeon""#],
        );
        assert!(result.is_err());
    }
}
