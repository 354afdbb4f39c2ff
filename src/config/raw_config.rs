use crate::config::{DatabaseConfig, SecretsConfig, SecurityConfig};
use figment::{Figment, Metadata, Profile, Provider, providers, providers::Format, value};
use serde_derive::{Deserialize, Serialize};

/// Raw configuration structure that is used to read the configuration from the file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RawConfig {
    /// Defines a TCP port to listen on.
    pub port: u16,
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Session and cookie configuration.
    pub security: SecurityConfig,
    /// Secrets board configuration.
    pub secrets: SecretsConfig,
}

impl RawConfig {
    /// Reads the configuration from the file (TOML) and merges it with the default values and
    /// `SECRETS_` prefixed environment variables.
    pub fn read_from_file(path: &str) -> anyhow::Result<Self> {
        Ok(Figment::from(RawConfig::default())
            .merge(providers::Toml::file(path))
            .merge(providers::Env::prefixed("SECRETS_").split("__"))
            .extract()?)
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            db: DatabaseConfig::default(),
            security: SecurityConfig::default(),
            secrets: SecretsConfig::default(),
        }
    }
}

impl Provider for RawConfig {
    fn metadata(&self) -> Metadata {
        Metadata::named("Secrets board main configuration")
    }

    fn data(&self) -> Result<value::Map<Profile, value::Dict>, figment::Error> {
        providers::Serialized::defaults(Self::default()).data()
    }
}
