mod database_config;
mod raw_config;
mod secrets_config;
mod security_config;

pub use self::{
    database_config::DatabaseConfig, raw_config::RawConfig, secrets_config::SecretsConfig,
    security_config::SecurityConfig,
};

/// Main server config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Session and cookie configuration.
    pub security: SecurityConfig,
    /// Secrets board configuration.
    pub secrets: SecretsConfig,
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            db: raw_config.db,
            security: raw_config.security,
            secrets: raw_config.secrets,
        }
    }
}
