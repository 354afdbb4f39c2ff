use serde_derive::{Deserialize, Serialize};

/// Configuration for the database connection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite:secrets.db?mode=rwc`.
    pub url: String,
    /// Maximum number of connections kept in the pool.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:secrets.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}
