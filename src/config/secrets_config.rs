use serde_derive::{Deserialize, Serialize};

/// Configuration for the secrets board.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SecretsConfig {
    /// Whether secrets carry a title. With titles disabled the submit form only asks for the
    /// message, submitted titles are stored empty and searching by title is rejected.
    pub titles: bool,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self { titles: true }
    }
}
