use crate::{config::Config, database::Database};

/// Entry point to the application APIs, extensions are implemented separately in every module.
#[derive(Clone)]
pub struct Api {
    pub config: Config,
    pub db: Database,
}

impl Api {
    /// Instantiates APIs collection with the specified config and database.
    pub fn new(config: Config, db: Database) -> Self {
        Self { config, db }
    }
}

impl AsRef<Api> for Api {
    fn as_ref(&self) -> &Self {
        self
    }
}
