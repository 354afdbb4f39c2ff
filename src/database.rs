mod store_error;

pub use self::store_error::StoreError;

use crate::config::DatabaseConfig;
use anyhow::Context;
use sqlx::{Pool, Sqlite, sqlite::SqlitePoolOptions};

#[derive(Clone)]
pub struct Database {
    pub(crate) pool: Pool<Sqlite>,
}

/// Common methods for the primary database, extensions are implemented separately in every module.
impl Database {
    /// Opens database "connection" and applies pending migrations.
    pub async fn open(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .with_context(|| format!("Failed to connect to database ({}).", config.url))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .with_context(|| "Failed to migrate database")?;

        Ok(Database { pool })
    }
}

impl AsRef<Database> for Database {
    fn as_ref(&self) -> &Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::DatabaseConfig, database::Database};

    #[tokio::test]
    async fn can_open_in_memory_database() -> anyhow::Result<()> {
        let db = Database::open(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await?;

        let tables: Vec<String> = sqlx::query_scalar(
            r#"
SELECT name FROM sqlite_master
WHERE type = 'table' AND name NOT LIKE '\_%' ESCAPE '\' AND name != 'sqlite_sequence'
ORDER BY name
            "#,
        )
        .fetch_all(&db.pool)
        .await?;
        assert_eq!(tables, vec!["user_secrets", "users"]);

        Ok(())
    }
}
