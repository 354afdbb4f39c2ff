mod raw_user_secret;

pub(crate) use self::raw_user_secret::RawUserSecret;
use crate::{
    database::{Database, StoreError},
    users::{User, UserId},
};
use sqlx::{query, query_as};

/// Extends primary database with the user management-related methods.
impl Database {
    /// Retrieves user with all their secrets using user ID.
    pub async fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let rows = query_as::<_, RawUserSecret>(
            r#"
SELECT u.id AS user_id, u.username, u.credentials, u.created_at AS user_created_at,
       s.id AS secret_id, s.title AS secret_title, s.message AS secret_message,
       s.created_at AS secret_created_at
FROM users AS u
LEFT JOIN user_secrets AS s ON s.user_id = u.id
WHERE u.id = ?1
ORDER BY s.seq
            "#,
        )
        .bind(*id)
        .fetch_all(&self.pool)
        .await?;

        Ok(RawUserSecret::into_users(rows)?.pop())
    }

    /// Retrieves user with all their secrets using username.
    pub async fn get_user_by_username<T: AsRef<str>>(
        &self,
        username: T,
    ) -> Result<Option<User>, StoreError> {
        let rows = query_as::<_, RawUserSecret>(
            r#"
SELECT u.id AS user_id, u.username, u.credentials, u.created_at AS user_created_at,
       s.id AS secret_id, s.title AS secret_title, s.message AS secret_message,
       s.created_at AS secret_created_at
FROM users AS u
LEFT JOIN user_secrets AS s ON s.user_id = u.id
WHERE u.username = ?1
ORDER BY s.seq
            "#,
        )
        .bind(username.as_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(RawUserSecret::into_users(rows)?.pop())
    }

    /// Inserts or updates user and stores any of the user's secrets that aren't stored yet. Secrets
    /// are immutable, already stored secrets are left untouched.
    pub async fn upsert_user<U: AsRef<User>>(&self, user: U) -> Result<(), StoreError> {
        let user = user.as_ref();
        let credentials = serde_json::to_vec(&user.credentials)?;

        let mut tx = self.pool.begin().await?;

        query(
            r#"
INSERT INTO users (id, username, credentials, created_at)
VALUES ( ?1, ?2, ?3, ?4 )
ON CONFLICT(id) DO UPDATE SET username=excluded.username, credentials=excluded.credentials
            "#,
        )
        .bind(*user.id)
        .bind(user.username.as_str())
        .bind(credentials)
        .bind(user.created_at)
        .execute(&mut *tx)
        .await?;

        for secret in &user.secrets {
            query(
                r#"
INSERT INTO user_secrets (id, user_id, title, message, created_at)
VALUES ( ?1, ?2, ?3, ?4, ?5 )
ON CONFLICT(id) DO NOTHING
                "#,
            )
            .bind(*secret.id)
            .bind(*user.id)
            .bind(secret.title.as_str())
            .bind(secret.message.as_str())
            .bind(secret.created_at)
            .execute(&mut *tx)
            .await?;
        }

        Ok(tx.commit().await?)
    }
}
