use crate::{
    database::{Database, StoreError},
    secrets::SecretsStore,
    users::{RawUserSecret, User, UserId},
};
use sqlx::query_as;

/// Extends primary database with the secrets board queries.
impl SecretsStore for Database {
    async fn find_users_with_secrets(&self) -> Result<Vec<User>, StoreError> {
        let rows = query_as::<_, RawUserSecret>(
            r#"
SELECT u.id AS user_id, u.username, u.credentials, u.created_at AS user_created_at,
       s.id AS secret_id, s.title AS secret_title, s.message AS secret_message,
       s.created_at AS secret_created_at
FROM users AS u
INNER JOIN user_secrets AS s ON s.user_id = u.id
ORDER BY u.rowid, s.seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        RawUserSecret::into_users(rows)
    }

    async fn find_users_with_secret_title(&self, title: &str) -> Result<Vec<User>, StoreError> {
        let rows = query_as::<_, RawUserSecret>(
            r#"
SELECT u.id AS user_id, u.username, u.credentials, u.created_at AS user_created_at,
       s.id AS secret_id, s.title AS secret_title, s.message AS secret_message,
       s.created_at AS secret_created_at
FROM users AS u
INNER JOIN user_secrets AS s ON s.user_id = u.id
WHERE u.id IN (SELECT user_id FROM user_secrets WHERE title = ?1)
ORDER BY u.rowid, s.seq
            "#,
        )
        .bind(title)
        .fetch_all(&self.pool)
        .await?;

        RawUserSecret::into_users(rows)
    }

    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        self.get_user(id).await
    }

    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        self.upsert_user(user).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        secrets::{Secret, SecretsStore},
        tests::{MockUserBuilder, mock_db},
    };
    use time::OffsetDateTime;
    use uuid::uuid;

    fn titles(secrets: &[Secret]) -> Vec<&str> {
        secrets.iter().map(|secret| secret.title.as_str()).collect()
    }

    #[tokio::test]
    async fn finds_only_users_with_secrets() -> anyhow::Result<()> {
        let db = mock_db().await?;
        assert!(db.find_users_with_secrets().await?.is_empty());

        let created_at = OffsetDateTime::from_unix_timestamp(946720800)?;
        let without_secrets = MockUserBuilder::new(
            uuid!("00000000-0000-0000-0000-000000000001").into(),
            "quiet",
            created_at,
        )
        .build();
        db.save_user(&without_secrets).await?;
        assert!(db.find_users_with_secrets().await?.is_empty());

        let with_secrets = MockUserBuilder::new(
            uuid!("00000000-0000-0000-0000-000000000002").into(),
            "chatty",
            created_at,
        )
        .add_secret(Secret::new("One", "1"))
        .add_secret(Secret::new("Two", "2"))
        .build();
        db.save_user(&with_secrets).await?;

        let users = db.find_users_with_secrets().await?;
        assert_eq!(users, vec![with_secrets]);
        assert_eq!(titles(&users[0].secrets), vec!["One", "Two"]);

        Ok(())
    }

    #[tokio::test]
    async fn finds_users_by_exact_title_with_all_their_secrets() -> anyhow::Result<()> {
        let db = mock_db().await?;
        let created_at = OffsetDateTime::from_unix_timestamp(946720800)?;

        let alice = MockUserBuilder::new(
            uuid!("00000000-0000-0000-0000-000000000001").into(),
            "alice",
            created_at,
        )
        .add_secret(Secret::new("Unicorn", "Real"))
        .add_secret(Secret::new("Other", "Unrelated"))
        .build();
        let bob = MockUserBuilder::new(
            uuid!("00000000-0000-0000-0000-000000000002").into(),
            "bob",
            created_at,
        )
        .add_secret(Secret::new("Unicorns", "Plural"))
        .add_secret(Secret::new("unicorn", "Lowercase"))
        .build();
        db.save_user(&alice).await?;
        db.save_user(&bob).await?;

        let users = db.find_users_with_secret_title("Unicorn").await?;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "alice");
        assert_eq!(titles(&users[0].secrets), vec!["Unicorn", "Other"]);

        assert!(db.find_users_with_secret_title("Unic").await?.is_empty());
        assert!(db.find_users_with_secret_title("").await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn fails_when_database_is_unavailable() -> anyhow::Result<()> {
        let db = mock_db().await?;
        db.pool.close().await;

        assert!(db.find_users_with_secrets().await.is_err());
        assert!(db.find_users_with_secret_title("Unicorn").await.is_err());

        Ok(())
    }
}
