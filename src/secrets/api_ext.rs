use crate::{
    api::Api,
    config::SecretsConfig,
    database::{Database, StoreError},
    secrets::{Secret, SecretsStore, UserSecretsView},
    users::{User, UserId},
};
use time::OffsetDateTime;
use tracing::debug;

/// Listing, search and submission of secrets on top of any [`SecretsStore`].
pub struct SecretsApiExt<'a, S: SecretsStore> {
    store: &'a S,
    config: &'a SecretsConfig,
}

impl<'a, S: SecretsStore> SecretsApiExt<'a, S> {
    pub fn new(store: &'a S, config: &'a SecretsConfig) -> Self {
        Self { store, config }
    }

    /// Lists every user who has submitted at least one secret, with all of their secrets labeled
    /// with their age. Returns an empty list if there are no secrets at all.
    pub async fn list_all(&self) -> Result<Vec<UserSecretsView>, StoreError> {
        let users = self.store.find_users_with_secrets().await?;
        Ok(Self::decorate(
            users
                .into_iter()
                .filter(|user| !user.secrets.is_empty())
                .collect(),
        ))
    }

    /// Lists every user who has submitted a secret with exactly the specified title. All secrets
    /// of the matched users are returned, not only the matching ones.
    pub async fn search_by_title(&self, title: &str) -> Result<Vec<UserSecretsView>, StoreError> {
        let users = self.store.find_users_with_secret_title(title).await?;
        if users.is_empty() {
            debug!(search.title = title, "No secrets match the title.");
        }

        Ok(Self::decorate(users))
    }

    /// Appends a new secret to the user's secrets. Unknown users are silently ignored and `None` is
    /// returned, the caller is expected to pass the ID of an authenticated user.
    pub async fn append_secret(
        &self,
        user_id: UserId,
        title: &str,
        message: &str,
    ) -> Result<Option<Secret>, StoreError> {
        let Some(mut user) = self.store.find_user_by_id(user_id).await? else {
            debug!(user.id = %user_id, "Cannot append secret, user doesn't exist.");
            return Ok(None);
        };

        let secret = Secret::new(if self.config.titles { title } else { "" }, message);
        user.secrets.push(secret.clone());
        self.store.save_user(&user).await?;

        debug!(user.id = %user_id, "Appended a new secret.");
        Ok(Some(secret))
    }

    fn decorate(users: Vec<User>) -> Vec<UserSecretsView> {
        let now = OffsetDateTime::now_utc();
        users
            .into_iter()
            .map(|user| UserSecretsView::new(user, now))
            .collect()
    }
}

impl Api {
    /// Returns an API to list, search and submit secrets.
    pub fn secrets(&self) -> SecretsApiExt<'_, Database> {
        SecretsApiExt::new(&self.db, &self.config.secrets)
    }
}
