use crate::{
    api::Api,
    database::{Database, StoreError},
    security::{StoredCredentials, UserSignupError},
    users::{User, UserId},
};
use time::OffsetDateTime;
use tracing::debug;

pub struct SecurityApiExt<'a> {
    db: &'a Database,
}

impl<'a> SecurityApiExt<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Registers a new user with the specified username and password. Validation failures are
    /// reported as [`UserSignupError`].
    pub async fn signup(&self, username: &str, password: &str) -> anyhow::Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(UserSignupError::MissingUsername.into());
        }

        if password.is_empty() {
            return Err(UserSignupError::MissingPassword.into());
        }

        if self.db.get_user_by_username(username).await?.is_some() {
            return Err(UserSignupError::UsernameAlreadyRegistered.into());
        }

        let user = User {
            id: UserId::new(),
            username: username.to_string(),
            credentials: StoredCredentials::try_from_password(password)?,
            created_at: OffsetDateTime::now_utc(),
            secrets: vec![],
        };
        // Another signup with the same username may have won the race since the check above.
        self.db
            .upsert_user(&user)
            .await
            .map_err(into_signup_error)?;

        Ok(user)
    }

    /// Authenticates user with the specified username and password. Returns `None` if the user
    /// doesn't exist or the password doesn't match.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> anyhow::Result<Option<User>> {
        let Some(user) = self.db.get_user_by_username(username.trim()).await? else {
            debug!("Cannot authenticate user, user doesn't exist.");
            return Ok(None);
        };

        if !user.credentials.verify_password(password)? {
            debug!(user.id = %user.id, "Cannot authenticate user, password doesn't match.");
            return Ok(None);
        }

        Ok(Some(user))
    }
}

fn into_signup_error(err: StoreError) -> anyhow::Error {
    match err {
        StoreError::Query(sqlx::Error::Database(ref db_err)) if db_err.is_unique_violation() => {
            UserSignupError::UsernameAlreadyRegistered.into()
        }
        err => err.into(),
    }
}

impl Api {
    /// Returns an API to register and authenticate users.
    pub fn security(&self) -> SecurityApiExt<'_> {
        SecurityApiExt::new(&self.db)
    }
}
