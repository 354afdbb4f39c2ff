use crate::{
    database::StoreError,
    secrets::Secret,
    users::User,
};
use itertools::Itertools;
use time::OffsetDateTime;
use uuid::Uuid;

/// A row of the `users` table left-joined with one of the user's secrets.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct RawUserSecret {
    pub user_id: Uuid,
    pub username: String,
    pub credentials: Vec<u8>,
    pub user_created_at: OffsetDateTime,
    pub secret_id: Option<Uuid>,
    pub secret_title: Option<String>,
    pub secret_message: Option<String>,
    pub secret_created_at: Option<OffsetDateTime>,
}

impl RawUserSecret {
    /// Folds rows ordered by user and then by secret into users with their secrets attached.
    pub fn into_users(rows: Vec<RawUserSecret>) -> Result<Vec<User>, StoreError> {
        let mut users = Vec::new();
        for (_, user_rows) in &rows.into_iter().chunk_by(|row| row.user_id) {
            let mut user: Option<User> = None;
            for row in user_rows {
                let secret = row.secret();
                if user.is_none() {
                    user = Some(User {
                        id: row.user_id.into(),
                        username: row.username,
                        credentials: serde_json::from_slice(&row.credentials)?,
                        created_at: row.user_created_at,
                        secrets: vec![],
                    });
                }

                if let (Some(user), Some(secret)) = (user.as_mut(), secret) {
                    user.secrets.push(secret);
                }
            }
            users.extend(user);
        }

        Ok(users)
    }

    /// Users without secrets produce a single row with all secret columns set to `NULL`.
    fn secret(&self) -> Option<Secret> {
        match (
            self.secret_id,
            &self.secret_title,
            &self.secret_message,
            self.secret_created_at,
        ) {
            (Some(id), Some(title), Some(message), Some(created_at)) => Some(Secret {
                id: id.into(),
                title: title.clone(),
                message: message.clone(),
                created_at,
            }),
            _ => None,
        }
    }
}
