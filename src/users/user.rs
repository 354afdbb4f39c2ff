use crate::{secrets::Secret, security::StoredCredentials, users::UserId};
use serde_derive::Serialize;
use time::OffsetDateTime;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct User {
    #[serde(skip_serializing)]
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub credentials: StoredCredentials,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    /// Secrets in the order they were submitted.
    #[serde(skip_serializing)]
    pub secrets: Vec<Secret>,
}

impl AsRef<User> for User {
    fn as_ref(&self) -> &User {
        self
    }
}
