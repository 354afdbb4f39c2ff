use serde::{Deserialize, Serialize};
use std::ops::Deref;
use uuid::Uuid;

/// Internal identity of a secret, never shown to users.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct SecretId(Uuid);

impl SecretId {
    /// Generates a new time-ordered secret ID.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SecretId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SecretId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl Deref for SecretId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
