use crate::secrets::SecretId;
use time::OffsetDateTime;

/// A short note submitted by a user. Secrets are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    pub id: SecretId,
    pub title: String,
    pub message: String,
    pub created_at: OffsetDateTime,
}

impl Secret {
    /// Creates a new secret timestamped with the current time.
    pub fn new<T: Into<String>, M: Into<String>>(title: T, message: M) -> Self {
        Self {
            id: SecretId::new(),
            title: title.into(),
            message: message.into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Overrides the creation time of the secret.
    #[cfg(test)]
    pub fn with_created_at(mut self, created_at: OffsetDateTime) -> Self {
        self.created_at = created_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::secrets::Secret;
    use time::{OffsetDateTime, macros::datetime};

    #[test]
    fn defaults_to_creation_time() {
        let before = OffsetDateTime::now_utc();
        let secret = Secret::new("Title", "Message");
        assert!(secret.created_at >= before);
        assert!(secret.created_at <= OffsetDateTime::now_utc());
        assert_eq!(secret.title, "Title");
        assert_eq!(secret.message, "Message");

        let secret = secret.with_created_at(datetime!(2000-01-01 10:00:00 UTC));
        assert_eq!(secret.created_at, datetime!(2000-01-01 10:00:00 UTC));
    }

    #[test]
    fn generates_distinct_ids() {
        assert_ne!(Secret::new("A", "B").id, Secret::new("A", "B").id);
    }
}
