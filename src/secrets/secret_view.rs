use crate::{
    secrets::{Secret, TimeAgo},
    users::User,
};
use serde_derive::Serialize;
use time::OffsetDateTime;

/// Secret decorated with its relative age, built per request and never stored.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretView {
    pub title: String,
    pub message: String,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    pub age_label: String,
}

impl SecretView {
    pub fn new(secret: Secret, now: OffsetDateTime) -> Self {
        Self {
            age_label: TimeAgo::between(secret.created_at, now).to_string(),
            title: secret.title,
            message: secret.message,
            created_at: secret.created_at,
        }
    }
}

/// User together with all of their secrets, in submission order, ready to be rendered.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UserSecretsView {
    pub user: User,
    pub secrets: Vec<SecretView>,
}

impl UserSecretsView {
    /// Decorates every secret of the user using the same reference time.
    pub fn new(mut user: User, now: OffsetDateTime) -> Self {
        let secrets = std::mem::take(&mut user.secrets)
            .into_iter()
            .map(|secret| SecretView::new(secret, now))
            .collect();
        Self { user, secrets }
    }
}

#[cfg(test)]
mod tests {
    use super::{SecretView, UserSecretsView};
    use crate::{secrets::Secret, tests::MockUserBuilder};
    use insta::assert_json_snapshot;
    use time::{Duration, macros::datetime};
    use uuid::uuid;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        let now = datetime!(2010-01-01 11:00:00 UTC);
        let view = UserSecretsView::new(
            MockUserBuilder::new(
                uuid!("00000000-0000-0000-0000-000000000001").into(),
                "my-username",
                now - Duration::days(10),
            )
            .add_secret(
                Secret::new("Unicorn", "I believe in them")
                    .with_created_at(now - Duration::minutes(3)),
            )
            .build(),
            now,
        );

        assert_json_snapshot!(view, @r###"
        {
          "user": {
            "username": "my-username",
            "created_at": 1261479600
          },
          "secrets": [
            {
              "title": "Unicorn",
              "message": "I believe in them",
              "createdAt": 1262343420,
              "ageLabel": "3 minutes ago"
            }
          ]
        }
        "###);

        Ok(())
    }

    #[test]
    fn preserves_secrets_order() {
        let now = datetime!(2010-01-01 11:00:00 UTC);
        let view = UserSecretsView::new(
            MockUserBuilder::new(
                uuid!("00000000-0000-0000-0000-000000000001").into(),
                "my-username",
                now,
            )
            .add_secret(Secret::new("Newer", "B").with_created_at(now - Duration::seconds(5)))
            .add_secret(Secret::new("Older", "A").with_created_at(now - Duration::days(2)))
            .build(),
            now,
        );

        assert!(view.user.secrets.is_empty());
        assert_eq!(
            view.secrets,
            vec![
                SecretView {
                    title: "Newer".to_string(),
                    message: "B".to_string(),
                    created_at: now - Duration::seconds(5),
                    age_label: "5 seconds ago".to_string(),
                },
                SecretView {
                    title: "Older".to_string(),
                    message: "A".to_string(),
                    created_at: now - Duration::days(2),
                    age_label: "2 days ago".to_string(),
                },
            ]
        );
    }
}
