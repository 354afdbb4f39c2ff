use anyhow::{anyhow, bail};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString,
};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};

/// Represents stored user credentials.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub password_hash: String,
}

impl StoredCredentials {
    /// Tries to create `StoredCredentials` with `password_hash` generated from the provided
    /// password.
    pub fn try_from_password(password: &str) -> anyhow::Result<Self> {
        if password.is_empty() {
            bail!("Password cannot be empty.");
        }

        Ok(Self {
            password_hash: Argon2::default()
                .hash_password(password.as_bytes(), &SaltString::generate(&mut OsRng))
                .map(|hash| hash.to_string())
                .map_err(|err| anyhow!("Failed to generate a password hash: {}", err))?,
        })
    }

    /// Checks whether the password matches the stored hash. Fails only if the stored hash is
    /// malformed.
    pub fn verify_password(&self, password: &str) -> anyhow::Result<bool> {
        let parsed_hash = PasswordHash::new(&self.password_hash)
            .map_err(|err| anyhow!("Failed to parse a password hash: {}", err))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use crate::security::StoredCredentials;
    use insta::assert_json_snapshot;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        let credentials = StoredCredentials::try_from_password("pass")?;
        insta::with_settings!({ filters => vec![(r"p=.+", "p=[HASH]")]}, {
             assert_json_snapshot!(credentials, @r###"
             {
               "password_hash": "$argon2id$v=19$m=19456,t=2,p=[HASH]
             }"###);
        });

        Ok(())
    }

    #[test]
    fn can_verify_password() -> anyhow::Result<()> {
        let credentials = StoredCredentials::try_from_password("correct horse")?;
        assert!(credentials.verify_password("correct horse")?);
        assert!(!credentials.verify_password("battery staple")?);
        assert!(!credentials.verify_password("")?);

        Ok(())
    }

    #[test]
    fn fails_for_empty_or_malformed_credentials() {
        assert!(StoredCredentials::try_from_password("").is_err());
        assert!(
            StoredCredentials {
                password_hash: "not-a-hash".to_string()
            }
            .verify_password("pass")
            .is_err()
        );
    }
}
