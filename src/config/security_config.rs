use serde_derive::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Configuration for the session-based authentication.
#[derive(Deserialize, Serialize, Clone, PartialEq)]
pub struct SecurityConfig {
    /// Name of the cookie that carries the encrypted session.
    pub session_cookie_name: String,
    /// Key used to sign and encrypt session cookies, must be at least 64 bytes long. A random key
    /// is generated on every start if not provided, invalidating all previous sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_key: Option<String>,
    /// Whether session cookies should be marked as `Secure` (HTTPS only).
    pub secure_cookies: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "id".to_string(),
            session_key: None,
            secure_cookies: false,
        }
    }
}

impl Debug for SecurityConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("session_key", &self.session_key.as_ref().map(|_| "[REDACTED]"))
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{RawConfig, SecurityConfig};
    use insta::{assert_debug_snapshot, assert_toml_snapshot};

    #[test]
    fn serialization() {
        assert_toml_snapshot!(SecurityConfig::default(), @r###"
        session_cookie_name = 'id'
        secure_cookies = false
        "###);
    }

    #[test]
    fn deserialization() {
        let config: SecurityConfig = toml::from_str(
            r#"
        session_cookie_name = 'sid'
        session_key = 'a-very-long-key'
        secure_cookies = true
    "#,
        )
        .unwrap();
        assert_eq!(config.session_key.as_deref(), Some("a-very-long-key"));
        assert_debug_snapshot!(config, @r###"
        SecurityConfig {
            session_cookie_name: "sid",
            session_key: Some(
                "[REDACTED]",
            ),
            secure_cookies: true,
        }
        "###);
    }

    #[test]
    fn debug_output_hides_session_key() {
        let config = SecurityConfig {
            session_key: Some("TOPSECRET".repeat(8)),
            ..Default::default()
        };

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("TOPSECRET"));
        assert!(debug_output.contains("[REDACTED]"));

        let raw_config = RawConfig {
            security: config,
            ..Default::default()
        };
        assert!(!format!("{raw_config:?}").contains("TOPSECRET"));
    }
}
