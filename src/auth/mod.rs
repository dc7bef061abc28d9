//! Authentication module for the Xtreme client.
//!
//! Authentication belongs to the transport: the reqwest transport asks its
//! provider to decorate every outgoing request. Services never see
//! credentials.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

use crate::errors::XtremeError;

/// Authentication provider trait.
///
/// Implementations of this trait provide authentication credentials
/// for API requests.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Apply authentication to request headers.
    fn apply_auth(&self, headers: &mut HashMap<String, String>);

    /// Get the authentication scheme name.
    fn scheme(&self) -> &str;

    /// Validate the credentials.
    fn validate(&self) -> Result<(), XtremeError>;
}

/// Bearer token authentication provider.
///
/// Sends the platform session token as `Authorization: Bearer <token>`.
pub struct BearerTokenAuth {
    token: SecretString,
}

impl BearerTokenAuth {
    /// Creates a new bearer token provider.
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }

    /// Creates from a string token.
    pub fn from_string(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
        }
    }

    /// Gets a hint of the token for debugging (last 4 characters).
    pub fn token_hint(&self) -> String {
        secret_hint(&self.token)
    }
}

#[async_trait]
impl AuthProvider for BearerTokenAuth {
    fn apply_auth(&self, headers: &mut HashMap<String, String>) {
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.token.expose_secret()),
        );
    }

    fn scheme(&self) -> &str {
        "Bearer"
    }

    fn validate(&self) -> Result<(), XtremeError> {
        if self.token.expose_secret().trim().is_empty() {
            return Err(XtremeError::configuration("Token cannot be empty"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for BearerTokenAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuth")
            .field("token", &"[REDACTED]")
            .field("token_hint", &self.token_hint())
            .finish()
    }
}

/// Provider that leaves requests unauthenticated.
///
/// Used when no token is configured, e.g. behind a gateway that injects
/// credentials itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAuth;

#[async_trait]
impl AuthProvider for NoAuth {
    fn apply_auth(&self, _headers: &mut HashMap<String, String>) {}

    fn scheme(&self) -> &str {
        "none"
    }

    fn validate(&self) -> Result<(), XtremeError> {
        Ok(())
    }
}

/// Last four characters of a secret, or `****` for short ones.
pub(crate) fn secret_hint(secret: &SecretString) -> String {
    let value = secret.expose_secret();
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 4 {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("...{}", tail)
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_auth_apply() {
        let auth = BearerTokenAuth::from_string("session_token_12345");
        let mut headers = HashMap::new();

        auth.apply_auth(&mut headers);

        assert_eq!(
            headers.get("Authorization"),
            Some(&"Bearer session_token_12345".to_string())
        );
    }

    #[test]
    fn test_bearer_auth_overrides_existing_header() {
        let auth = BearerTokenAuth::from_string("fresh");
        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), "Bearer stale".to_string());

        auth.apply_auth(&mut headers);

        assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer fresh"));
    }

    #[test]
    fn test_bearer_auth_validate() {
        assert!(BearerTokenAuth::from_string("abc").validate().is_ok());
        assert!(BearerTokenAuth::from_string("   ").validate().is_err());
    }

    #[test]
    fn test_no_auth_leaves_headers_alone() {
        let mut headers = HashMap::new();
        NoAuth.apply_auth(&mut headers);
        assert!(headers.is_empty());
        assert_eq!(NoAuth.scheme(), "none");
    }

    #[test]
    fn test_token_hint() {
        assert_eq!(BearerTokenAuth::from_string("session_token_12345").token_hint(), "...2345");
        assert_eq!(BearerTokenAuth::from_string("abc").token_hint(), "****");
    }

    #[test]
    fn test_debug_redacts_token() {
        let auth = BearerTokenAuth::from_string("very_secret_token");
        let debug_str = format!("{:?}", auth);

        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("very_secret_token"));
    }
}
