//! Access tokens returned by the OAuth code exchange.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bearer credential for Graph API calls.
///
/// Tokens are opaque to this crate: they are created by
/// [`Authenticator::token`](crate::auth::oauth::Authenticator::token) (or by
/// the caller from a stored value), held by the caller, and passed into each
/// API connection. Nothing here tracks or refreshes expiry; `expires_in` is
/// carried through from the provider as information only.
///
/// The `Debug` implementation masks the access token.
///
/// # Example
///
/// ```rust
/// use facebook_graph::Token;
///
/// let token = Token::new("EAAB...");
/// assert_eq!(token.access_token, "EAAB...");
/// assert!(!format!("{:?}", token).contains("EAAB"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The bearer credential.
    pub access_token: String,

    /// Token type reported by the provider (usually `bearer`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Refresh token, if the provider issued one. Unused by this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Lifetime in seconds reported by the provider at issue time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

impl Token {
    /// Wraps an existing access token string.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: None,
            refresh_token: None,
            expires_in: None,
        }
    }

    /// Returns the access token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.access_token
    }

    /// Parses the form-encoded token reply of older API versions,
    /// e.g. `access_token=EAAB...&expires=5183944`.
    ///
    /// `expires` becomes `expires_in`.
    pub(crate) fn from_form_encoded(body: &[u8]) -> Result<Self, serde_html_form::de::Error> {
        let wire: FormEncodedToken = serde_html_form::from_bytes(body)?;
        Ok(Self {
            access_token: wire.access_token,
            token_type: wire.token_type,
            refresh_token: None,
            expires_in: wire.expires,
        })
    }
}

/// Wire shape of a form-encoded token reply.
#[derive(Deserialize)]
struct FormEncodedToken {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires: Option<i64>,
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"*****")
            .field("token_type", &self.token_type)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "*****"))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

// Verify Token is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Token>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_deserializes_provider_response() {
        let json = r#"{"access_token":"abc","token_type":"bearer","expires_in":5183944}"#;
        let token: Token = serde_json::from_str(json).unwrap();

        assert_eq!(token.as_str(), "abc");
        assert_eq!(token.token_type.as_deref(), Some("bearer"));
        assert_eq!(token.expires_in, Some(5_183_944));
        assert!(token.refresh_token.is_none());
    }

    #[test]
    fn test_token_debug_masks_secrets() {
        let mut token = Token::new("secret-token");
        token.refresh_token = Some("secret-refresh".to_string());
        let debug = format!("{:?}", token);

        assert!(!debug.contains("secret-token"));
        assert!(!debug.contains("secret-refresh"));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_token_from_form_encoded_reply() {
        let token = Token::from_form_encoded(b"access_token=abc%7Cdef&expires=5183944").unwrap();

        assert_eq!(token.as_str(), "abc|def");
        assert_eq!(token.expires_in, Some(5_183_944));
        assert!(token.token_type.is_none());
    }

    #[test]
    fn test_token_from_form_encoded_requires_access_token() {
        assert!(Token::from_form_encoded(b"expires=5183944").is_err());
        assert!(Token::from_form_encoded(b"<html>Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_token_serialization_skips_missing_fields() {
        let token = Token::new("abc");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"access_token":"abc"}"#);
    }
}
