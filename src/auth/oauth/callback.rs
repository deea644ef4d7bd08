//! Query parameters of the OAuth redirect.

use serde::{Deserialize, Serialize};

use crate::auth::oauth::error::OAuthError;

/// The query parameters the login dialog appends to the redirect URL.
///
/// On success the provider sends `code` and `state`; on denial it sends
/// `error`, `error_reason` and `error_description` (plus `state`). Unknown
/// parameters are ignored. Empty values are treated as absent by the
/// accessors.
///
/// `CallbackQuery` derives `Deserialize`, so web framework query extractors
/// can produce it directly. [`CallbackQuery::from_query`] parses a raw query
/// string.
///
/// # Example
///
/// ```rust
/// use facebook_graph::auth::oauth::CallbackQuery;
///
/// let query = CallbackQuery::from_query("code=AQB123&state=xyz").unwrap();
/// assert_eq!(query.code(), Some("AQB123"));
/// assert_eq!(query.state(), Some("xyz"));
///
/// let query = CallbackQuery::from_query("code=&state=xyz").unwrap();
/// assert_eq!(query.code(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQuery {
    /// The state echoed back by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// The authorization code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Error code on denial, e.g. `access_denied`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Machine readable denial reason, e.g. `user_denied`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,

    /// Human readable denial description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

impl CallbackQuery {
    /// Creates a callback carrying a state and a code.
    #[must_use]
    pub fn new(state: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
            code: Some(code.into()),
            ..Self::default()
        }
    }

    /// Parses a raw query string, with or without the leading `?`.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::InvalidCallback`] if the string cannot be
    /// decoded.
    pub fn from_query(query: &str) -> Result<Self, OAuthError> {
        serde_html_form::from_str(query.trim_start_matches('?')).map_err(|e| {
            OAuthError::InvalidCallback {
                reason: e.to_string(),
            }
        })
    }

    /// Returns the state, if present and non-empty.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        non_empty(self.state.as_deref())
    }

    /// Returns the code, if present and non-empty.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        non_empty(self.code.as_deref())
    }

    /// Returns the denial error code, if present and non-empty.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        non_empty(self.error.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
