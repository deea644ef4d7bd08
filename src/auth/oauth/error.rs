//! OAuth-specific error types.
//!
//! # Error Types
//!
//! - [`OAuthError::MissingState`]: The callback carried no `state`
//! - [`OAuthError::InvalidState`]: The callback `state` differs from the issued one
//! - [`OAuthError::AuthorizationDenied`]: The user or provider refused access
//! - [`OAuthError::MissingCode`]: The callback carried no `code`
//! - [`OAuthError::NoSuchPage`]: The user does not manage the requested page
//! - [`OAuthError::InvalidCallback`]: The callback query string is malformed
//! - [`OAuthError::Graph`]: Wrapped Graph API error
//!
//! # Example
//!
//! ```rust
//! use facebook_graph::auth::oauth::OAuthError;
//!
//! let error = OAuthError::NoSuchPage {
//!     page_id: "123".to_string(),
//! };
//! assert_eq!(error.to_string(), "No page with ID '123' among the user's accounts");
//! ```

use crate::clients::GraphError;
use thiserror::Error;

/// Errors that can occur during the OAuth flow and page token lookup.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The callback has no `state` parameter.
    #[error("Missing state parameter in OAuth callback")]
    MissingState,

    /// The callback `state` does not match the one that was issued.
    ///
    /// This is the CSRF check: the callback was not initiated by the
    /// authorization URL this session handed out.
    #[error("Invalid state parameter in OAuth callback")]
    InvalidState,

    /// The provider redirected back with an error instead of a code.
    #[error("Authorization denied: {error} ({description})")]
    AuthorizationDenied {
        /// The `error` parameter, e.g. `access_denied`.
        error: String,
        /// The `error_reason` parameter, e.g. `user_denied`.
        reason: String,
        /// The `error_description` parameter.
        description: String,
    },

    /// The callback has no `code` parameter.
    #[error("Missing code parameter in OAuth callback")]
    MissingCode,

    /// No page with the given ID is among the user's accounts, or it has
    /// no page token.
    #[error("No page with ID '{page_id}' among the user's accounts")]
    NoSuchPage {
        /// The requested page ID.
        page_id: String,
    },

    /// The callback query string could not be parsed.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// Description of what's invalid about the callback.
        reason: String,
    },

    /// Wrapped Graph API error from the code exchange or accounts lookup.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ApiError;

    #[test]
    fn test_flow_errors_format_correctly() {
        assert_eq!(
            OAuthError::MissingState.to_string(),
            "Missing state parameter in OAuth callback"
        );
        assert_eq!(
            OAuthError::InvalidState.to_string(),
            "Invalid state parameter in OAuth callback"
        );
        assert_eq!(
            OAuthError::MissingCode.to_string(),
            "Missing code parameter in OAuth callback"
        );
    }

    #[test]
    fn test_authorization_denied_includes_details() {
        let error = OAuthError::AuthorizationDenied {
            error: "access_denied".to_string(),
            reason: "user_denied".to_string(),
            description: "Permissions error".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("access_denied"));
        assert!(message.contains("Permissions error"));
    }

    #[test]
    fn test_from_graph_error_is_transparent() {
        let graph_error = GraphError::Api(ApiError {
            message: "Invalid verification code format.".to_string(),
            error_type: "OAuthException".to_string(),
            code: 100,
            ..ApiError::default()
        });
        let error: OAuthError = graph_error.into();

        assert!(matches!(error, OAuthError::Graph(GraphError::Api(_))));
        assert_eq!(error.to_string(), "Invalid verification code format.");
    }

    #[test]
    fn test_oauth_error_implements_std_error() {
        let error: &dyn std::error::Error = &OAuthError::MissingCode;
        assert!(error.source().is_none());
    }
}
