//! The OAuth authorization code flow.
//!
//! # Overview
//!
//! [`Authenticator`] walks a login through these states:
//!
//! 1. **Issued**: [`Authenticator::auth_url`] builds the login dialog URL for
//!    a caller supplied `state`. Nothing is stored; the caller keeps the state.
//! 2. **Validated**: [`Authenticator::token`] checks the callback's `state`
//!    and `code`, then exchanges the code for a user [`Token`].
//! 3. **Page resolved**: [`Authenticator::page_access_token`] finds the page
//!    scoped token for one of the user's pages.
//!
//! Failures along the way are [`OAuthError::MissingState`],
//! [`OAuthError::InvalidState`], [`OAuthError::MissingCode`] and
//! [`OAuthError::NoSuchPage`].

use bytes::Bytes;

use crate::api::GraphApi;
use crate::auth::oauth::callback::CallbackQuery;
use crate::auth::oauth::error::OAuthError;
use crate::auth::Token;
use crate::clients::{decode, parse_response, Form, GraphError, HttpClient};
use crate::config::GraphConfig;

/// Path of the token endpoint, relative to the versioned Graph host.
const TOKEN_PATH: &str = "oauth/access_token";

/// OAuth helper bound to one app configuration.
///
/// The authenticator owns a [`reqwest::Client`] that is shared, via cheap
/// clones, with every [`GraphApi`] it hands out.
///
/// # Thread Safety
///
/// `Authenticator` is `Send + Sync`; all methods take `&self`.
///
/// # Example
///
/// ```rust
/// use facebook_graph::{AppId, AppSecret, GraphConfig, RedirectUrl};
/// use facebook_graph::auth::oauth::Authenticator;
///
/// let config = GraphConfig::builder()
///     .app_id(AppId::new("1234").unwrap())
///     .app_secret(AppSecret::new("secret").unwrap())
///     .redirect_url(RedirectUrl::new("https://myapp.example.com/callback").unwrap())
///     .scopes("manage_pages,publish_pages".parse().unwrap())
///     .build()
///     .unwrap();
///
/// let authenticator = Authenticator::new(config);
/// let url = authenticator.auth_url("xyz");
///
/// assert_eq!(
///     url,
///     "https://www.facebook.com/v2.4/dialog/oauth?access_type=offline&client_id=1234\
///      &redirect_uri=https%3A%2F%2Fmyapp.example.com%2Fcallback&response_type=code\
///      &scope=manage_pages%2Cpublish_pages&state=xyz"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Authenticator {
    config: GraphConfig,
    client: reqwest::Client,
}

// Verify Authenticator is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Authenticator>();
};

impl Authenticator {
    /// Creates an authenticator with a default HTTP client.
    #[must_use]
    pub fn new(config: GraphConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Creates an authenticator on top of an existing HTTP client, e.g. one
    /// with custom timeouts.
    #[must_use]
    pub const fn with_client(config: GraphConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Builds the login dialog URL.
    ///
    /// The URL requests offline access and a `code` response for the
    /// configured scopes and redirect URL. Parameters are in alphabetical
    /// order; `scope` is left out when no scopes are configured.
    #[must_use]
    pub fn auth_url(&self, state: &str) -> String {
        let config = &self.config;
        let scope = config.scopes().to_string();

        let mut params = vec![
            ("access_type", "offline"),
            ("client_id", config.app_id().as_ref()),
            ("redirect_uri", config.redirect_url().as_ref()),
            ("response_type", "code"),
        ];
        if !scope.is_empty() {
            params.push(("scope", scope.as_str()));
        }
        params.push(("state", state));

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!(
            "{}/{}/dialog/oauth?{query_string}",
            config.dialog_url(),
            config.api_version()
        )
    }

    /// Validates the OAuth callback and exchanges its code for a user token.
    ///
    /// The checks run in this order; empty parameters count as absent:
    ///
    /// 1. no `state` gives [`OAuthError::MissingState`]
    /// 2. a `state` other than `expected_state` gives [`OAuthError::InvalidState`]
    /// 3. an `error` parameter gives [`OAuthError::AuthorizationDenied`]
    /// 4. no `code` gives [`OAuthError::MissingCode`]
    ///
    /// Then the code is exchanged with one POST to the token endpoint. The
    /// reply is read as JSON, or as `access_token=...&expires=...` when it
    /// is not JSON, which is what `v2.2` sends.
    ///
    /// # Errors
    ///
    /// The flow errors above, or [`OAuthError::Graph`] if the exchange fails.
    pub async fn token(
        &self,
        expected_state: &str,
        callback: &CallbackQuery,
    ) -> Result<Token, OAuthError> {
        let state = callback.state().ok_or(OAuthError::MissingState)?;
        if state != expected_state {
            tracing::debug!("Rejecting OAuth callback with mismatched state");
            return Err(OAuthError::InvalidState);
        }

        if let Some(error) = callback.error() {
            tracing::debug!(error, "OAuth callback reports a denied authorization");
            return Err(OAuthError::AuthorizationDenied {
                error: error.to_string(),
                reason: callback.error_reason.clone().unwrap_or_default(),
                description: callback.error_description.clone().unwrap_or_default(),
            });
        }

        let code = callback.code().ok_or(OAuthError::MissingCode)?;
        tracing::debug!("OAuth state validated, exchanging code for token");

        let mut form = Form::new();
        form.push("client_id", self.config.app_id().as_ref())
            .push("client_secret", self.config.app_secret().as_ref())
            .push("code", code)
            .push("grant_type", "authorization_code")
            .push("redirect_uri", self.config.redirect_url().as_ref());

        let http_client = HttpClient::new(self.client.clone(), Some(&self.config), None);
        let body = http_client.post_form_raw(TOKEN_PATH, form, None).await?;

        Ok(token_from_reply(body)?)
    }

    /// Looks up the page scoped token of one of the user's pages.
    ///
    /// Lists the user's accounts and returns the token of the first entry
    /// whose ID equals `page_id`.
    ///
    /// Unlike a plain lookup, a matching entry with a missing or empty token
    /// is not returned as an empty string: it fails with
    /// [`OAuthError::NoSuchPage`], as the user cannot publish to that page.
    ///
    /// # Errors
    ///
    /// - [`OAuthError::NoSuchPage`] if no entry matches, or the match has no
    ///   token
    /// - [`OAuthError::Graph`] if the listing fails
    pub async fn page_access_token(&self, token: &Token, page_id: &str) -> Result<String, OAuthError> {
        let accounts = self.api_connection(token).accounts().await?;

        accounts
            .find(page_id)
            .and_then(|page| page.access_token.clone())
            .filter(|page_token| !page_token.is_empty())
            .ok_or_else(|| OAuthError::NoSuchPage {
                page_id: page_id.to_string(),
            })
    }

    /// Returns a [`GraphApi`] authenticated with `token`.
    #[must_use]
    pub fn api_connection(&self, token: &Token) -> GraphApi {
        GraphApi::with_token(self.client.clone(), Some(&self.config), token)
    }
}

/// Decodes the token endpoint reply.
///
/// JSON goes through the error envelope check. A body that is not JSON is
/// tried as a form-encoded token; if that fails too the JSON error is
/// reported.
fn token_from_reply(body: Bytes) -> Result<Token, GraphError> {
    match parse_response(body.clone()) {
        Ok(body) => decode(&body),
        Err(GraphError::Decode(json_error)) => {
            match Token::from_form_encoded(&body) {
                Ok(token) if !token.access_token.is_empty() => {
                    tracing::debug!("Token endpoint replied form-encoded");
                    Ok(token)
                }
                _ => Err(GraphError::Decode(json_error)),
            }
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, AppId, AppSecret, HostUrl, RedirectUrl};

    fn create_test_config() -> GraphConfig {
        GraphConfig::builder()
            .app_id(AppId::new("app-id").unwrap())
            .app_secret(AppSecret::new("app-secret").unwrap())
            .redirect_url(RedirectUrl::new("https://myapp.example.com/callback").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_auth_url_without_scopes_omits_scope() {
        let authenticator = Authenticator::new(create_test_config());
        let url = authenticator.auth_url("abc");

        assert!(url.starts_with("https://www.facebook.com/v2.4/dialog/oauth?"));
        assert!(!url.contains("scope="));
        assert!(url.ends_with("&response_type=code&state=abc"));
    }

    #[test]
    fn test_auth_url_encodes_state() {
        let authenticator = Authenticator::new(create_test_config());
        let url = authenticator.auth_url("a b&c");
        assert!(url.ends_with("state=a%20b%26c"));
    }

    #[test]
    fn test_auth_url_uses_configured_version_and_dialog_host() {
        let config = GraphConfig::builder()
            .app_id(AppId::new("app-id").unwrap())
            .app_secret(AppSecret::new("app-secret").unwrap())
            .redirect_url(RedirectUrl::new("https://myapp.example.com/callback").unwrap())
            .dialog_url(HostUrl::new("http://localhost:8080").unwrap())
            .api_version(ApiVersion::V2_2)
            .build()
            .unwrap();
        let url = Authenticator::new(config).auth_url("s");

        assert!(url.starts_with("http://localhost:8080/v2.2/dialog/oauth?access_type=offline&"));
    }

    #[test]
    fn test_auth_url_is_pure() {
        let authenticator = Authenticator::new(create_test_config());
        assert_eq!(authenticator.auth_url("s"), authenticator.auth_url("s"));
    }

    #[tokio::test]
    async fn test_token_requires_state() {
        let authenticator = Authenticator::new(create_test_config());
        let callback = CallbackQuery {
            code: Some("code".to_string()),
            ..CallbackQuery::default()
        };

        let result = authenticator.token("expected", &callback).await;
        assert!(matches!(result, Err(OAuthError::MissingState)));
    }

    #[tokio::test]
    async fn test_token_rejects_mismatched_state() {
        let authenticator = Authenticator::new(create_test_config());
        let callback = CallbackQuery::new("x", "code");

        let result = authenticator.token("y", &callback).await;
        assert!(matches!(result, Err(OAuthError::InvalidState)));
    }

    #[tokio::test]
    async fn test_token_requires_code() {
        let authenticator = Authenticator::new(create_test_config());
        let callback = CallbackQuery::new("s", "");

        let result = authenticator.token("s", &callback).await;
        assert!(matches!(result, Err(OAuthError::MissingCode)));
    }

    #[tokio::test]
    async fn test_token_reports_denial() {
        let authenticator = Authenticator::new(create_test_config());
        let callback =
            CallbackQuery::from_query("state=s&error=access_denied&error_reason=user_denied")
                .unwrap();

        let result = authenticator.token("s", &callback).await;
        match result {
            Err(OAuthError::AuthorizationDenied { error, reason, .. }) => {
                assert_eq!(error, "access_denied");
                assert_eq!(reason, "user_denied");
            }
            other => panic!("Expected AuthorizationDenied, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_state_is_checked_before_denial() {
        let authenticator = Authenticator::new(create_test_config());
        let callback = CallbackQuery::from_query("state=other&error=access_denied").unwrap();

        let result = authenticator.token("s", &callback).await;
        assert!(matches!(result, Err(OAuthError::InvalidState)));
    }

    #[test]
    fn test_api_connection_carries_token() {
        let authenticator = Authenticator::new(create_test_config());
        let api = authenticator.api_connection(&Token::new("user-token"));
        assert!(api.http_client().has_bearer());
    }

    #[test]
    fn test_token_from_json_reply() {
        let body = Bytes::from_static(br#"{"access_token":"abc","expires_in":3600}"#);
        let token = token_from_reply(body).unwrap();

        assert_eq!(token.as_str(), "abc");
        assert_eq!(token.expires_in, Some(3600));
    }

    #[test]
    fn test_token_from_form_encoded_reply() {
        let body = Bytes::from_static(b"access_token=abc&expires=5183944");
        let token = token_from_reply(body).unwrap();

        assert_eq!(token.as_str(), "abc");
        assert_eq!(token.expires_in, Some(5_183_944));
    }

    #[test]
    fn test_token_reply_error_envelope_is_not_retried_as_form() {
        let body = Bytes::from_static(
            br#"{"error":{"message":"Invalid verification code","type":"OAuthException","code":100}}"#,
        );
        assert!(matches!(token_from_reply(body), Err(GraphError::Api(_))));
    }

    #[test]
    fn test_token_reply_neither_json_nor_form() {
        let body = Bytes::from_static(b"<html>Bad Gateway</html>");
        assert!(matches!(token_from_reply(body), Err(GraphError::Decode(_))));

        let body = Bytes::from_static(b"access_token=&expires=10");
        assert!(matches!(token_from_reply(body), Err(GraphError::Decode(_))));
    }
}
