//! Configuration types for the Graph API client.
//!
//! This module provides the configuration used to talk to the Graph API and
//! to run the OAuth authorization flow.
//!
//! # Overview
//!
//! - [`GraphConfig`]: The main configuration struct holding all settings
//! - [`GraphConfigBuilder`]: A builder for constructing [`GraphConfig`] instances
//! - [`AppId`]: A validated app ID newtype
//! - [`AppSecret`]: A validated app secret newtype with masked debug output
//! - [`HostUrl`]: A validated absolute base URL (trailing `/` trimmed)
//! - [`RedirectUrl`]: A validated OAuth redirect URL, kept exactly as given
//! - [`ApiVersion`]: The Graph API version to use
//!
//! # Example
//!
//! ```rust
//! use facebook_graph::{GraphConfig, AppId, AppSecret, RedirectUrl, ApiVersion};
//!
//! let config = GraphConfig::builder()
//!     .app_id(AppId::new("my-app-id").unwrap())
//!     .app_secret(AppSecret::new("my-secret").unwrap())
//!     .redirect_url(RedirectUrl::new("https://myapp.example.com/auth/callback").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AppId, AppSecret, HostUrl, RedirectUrl};
pub use version::ApiVersion;

use crate::auth::Scopes;
use crate::error::ConfigError;

/// Default host serving the Graph API and the token endpoint.
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";

/// Default host serving the OAuth login dialog.
pub const DEFAULT_DIALOG_URL: &str = "https://www.facebook.com";

/// Configuration for the Graph API client and OAuth flow.
///
/// # Thread Safety
///
/// `GraphConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use facebook_graph::{GraphConfig, AppId, AppSecret, RedirectUrl};
///
/// let config = GraphConfig::builder()
///     .app_id(AppId::new("app-id").unwrap())
///     .app_secret(AppSecret::new("secret").unwrap())
///     .redirect_url(RedirectUrl::new("https://myapp.example.com/callback").unwrap())
///     .scopes("manage_pages,publish_pages".parse().unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.graph_url().as_ref(), "https://graph.facebook.com");
/// ```
#[derive(Clone, Debug)]
pub struct GraphConfig {
    app_id: AppId,
    app_secret: AppSecret,
    redirect_url: RedirectUrl,
    scopes: Scopes,
    api_version: ApiVersion,
    graph_url: HostUrl,
    dialog_url: HostUrl,
    user_agent_prefix: Option<String>,
}

impl GraphConfig {
    /// Creates a new builder for constructing a `GraphConfig`.
    #[must_use]
    pub fn builder() -> GraphConfigBuilder {
        GraphConfigBuilder::new()
    }

    /// Returns the app ID.
    #[must_use]
    pub const fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Returns the app secret.
    #[must_use]
    pub const fn app_secret(&self) -> &AppSecret {
        &self.app_secret
    }

    /// Returns the OAuth redirect URL.
    #[must_use]
    pub const fn redirect_url(&self) -> &RedirectUrl {
        &self.redirect_url
    }

    /// Returns the OAuth scopes requested by the authorize URL.
    #[must_use]
    pub const fn scopes(&self) -> &Scopes {
        &self.scopes
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the Graph API host.
    #[must_use]
    pub const fn graph_url(&self) -> &HostUrl {
        &self.graph_url
    }

    /// Returns the login dialog host.
    #[must_use]
    pub const fn dialog_url(&self) -> &HostUrl {
        &self.dialog_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify GraphConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphConfig>();
};

/// Builder for constructing [`GraphConfig`] instances.
///
/// Required fields are `app_id`, `app_secret` and `redirect_url`.
///
/// # Defaults
///
/// - `scopes`: Empty
/// - `api_version`: [`ApiVersion::latest`]
/// - `graph_url`: [`DEFAULT_GRAPH_URL`]
/// - `dialog_url`: [`DEFAULT_DIALOG_URL`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct GraphConfigBuilder {
    app_id: Option<AppId>,
    app_secret: Option<AppSecret>,
    redirect_url: Option<RedirectUrl>,
    scopes: Option<Scopes>,
    api_version: Option<ApiVersion>,
    graph_url: Option<HostUrl>,
    dialog_url: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl GraphConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the app ID (required).
    #[must_use]
    pub fn app_id(mut self, id: AppId) -> Self {
        self.app_id = Some(id);
        self
    }

    /// Sets the app secret (required).
    #[must_use]
    pub fn app_secret(mut self, secret: AppSecret) -> Self {
        self.app_secret = Some(secret);
        self
    }

    /// Sets the URL the login dialog redirects back to (required).
    #[must_use]
    pub fn redirect_url(mut self, url: RedirectUrl) -> Self {
        self.redirect_url = Some(url);
        self
    }

    /// Sets the OAuth scopes.
    #[must_use]
    pub fn scopes(mut self, scopes: Scopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the Graph API host, e.g. for a proxy or a mock server.
    #[must_use]
    pub fn graph_url(mut self, url: HostUrl) -> Self {
        self.graph_url = Some(url);
        self
    }

    /// Overrides the login dialog host.
    #[must_use]
    pub fn dialog_url(mut self, url: HostUrl) -> Self {
        self.dialog_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`GraphConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `app_id`,
    /// `app_secret` or `redirect_url` are not set.
    pub fn build(self) -> Result<GraphConfig, ConfigError> {
        let app_id = self
            .app_id
            .ok_or(ConfigError::MissingRequiredField { field: "app_id" })?;
        let app_secret = self
            .app_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "app_secret",
            })?;
        let redirect_url = self
            .redirect_url
            .ok_or(ConfigError::MissingRequiredField {
                field: "redirect_url",
            })?;

        let graph_url = match self.graph_url {
            Some(url) => url,
            None => HostUrl::new(DEFAULT_GRAPH_URL)?,
        };
        let dialog_url = match self.dialog_url {
            Some(url) => url,
            None => HostUrl::new(DEFAULT_DIALOG_URL)?,
        };

        Ok(GraphConfig {
            app_id,
            app_secret,
            redirect_url,
            scopes: self.scopes.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            graph_url,
            dialog_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
