//! HTTP transport for Graph API communication.
//!
//! This module provides the [`HttpClient`] type, which turns Graph API calls
//! into single `reqwest` requests and runs every response body through
//! [`parse_response`].

use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{self, Part};
use reqwest::{Body, RequestBuilder};

use crate::auth::Token;
use crate::clients::errors::GraphError;
use crate::clients::form::{Form, TimestampFormat};
use crate::clients::response::parse_response;
use crate::config::{ApiVersion, GraphConfig, DEFAULT_GRAPH_URL};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the multipart part carrying uploaded file content.
pub const SOURCE_PART: &str = "source";

const ACCESS_TOKEN: &str = "access_token";

/// HTTP transport for the Graph API.
///
/// The client handles:
/// - URL construction from the configured host, API version and path
/// - Default headers (User-Agent, Accept)
/// - An optional `Authorization: Bearer` header for user tokens
/// - Merging a per-call `access_token` (e.g. a page token) into the query
///   or body
/// - Error envelope detection on every response
///
/// There are no retries and no caching; timeouts and connection pooling
/// belong to the injected [`reqwest::Client`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone.
///
/// # Example
///
/// ```rust,ignore
/// use facebook_graph::clients::HttpClient;
///
/// let client = HttpClient::new(reqwest::Client::new(), Some(&config), Some(&token));
/// let body = client.get("me", &[], None).await?;
/// ```
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    api_version: ApiVersion,
    default_headers: HashMap<String, String>,
    bearer: Option<String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a transport on top of an existing `reqwest` client.
    ///
    /// # Arguments
    ///
    /// * `client` - The underlying HTTP client
    /// * `config` - Optional configuration for the Graph host, API version
    ///   and `user_agent_prefix`; defaults apply when `None`
    /// * `token` - Optional user token, sent as a bearer header
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        config: Option<&GraphConfig>,
        token: Option<&Token>,
    ) -> Self {
        let base_uri = config.map_or_else(
            || DEFAULT_GRAPH_URL.to_string(),
            |c| c.graph_url().as_ref().to_string(),
        );
        let api_version = config.map_or_else(ApiVersion::latest, |c| c.api_version().clone());

        let user_agent_prefix = config
            .and_then(GraphConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Facebook Graph Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            client,
            base_uri,
            api_version,
            default_headers,
            bearer: token
                .map(|t| t.access_token.clone())
                .filter(|t| !t.is_empty()),
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the API version used in request paths.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns how request forms encode timestamps for this API version.
    #[must_use]
    pub const fn timestamp_format(&self) -> TimestampFormat {
        self.api_version.timestamp_format()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns `true` if requests carry a bearer header.
    #[must_use]
    pub const fn has_bearer(&self) -> bool {
        self.bearer.is_some()
    }

    /// Builds the full URL for a path.
    ///
    /// Leading slashes are stripped from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidPath`] if nothing is left of the path.
    pub fn url(&self, path: &str) -> Result<String, GraphError> {
        let normalized = path.trim_start_matches('/');
        if normalized.trim().is_empty() {
            return Err(GraphError::InvalidPath {
                path: path.to_string(),
            });
        }
        Ok(format!("{}/{}/{normalized}", self.base_uri, self.api_version))
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] on network failure, undecodable body, or an
    /// error envelope.
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
        access_token: Option<&str>,
    ) -> Result<Bytes, GraphError> {
        let url = self.url(path)?;
        tracing::debug!(method = "GET", path, "Sending Graph API request");

        let query = with_access_token(query, access_token);
        self.send(self.client.get(url).query(&query)).await
    }

    /// Sends a GET request restricted to the given fields.
    ///
    /// The fields are joined with commas into the `fields` parameter.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn get_with_fields(
        &self,
        path: &str,
        query: &[(&str, &str)],
        fields: &[&str],
        access_token: Option<&str>,
    ) -> Result<Bytes, GraphError> {
        let fields = fields.join(",");
        let mut query = query.to_vec();
        query.push(("fields", fields.as_str()));
        self.get(path, &query, access_token).await
    }

    /// Sends a URL-encoded POST request.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`], plus [`GraphError::Encode`].
    pub async fn post_form(
        &self,
        path: &str,
        form: Form,
        access_token: Option<&str>,
    ) -> Result<Bytes, GraphError> {
        let request = self.form_request(path, form, access_token)?;
        self.send(request).await
    }

    /// Sends a URL-encoded POST request and returns the body unchecked.
    ///
    /// For endpoints whose reply is not always JSON; the caller runs
    /// [`parse_response`] itself where it applies.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Network`] or [`GraphError::Encode`].
    pub(crate) async fn post_form_raw(
        &self,
        path: &str,
        form: Form,
        access_token: Option<&str>,
    ) -> Result<Bytes, GraphError> {
        let request = self.form_request(path, form, access_token)?;
        self.send_raw(request).await
    }

    fn form_request(
        &self,
        path: &str,
        mut form: Form,
        access_token: Option<&str>,
    ) -> Result<RequestBuilder, GraphError> {
        let url = self.url(path)?;
        tracing::debug!(method = "POST", path, fields = form.len(), "Sending Graph API request");

        if let Some(token) = access_token {
            form.push(ACCESS_TOKEN, token);
        }
        let body = form.encode()?;

        Ok(self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body))
    }

    /// Sends a multipart POST request with one file part.
    ///
    /// The body holds a `source` part named `filename` with the content of
    /// `source`, followed by one text part per entry of `additional_fields`.
    /// `source` is streamed, so a file body is not buffered in memory.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn post_multipart(
        &self,
        path: &str,
        filename: &str,
        source: Body,
        additional_fields: Form,
        access_token: Option<&str>,
    ) -> Result<Bytes, GraphError> {
        let url = self.url(path)?;
        tracing::debug!(method = "POST", path, filename, "Sending Graph API upload");

        let mut form = multipart::Form::new()
            .part(SOURCE_PART, Part::stream(source).file_name(filename.to_string()));
        for (key, value) in additional_fields {
            form = form.text(key, value);
        }
        if let Some(token) = access_token {
            form = form.text(ACCESS_TOKEN, token.to_string());
        }

        self.send(self.client.post(url).multipart(form)).await
    }

    /// Sends a DELETE request, discarding the response body.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn delete(
        &self,
        path: &str,
        query: &[(&str, &str)],
        access_token: Option<&str>,
    ) -> Result<(), GraphError> {
        let url = self.url(path)?;
        tracing::debug!(method = "DELETE", path, "Sending Graph API request");

        let query = with_access_token(query, access_token);
        self.send(self.client.delete(url).query(&query)).await?;
        Ok(())
    }

    /// Sends a request and checks the body for an error envelope.
    ///
    /// The HTTP status is not consulted: a non-2xx reply whose JSON body has
    /// no `error` object is returned as a success, and a 2xx reply carrying
    /// one is an error.
    async fn send(&self, request: RequestBuilder) -> Result<Bytes, GraphError> {
        parse_response(self.send_raw(request).await?)
    }

    async fn send_raw(&self, mut request: RequestBuilder) -> Result<Bytes, GraphError> {
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Received Graph API response");

        Ok(body)
    }
}

fn with_access_token<'a>(
    query: &[(&'a str, &'a str)],
    access_token: Option<&'a str>,
) -> Vec<(&'a str, &'a str)> {
    let mut query = query.to_vec();
    if let Some(token) = access_token {
        query.push((ACCESS_TOKEN, token));
    }
    query
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("api_version", &self.api_version)
            .field("default_headers", &self.default_headers)
            .field("bearer", &self.bearer.as_ref().map(|_| "*****"))
            .finish_non_exhaustive()
    }
}
