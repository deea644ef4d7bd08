//! Typed Graph API operations.
//!
//! This module provides [`GraphApi`], the set of named operations built on
//! top of [`HttpClient`]. Each operation is exactly one HTTP request.
//!
//! # Authentication
//!
//! User level calls (`me`, `accounts`, `page`) are authenticated by the
//! token the `GraphApi` was built with, sent as a bearer header. Page level
//! calls take a page access token argument, which is sent as the
//! `access_token` parameter.
//!
//! # Example
//!
//! ```rust,ignore
//! use facebook_graph::{GraphApi, Token};
//! use facebook_graph::model::Post;
//!
//! let api = GraphApi::with_token(reqwest::Client::new(), Some(&config), &token);
//!
//! let accounts = api.accounts().await?;
//! let page = &accounts.data[0];
//! let page_token = page.access_token.as_deref().unwrap_or_default();
//!
//! let post = Post {
//!     message: "Hello from Rust".to_string(),
//!     ..Post::default()
//! };
//! let created = api.page_publish(page_token, &page.id, &post).await?;
//! let read_back = api.post(page_token, &created.id).await?;
//! ```

use crate::auth::Token;
use crate::clients::{decode, fields_for, Formable, GraphError, HttpClient};
use crate::config::{ApiVersion, GraphConfig};
use crate::model::{Accounts, Page, Photo, PhotoResponse, Post, PostResponse, User, WirePostResponse};

/// Graph API client.
///
/// # Thread Safety
///
/// `GraphApi` is `Send + Sync` and cheap to clone; clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct GraphApi {
    http_client: HttpClient,
}

// Verify GraphApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphApi>();
};

impl GraphApi {
    /// Creates a client without a user token.
    ///
    /// Use this when `client` already carries its own authentication, or
    /// when only page level operations are needed.
    #[must_use]
    pub fn new(client: reqwest::Client, config: Option<&GraphConfig>) -> Self {
        Self {
            http_client: HttpClient::new(client, config, None),
        }
    }

    /// Creates a client that authenticates user level calls with `token`.
    #[must_use]
    pub fn with_token(client: reqwest::Client, config: Option<&GraphConfig>, token: &Token) -> Self {
        Self {
            http_client: HttpClient::new(client, config, Some(token)),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the API version used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        self.http_client.api_version()
    }

    /// Fetches the authenticated user: `GET /me`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if the request fails or the API reports an
    /// error.
    pub async fn me(&self) -> Result<User, GraphError> {
        let body = self.http_client.get("me", &[], None).await?;
        decode(&body)
    }

    /// Lists the pages the user manages: `GET /me/accounts`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if the request fails or the API reports an
    /// error.
    pub async fn accounts(&self) -> Result<Accounts, GraphError> {
        let body = self.http_client.get("me/accounts", &[], None).await?;
        decode(&body)
    }

    /// Fetches a page: `GET /{page-id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidPath`] for a blank ID, otherwise as
    /// [`GraphApi::me`].
    pub async fn page(&self, page_id: &str) -> Result<Page, GraphError> {
        let path = node_path(page_id, None)?;
        let body = self.http_client.get(&path, &[], None).await?;
        decode(&body)
    }

    /// Publishes a post to a page feed: `POST /{page-id}/feed`.
    ///
    /// The response usually carries only the new post's `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidPath`] for a blank ID, otherwise as
    /// [`GraphApi::post`].
    pub async fn page_publish(
        &self,
        page_access_token: &str,
        page_id: &str,
        post: &Post,
    ) -> Result<PostResponse, GraphError> {
        let path = node_path(page_id, Some("feed"))?;
        let form = post.as_form(self.http_client.timestamp_format());
        let body = self
            .http_client
            .post_form(&path, form, Some(page_access_token))
            .await?;
        let wire: WirePostResponse = decode(&body)?;
        PostResponse::try_from(wire)
    }

    /// Uploads a photo to a page: `POST /{page-id}/photos`.
    ///
    /// The photo content is sent as the multipart `source` part; its
    /// metadata fields follow as text parts.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidPath`] for a blank ID, otherwise as
    /// [`GraphApi::me`].
    pub async fn page_photo_create(
        &self,
        page_access_token: &str,
        page_id: &str,
        photo: Photo,
    ) -> Result<PhotoResponse, GraphError> {
        let path = node_path(page_id, Some("photos"))?;
        let fields = photo.as_form(self.http_client.timestamp_format());
        let (filename, source) = photo.into_source();
        let body = self
            .http_client
            .post_multipart(&path, &filename, source, fields, Some(page_access_token))
            .await?;
        decode(&body)
    }

    /// Reads a post: `GET /{post-id}?fields=...`.
    ///
    /// The fields of [`PostResponse`] are requested explicitly, as
    /// `created_time` and `scheduled_publish_time` are not returned by
    /// default. A zero `scheduled_publish_time` or empty `created_time`
    /// leaves the field `None`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidTimestamp`] if `created_time` is present but
    ///   not in `YYYY-MM-DDThh:mm:ss+hhmm` form
    /// - [`GraphError::InvalidPath`] for a blank ID
    /// - any other [`GraphError`] from the request
    pub async fn post(&self, page_access_token: &str, post_id: &str) -> Result<PostResponse, GraphError> {
        let path = node_path(post_id, None)?;
        let fields = fields_for::<PostResponse>();
        let body = self
            .http_client
            .get_with_fields(&path, &[], &fields, Some(page_access_token))
            .await?;
        let wire: WirePostResponse = decode(&body)?;
        PostResponse::try_from(wire)
    }

    /// Updates a post: `POST /{post-id}`.
    ///
    /// The response body is only checked for an error envelope.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidPath`] for a blank ID, otherwise as
    /// [`GraphApi::me`].
    pub async fn post_update(
        &self,
        page_access_token: &str,
        post_id: &str,
        post: &Post,
    ) -> Result<(), GraphError> {
        let path = node_path(post_id, None)?;
        let form = post.as_form(self.http_client.timestamp_format());
        self.http_client
            .post_form(&path, form, Some(page_access_token))
            .await?;
        Ok(())
    }

    /// Deletes a post: `DELETE /{post-id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidPath`] for a blank ID, otherwise as
    /// [`GraphApi::me`].
    pub async fn post_delete(&self, page_access_token: &str, post_id: &str) -> Result<(), GraphError> {
        let path = node_path(post_id, None)?;
        self.http_client
            .delete(&path, &[], Some(page_access_token))
            .await
    }
}

/// Builds `{id}` or `{id}/{edge}`, rejecting blank IDs.
fn node_path(id: &str, edge: Option<&str>) -> Result<String, GraphError> {
    let id = id.trim_matches('/');
    if id.trim().is_empty() {
        return Err(GraphError::InvalidPath {
            path: id.to_string(),
        });
    }
    Ok(match edge {
        Some(edge) => format!("{id}/{edge}"),
        None => id.to_string(),
    })
}
