//! # Facebook Graph API Rust Client
//!
//! A typed client for the Facebook Graph API, with an OAuth helper that turns
//! a login redirect into a user access token and resolves page tokens.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`GraphConfig`] and [`GraphConfigBuilder`]
//! - Validated newtypes for app credentials and URLs
//! - The OAuth 2.0 authorization code flow via [`auth::oauth`]
//! - Page token lookup for publishing as a page
//! - [`GraphApi`], typed operations for users, pages, posts and photos
//! - Error envelope detection on every response
//!
//! ## Quick Start
//!
//! ```rust
//! use facebook_graph::{GraphConfig, AppId, AppSecret, ApiVersion, RedirectUrl};
//!
//! // Create configuration using the builder pattern
//! let config = GraphConfig::builder()
//!     .app_id(AppId::new("your-app-id").unwrap())
//!     .app_secret(AppSecret::new("your-app-secret").unwrap())
//!     .redirect_url(RedirectUrl::new("https://your-app.com/auth/callback").unwrap())
//!     .scopes("manage_pages,publish_pages".parse().unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## OAuth Authentication
//!
//! ```rust,ignore
//! use facebook_graph::auth::oauth::{Authenticator, CallbackQuery, StateParam};
//!
//! let authenticator = Authenticator::new(config);
//!
//! // Step 1: Redirect the user to the login dialog
//! let state = StateParam::new();
//! let url = authenticator.auth_url(state.as_ref());
//! // Store state in the session, redirect to url
//!
//! // Step 2: Handle the callback
//! let callback = CallbackQuery::from_query(query_string)?;
//! let token = authenticator.token(&stored_state, &callback).await?;
//!
//! // Step 3: Resolve a page token
//! let page_token = authenticator.page_access_token(&token, "1234567890").await?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use facebook_graph::model::{Photo, Post};
//!
//! let api = authenticator.api_connection(&token);
//! let me = api.me().await?;
//!
//! let post = Post {
//!     message: "Hello".to_string(),
//!     ..Post::default()
//! };
//! let created = api.page_publish(&page_token, "1234567890", &post).await?;
//!
//! let photo = Photo::from_file("menu.jpeg").await?.with_message("Today's menu");
//! let uploaded = api.page_photo_create(&page_token, "1234567890", photo).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One request per call**: No retries, no caching, no background tasks

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod model;

// Re-export public types at crate root for convenience
pub use api::GraphApi;
pub use auth::{Scopes, Token};
pub use config::{
    ApiVersion, AppId, AppSecret, GraphConfig, GraphConfigBuilder, HostUrl, RedirectUrl,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{ApiError, GraphError, HttpClient};

// Re-export OAuth types for convenience
pub use auth::oauth::{Authenticator, CallbackQuery, OAuthError, StateParam};
