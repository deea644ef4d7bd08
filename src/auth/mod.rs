//! Authentication types for the Graph API client.
//!
//! # Overview
//!
//! - [`Token`]: A bearer credential returned by the code exchange
//! - [`Scopes`]: The permissions requested by the login dialog
//! - [`oauth`]: The authorization code flow and page token lookup
//!
//! # OAuth Flow
//!
//! ```rust,ignore
//! use facebook_graph::auth::oauth::{Authenticator, CallbackQuery, StateParam};
//!
//! let authenticator = Authenticator::new(config);
//!
//! // 1. Redirect the user and remember the state
//! let state = StateParam::new();
//! let url = authenticator.auth_url(state.as_ref());
//!
//! // 2. Handle the redirect back
//! let token = authenticator.token(state.as_ref(), &callback).await?;
//!
//! // 3. Talk to the API
//! let me = authenticator.api_connection(&token).me().await?;
//! ```

pub mod oauth;
mod scopes;
mod token;

pub use scopes::Scopes;
pub use token::Token;
