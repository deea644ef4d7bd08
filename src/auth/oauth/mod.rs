//! OAuth 2.0 authorization code flow for Facebook apps.
//!
//! # Flow
//!
//! 1. **Authorization** ([`Authenticator::auth_url`]): Build the login dialog
//!    URL for a fresh [`StateParam`], store the state in the user's session
//!    and redirect the user.
//!
//! 2. **Callback** ([`Authenticator::token`]): When the user is redirected
//!    back, parse the query into a [`CallbackQuery`], check it against the
//!    stored state and exchange the code for a user [`Token`](crate::Token).
//!
//! 3. **Page token** ([`Authenticator::page_access_token`]): Resolve the
//!    page scoped token needed to publish to one of the user's pages.
//!
//! # Example
//!
//! ```rust,ignore
//! use facebook_graph::auth::oauth::{Authenticator, CallbackQuery, OAuthError, StateParam};
//!
//! let authenticator = Authenticator::new(config);
//!
//! // Step 1: redirect
//! let state = StateParam::new();
//! session.set("oauth_state", state.as_ref());
//! let url = authenticator.auth_url(state.as_ref());
//!
//! // Step 2: callback
//! let callback = CallbackQuery::from_query(request.query_string())?;
//! let expected = session.get::<String>("oauth_state")?;
//! let token = match authenticator.token(&expected, &callback).await {
//!     Ok(token) => token,
//!     Err(OAuthError::InvalidState) => return forbidden(),
//!     Err(e) => return Err(e.into()),
//! };
//!
//! // Step 3: page token
//! let page_token = authenticator.page_access_token(&token, "1234567890").await?;
//! ```

mod authenticator;
mod callback;
mod error;
mod state;

pub use authenticator::Authenticator;
pub use callback::CallbackQuery;
pub use error::OAuthError;
pub use state::StateParam;
