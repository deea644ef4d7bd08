//! State parameter handling for OAuth CSRF protection.
//!
//! The authorize URL carries a `state` value that the provider echoes back in
//! the callback. The caller stores the value it issued (typically in the
//! user's session) and passes it to
//! [`Authenticator::token`](crate::auth::oauth::Authenticator::token), which
//! rejects callbacks whose `state` differs.
//!
//! # Example
//!
//! ```rust
//! use facebook_graph::auth::oauth::StateParam;
//!
//! let state = StateParam::new();
//! assert_eq!(state.as_ref().len(), 32);
//!
//! let restored = StateParam::from_raw(state.to_string());
//! assert_eq!(restored, state);
//! ```

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;

/// OAuth state parameter.
///
/// Any string works as a state; this type adds a random generator and a
/// wrapper for values restored from storage.
///
/// # Thread Safety
///
/// `StateParam` is `Send + Sync`, making it safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateParam {
    value: String,
}

// Verify StateParam is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    /// Length of generated nonces.
    pub const NONCE_LENGTH: usize = 32;

    /// Creates a state holding a random alphanumeric nonce.
    #[must_use]
    pub fn new() -> Self {
        let value: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();

        Self { value }
    }

    /// Wraps an existing state string, e.g. one read back from a session.
    ///
    /// The string is used as-is.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { value: raw.into() }
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_alphanumeric_nonce() {
        let state = StateParam::new();
        assert_eq!(state.as_ref().len(), StateParam::NONCE_LENGTH);
        assert!(state.as_ref().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_new_generates_unique_nonces() {
        assert_ne!(StateParam::new(), StateParam::new());
    }

    #[test]
    fn test_from_raw_wraps_string_unchanged() {
        let state = StateParam::from_raw("custom state/123");
        assert_eq!(state.as_ref(), "custom state/123");
        assert_eq!(state.to_string(), "custom state/123");
    }
}
