//! Error types for Graph API calls.
//!
//! # Error Handling
//!
//! Every call returns [`GraphError`], which separates the failure sources:
//!
//! - [`GraphError::Network`]: the request could not be sent or the body
//!   could not be read; no parsing was attempted
//! - [`GraphError::Decode`]: the body was not valid JSON, or not the
//!   expected shape
//! - [`GraphError::Api`]: the body carried an `error` envelope, decoded
//!   into [`ApiError`]
//! - [`GraphError::Encode`], [`GraphError::InvalidTimestamp`] and
//!   [`GraphError::InvalidPath`]: local failures, no request involved
//!
//! # Example
//!
//! ```rust,ignore
//! use facebook_graph::clients::GraphError;
//!
//! match api.me().await {
//!     Ok(user) => println!("Hello {}", user.name),
//!     Err(GraphError::Api(e)) => println!("API error {} ({}): {}", e.code, e.error_type, e),
//!     Err(GraphError::Decode(e)) => println!("Unexpected body: {e}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// The `error` envelope of a failed Graph API response.
///
/// Displays as its `message`.
///
/// # Example
///
/// ```rust
/// use facebook_graph::clients::ApiError;
///
/// let error: ApiError = serde_json::from_str(
///     r#"{"message":"Invalid token","type":"OAuthException","code":190}"#,
/// ).unwrap();
///
/// assert_eq!(error.to_string(), "Invalid token");
/// assert_eq!(error.error_type, "OAuthException");
/// assert_eq!(error.code, 190);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// Human readable description.
    #[serde(default)]
    pub message: String,

    /// Error class, e.g. `OAuthException`.
    #[serde(default, rename = "type")]
    pub error_type: String,

    /// Numeric error code.
    #[serde(default)]
    pub code: i64,

    /// Finer grained code, when the API sends one.
    #[serde(default)]
    pub error_subcode: Option<i64>,

    /// Trace identifier for support requests.
    #[serde(default)]
    pub fbtrace_id: Option<String>,
}

/// Unified error type for Graph API calls.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("Failed to decode Graph API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request form could not be URL-encoded.
    #[error("Failed to encode request form: {0}")]
    Encode(#[from] serde_html_form::ser::Error),

    /// The API reported an error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A timestamp in the response did not match the expected layout.
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// The raw value received.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The request path is empty after normalization.
    #[error("Invalid Graph API path: '{path}'")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },
}

impl GraphError {
    /// Returns the API error envelope, if this is an API-reported failure.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

// Verify GraphError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_only() {
        let error = ApiError {
            message: "Invalid token".to_string(),
            error_type: "OAuthException".to_string(),
            code: 190,
            error_subcode: Some(463),
            fbtrace_id: None,
        };
        assert_eq!(error.to_string(), "Invalid token");
    }

    #[test]
    fn test_api_error_decodes_extended_fields() {
        let error: ApiError = serde_json::from_str(
            r#"{"message":"Expired","type":"OAuthException","code":190,"error_subcode":463,"fbtrace_id":"AbC"}"#,
        )
        .unwrap();
        assert_eq!(error.error_subcode, Some(463));
        assert_eq!(error.fbtrace_id.as_deref(), Some("AbC"));
    }

    #[test]
    fn test_api_error_tolerates_missing_fields() {
        let error: ApiError = serde_json::from_str(r#"{"message":"Oops"}"#).unwrap();
        assert_eq!(error.message, "Oops");
        assert_eq!(error.code, 0);
        assert!(error.error_type.is_empty());
    }

    #[test]
    fn test_graph_error_api_is_transparent() {
        let error = GraphError::from(ApiError {
            message: "Unsupported post request.".to_string(),
            ..ApiError::default()
        });
        assert_eq!(error.to_string(), "Unsupported post request.");
        assert!(error.api_error().is_some());
    }

    #[test]
    fn test_graph_error_decode_is_distinct_from_api() {
        let decode = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = GraphError::from(decode);
        assert!(matches!(error, GraphError::Decode(_)));
        assert!(error.api_error().is_none());
        assert!(error.to_string().contains("Failed to decode"));
    }

    #[test]
    fn test_invalid_path_message() {
        let error = GraphError::InvalidPath {
            path: "/".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid Graph API path: '/'");
    }
}
