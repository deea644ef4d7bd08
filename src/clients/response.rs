//! Response envelope handling.
//!
//! Graph API bodies are JSON whether the call succeeded or not. A failed call
//! carries a top-level `error` object; a successful one may omit the key or
//! send it as `null`. The body is therefore decoded twice: once into a
//! [`serde_json::Value`] to inspect the envelope, and once into the result
//! type by the caller.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::errors::{ApiError, GraphError};

/// Checks a response body for an error envelope.
///
/// Returns the body unchanged when there is no `error` key or its value is
/// `null`.
///
/// # Errors
///
/// - [`GraphError::Decode`] if the body is not JSON, or the envelope is not
///   an error object
/// - [`GraphError::Api`] if a non-null envelope is present
///
/// # Example
///
/// ```rust
/// use bytes::Bytes;
/// use facebook_graph::clients::{parse_response, GraphError};
///
/// let ok = parse_response(Bytes::from_static(br#"{"error":null,"id":"1"}"#)).unwrap();
/// assert_eq!(&ok[..], br#"{"error":null,"id":"1"}"#);
///
/// let err = parse_response(Bytes::from_static(
///     br#"{"error":{"message":"Invalid token","type":"OAuthException","code":190}}"#,
/// ))
/// .unwrap_err();
/// assert!(matches!(err, GraphError::Api(_)));
/// assert_eq!(err.to_string(), "Invalid token");
/// ```
pub fn parse_response(body: Bytes) -> Result<Bytes, GraphError> {
    let value: Value = serde_json::from_slice(&body)?;

    match value.get("error") {
        None | Some(Value::Null) => Ok(body),
        Some(envelope) => {
            let error = ApiError::deserialize(envelope)?;
            tracing::warn!(
                code = error.code,
                error_type = %error.error_type,
                "Graph API reported an error: {}",
                error.message
            );
            Err(GraphError::Api(error))
        }
    }
}

/// Decodes a checked body into a result type.
pub(crate) fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, GraphError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_error_is_success() {
        let body = Bytes::from_static(br#"{"error": null, "id": "1"}"#);
        let result = parse_response(body.clone()).unwrap();
        assert_eq!(result, body);
    }

    #[test]
    fn test_absent_error_is_success() {
        let body = Bytes::from_static(br#"{"id":"1"}"#);
        assert_eq!(parse_response(body.clone()).unwrap(), body);
    }

    #[test]
    fn test_error_envelope_is_failure() {
        let body = Bytes::from_static(
            br#"{"error":{"message":"Invalid token","type":"OAuthException","code":190}}"#,
        );
        let error = parse_response(body).unwrap_err();

        let api = error.api_error().unwrap();
        assert_eq!(api.message, "Invalid token");
        assert_eq!(api.error_type, "OAuthException");
        assert_eq!(api.code, 190);
        assert_eq!(error.to_string(), "Invalid token");
    }

    #[test]
    fn test_non_json_is_decode_error() {
        let error = parse_response(Bytes::from_static(b"<html>oops</html>")).unwrap_err();
        assert!(matches!(error, GraphError::Decode(_)));
    }

    #[test]
    fn test_malformed_envelope_is_decode_error() {
        let error = parse_response(Bytes::from_static(br#"{"error":"boom"}"#)).unwrap_err();
        assert!(matches!(error, GraphError::Decode(_)));
    }

    #[test]
    fn test_non_object_body_is_success() {
        let body = Bytes::from_static(b"true");
        assert_eq!(parse_response(body.clone()).unwrap(), body);
    }

    #[test]
    fn test_decode_into_type() {
        #[derive(serde::Deserialize)]
        struct Id {
            id: String,
        }

        let id: Id = decode(&Bytes::from_static(br#"{"id":"42"}"#)).unwrap();
        assert_eq!(id.id, "42");
    }
}
