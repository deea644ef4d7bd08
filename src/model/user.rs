//! The authenticated user.

use serde::{Deserialize, Serialize};

/// A Facebook user, as returned by `GET /me`.
///
/// Only `id` and `name` are part of the default field set; the other fields
/// are present when the token grants them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct User {
    /// The user's app scoped ID.
    pub id: String,

    /// The user's full name.
    #[serde(default)]
    pub name: String,

    /// First name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Primary email address. Requires the `email` permission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_default_fields() {
        let user: User = serde_json::from_str(r#"{"id":"10153","name":"Jane Doe"}"#).unwrap();
        assert_eq!(user.id, "10153");
        assert_eq!(user.name, "Jane Doe");
        assert!(user.email.is_none());
    }
}
