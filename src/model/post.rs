//! Page posts.
//!
//! Writing and reading a post use different shapes. [`Post`] is what the
//! caller sends to `/{page-id}/feed` or `/{post-id}`; [`PostResponse`] is what
//! the API returns when a post is read back, including read-only fields
//! such as `created_time` and `permalink_url`. [`PostResponse::to_post`] maps
//! the shared fields back into a request.
//!
//! # Timestamps
//!
//! The API reports `scheduled_publish_time` as Unix seconds, with `0` for
//! "not scheduled", and `created_time` as an ISO-8601 string with a numeric
//! offset. Zero and empty values become `None`.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{FieldSelection, Form, Formable, GraphError, NestedAttributes, TimestampFormat};

/// A post to publish or update.
///
/// `Default` produces an empty, published post.
///
/// # Example
///
/// ```rust
/// use facebook_graph::clients::{Formable, TimestampFormat};
/// use facebook_graph::model::Post;
///
/// let post = Post {
///     message: "Opening hours changed".to_string(),
///     ..Post::default()
/// };
///
/// let form = post.as_form(TimestampFormat::Iso8601);
/// assert_eq!(form.get("message"), Some("Opening hours changed"));
/// assert_eq!(form.get("published"), Some("true"));
/// assert!(form.get("link").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// The main body of the post.
    pub message: String,

    /// A URL attached to the post.
    pub link: String,

    /// Preview image URL for the link.
    pub picture: String,

    /// Link title.
    pub name: String,

    /// Link caption.
    pub caption: String,

    /// Link description.
    pub description: String,

    /// Whether the post is visible right away.
    pub published: bool,

    /// When an unpublished post goes live.
    pub scheduled_publish_time: Option<DateTime<Utc>>,

    /// Links shown as a carousel.
    pub child_attachments: Vec<ChildAttachment>,
}

impl Default for Post {
    fn default() -> Self {
        Self {
            message: String::new(),
            link: String::new(),
            picture: String::new(),
            name: String::new(),
            caption: String::new(),
            description: String::new(),
            published: true,
            scheduled_publish_time: None,
            child_attachments: Vec::new(),
        }
    }
}

impl Formable for Post {
    fn as_form(&self, timestamps: TimestampFormat) -> Form {
        let mut form = Form::new();
        form.text("message", &self.message)
            .text("link", &self.link)
            .text("picture", &self.picture)
            .text("name", &self.name)
            .text("caption", &self.caption)
            .text("description", &self.description)
            .flag("published", self.published)
            .timestamp(
                "scheduled_publish_time",
                self.scheduled_publish_time.as_ref(),
                timestamps,
            )
            .nested("child_attachments", &self.child_attachments);
        form
    }
}

/// One card of a multi-link post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildAttachment {
    /// Target URL.
    pub link: String,
    /// Card title.
    pub name: String,
    /// Card description.
    pub description: String,
    /// Card image URL.
    pub picture: String,
}

impl NestedAttributes for ChildAttachment {
    fn attributes(&self) -> Vec<(&'static str, String)> {
        [
            ("link", &self.link),
            ("name", &self.name),
            ("description", &self.description),
            ("picture", &self.picture),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(attribute, value)| (attribute, value.clone()))
        .collect()
    }
}

/// A post as read back from the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostResponse {
    /// The post ID (`{page-id}_{post-id}`).
    pub id: String,

    /// The main body of the post.
    pub message: String,

    /// The attached URL.
    pub link: String,

    /// Whether the post is published. Absent from publish responses.
    pub is_published: Option<bool>,

    /// When the post is scheduled to go live.
    pub scheduled_publish_time: Option<DateTime<Utc>>,

    /// When the post was created.
    pub created_time: Option<DateTime<FixedOffset>>,

    /// Permanent URL of the post.
    pub permalink_url: String,
}

impl PostResponse {
    /// Maps the writable fields back into a [`Post`].
    ///
    /// `message`, `link` and `scheduled_publish_time` carry over;
    /// `is_published` becomes `published`, defaulting to `true` when the API
    /// did not report it. Read-only fields are dropped.
    #[must_use]
    pub fn to_post(&self) -> Post {
        Post {
            message: self.message.clone(),
            link: self.link.clone(),
            published: self.is_published.unwrap_or(true),
            scheduled_publish_time: self.scheduled_publish_time,
            ..Post::default()
        }
    }
}

impl FieldSelection for PostResponse {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "message",
        "link",
        "is_published",
        "scheduled_publish_time",
        "created_time",
        "permalink_url",
    ];
}

/// [`PostResponse`] as it appears on the wire, before timestamp conversion.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WirePostResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    is_published: Option<bool>,
    #[serde(default)]
    scheduled_publish_time: Option<i64>,
    #[serde(default)]
    created_time: Option<String>,
    #[serde(default)]
    permalink_url: Option<String>,
}

impl TryFrom<WirePostResponse> for PostResponse {
    type Error = GraphError;

    fn try_from(wire: WirePostResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.id,
            message: wire.message.unwrap_or_default(),
            link: wire.link.unwrap_or_default(),
            is_published: wire.is_published,
            scheduled_publish_time: scheduled_time(wire.scheduled_publish_time)?,
            created_time: created_time(wire.created_time.as_deref())?,
            permalink_url: wire.permalink_url.unwrap_or_default(),
        })
    }
}

fn scheduled_time(seconds: Option<i64>) -> Result<Option<DateTime<Utc>>, GraphError> {
    match seconds {
        None | Some(0) => Ok(None),
        Some(seconds) => Utc
            .timestamp_opt(seconds, 0)
            .single()
            .map(Some)
            .ok_or_else(|| GraphError::InvalidTimestamp {
                value: seconds.to_string(),
                reason: "out of range".to_string(),
            }),
    }
}

fn created_time(value: Option<&str>) -> Result<Option<DateTime<FixedOffset>>, GraphError> {
    match value {
        None | Some("") => Ok(None),
        Some(value) => DateTime::parse_from_str(value, TimestampFormat::ISO8601_LAYOUT)
            .map(Some)
            .map_err(|e| GraphError::InvalidTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::fields_for;

    fn reconcile(json: &str) -> Result<PostResponse, GraphError> {
        let wire: WirePostResponse = serde_json::from_str(json).unwrap();
        PostResponse::try_from(wire)
    }

    #[test]
    fn test_zero_and_empty_timestamps_stay_unset() {
        let post = reconcile(r#"{"id":"1_2","scheduled_publish_time":0,"created_time":""}"#)
            .unwrap();
        assert!(post.scheduled_publish_time.is_none());
        assert!(post.created_time.is_none());
    }

    #[test]
    fn test_missing_timestamps_stay_unset() {
        let post = reconcile(r#"{"id":"1_2"}"#).unwrap();
        assert_eq!(post.id, "1_2");
        assert!(post.scheduled_publish_time.is_none());
        assert!(post.created_time.is_none());
    }

    #[test]
    fn test_populated_timestamps_are_parsed() {
        let post = reconcile(
            r#"{"id":"1_2","scheduled_publish_time":1700000000,"created_time":"2024-01-01T00:00:00+0000"}"#,
        )
        .unwrap();

        assert_eq!(post.scheduled_publish_time.unwrap().timestamp(), 1_700_000_000);
        let created = post.created_time.unwrap();
        assert_eq!(created.timestamp(), 1_704_067_200);
        assert_eq!(
            created.format(TimestampFormat::ISO8601_LAYOUT).to_string(),
            "2024-01-01T00:00:00+0000"
        );
    }

    #[test]
    fn test_created_time_keeps_offset() {
        let post = reconcile(r#"{"id":"1","created_time":"2015-08-01T12:00:00+0300"}"#).unwrap();
        let created = post.created_time.unwrap();
        assert_eq!(created.offset().local_minus_utc(), 3 * 3600);
        assert_eq!(created.timestamp(), 1_438_419_600);
    }

    #[test]
    fn test_unparseable_created_time_fails() {
        let result = reconcile(r#"{"id":"1","created_time":"yesterday"}"#);
        assert!(matches!(result, Err(GraphError::InvalidTimestamp { .. })));
    }

    #[test]
    fn test_post_form_omits_empty_fields() {
        let form = Post::default().as_form(TimestampFormat::Iso8601);
        assert_eq!(form.len(), 1);
        assert_eq!(form.get("published"), Some("true"));
    }

    #[test]
    fn test_post_form_writes_unpublished_flag_and_schedule() {
        let post = Post {
            message: "Later".to_string(),
            published: false,
            scheduled_publish_time: Utc.timestamp_opt(1_438_387_200, 0).single(),
            ..Post::default()
        };

        let iso = post.as_form(TimestampFormat::Iso8601);
        assert_eq!(iso.get("published"), Some("false"));
        assert_eq!(
            iso.get("scheduled_publish_time"),
            Some("2015-08-01T00:00:00+0000")
        );

        let unix = post.as_form(TimestampFormat::UnixSeconds);
        assert_eq!(unix.get("scheduled_publish_time"), Some("1438387200"));
    }

    #[test]
    fn test_child_attachments_use_indexed_keys() {
        let post = Post {
            child_attachments: vec![
                ChildAttachment {
                    link: "https://example.com/a".to_string(),
                    name: "A".to_string(),
                    ..ChildAttachment::default()
                },
                ChildAttachment {
                    link: "https://example.com/b".to_string(),
                    ..ChildAttachment::default()
                },
            ],
            ..Post::default()
        };

        let form = post.as_form(TimestampFormat::Iso8601);
        let nested: Vec<&str> = form
            .pairs()
            .iter()
            .map(|(k, _)| k.as_str())
            .filter(|k| k.starts_with("child_attachments"))
            .collect();

        assert_eq!(
            nested,
            vec![
                "child_attachments[0][link]",
                "child_attachments[0][name]",
                "child_attachments[1][link]",
            ]
        );
    }

    #[test]
    fn test_to_post_maps_shared_fields() {
        let response = PostResponse {
            id: "1_2".to_string(),
            message: "Hi".to_string(),
            link: "https://example.com".to_string(),
            is_published: Some(false),
            scheduled_publish_time: Utc.timestamp_opt(1_700_000_000, 0).single(),
            created_time: None,
            permalink_url: "https://facebook.com/1/posts/2".to_string(),
        };

        let post = response.to_post();
        assert_eq!(post.message, "Hi");
        assert_eq!(post.link, "https://example.com");
        assert!(!post.published);
        assert_eq!(post.scheduled_publish_time, response.scheduled_publish_time);
    }

    #[test]
    fn test_to_post_defaults_to_published() {
        assert!(PostResponse::default().to_post().published);
    }

    #[test]
    fn test_post_response_field_selection() {
        assert_eq!(
            fields_for::<PostResponse>().join(","),
            "id,message,link,is_published,scheduled_publish_time,created_time,permalink_url"
        );
    }
}
