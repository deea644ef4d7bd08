//! Photo uploads.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use reqwest::Body;
use serde::{Deserialize, Serialize};

use crate::clients::{Form, Formable, TimestampFormat};

/// Filename sent with an upload when none is given.
pub const DEFAULT_PHOTO_FILENAME: &str = "photo.jpeg";

/// A photo to upload to a page.
///
/// The image content is a [`reqwest::Body`], so it can be in-memory bytes or
/// a stream. [`Photo::from_file`] streams a file from disk without reading it
/// into memory first.
///
/// Only the metadata fields are part of [`Formable::as_form`]; the content
/// travels as the multipart `source` part.
///
/// # Example
///
/// ```rust
/// use facebook_graph::model::Photo;
///
/// let photo = Photo::new(vec![0xFFu8, 0xD8, 0xFF])
///     .with_message("New menu")
///     .with_filename("menu.jpeg");
///
/// assert_eq!(photo.filename(), "menu.jpeg");
/// ```
pub struct Photo {
    source: Body,
    filename: String,

    /// Photo caption.
    pub message: String,

    /// Whether the photo shows up in the page feed right away.
    pub published: bool,

    /// When an unpublished photo goes live.
    pub scheduled_publish_time: Option<DateTime<Utc>>,
}

impl Photo {
    /// Creates a published photo from in-memory or streamed content.
    #[must_use]
    pub fn new(source: impl Into<Body>) -> Self {
        Self {
            source: source.into(),
            filename: DEFAULT_PHOTO_FILENAME.to_string(),
            message: String::new(),
            published: true,
            scheduled_publish_time: None,
        }
    }

    /// Opens a file and streams it as the photo content.
    ///
    /// The filename sent with the upload is the file's name.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened.
    pub async fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path).await?;
        let photo = Self::new(file);

        Ok(match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => photo.with_filename(name),
            None => photo,
        })
    }

    /// Sets the filename sent with the upload.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Sets the caption.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets whether the photo is published right away.
    #[must_use]
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Schedules the photo.
    #[must_use]
    pub fn with_scheduled_publish_time(mut self, time: DateTime<Utc>) -> Self {
        self.scheduled_publish_time = Some(time);
        self
    }

    /// Returns the filename sent with the upload.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Splits the photo into its filename and content.
    pub(crate) fn into_source(self) -> (String, Body) {
        (self.filename, self.source)
    }
}

impl Formable for Photo {
    fn as_form(&self, timestamps: TimestampFormat) -> Form {
        let mut form = Form::new();
        form.text("message", &self.message)
            .flag("published", self.published)
            .timestamp(
                "scheduled_publish_time",
                self.scheduled_publish_time.as_ref(),
                timestamps,
            );
        form
    }
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("filename", &self.filename)
            .field("message", &self.message)
            .field("published", &self.published)
            .field("scheduled_publish_time", &self.scheduled_publish_time)
            .finish_non_exhaustive()
    }
}

/// The response of a photo upload.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PhotoResponse {
    /// The photo ID.
    pub id: String,

    /// The ID of the feed story created for the photo.
    #[serde(default)]
    pub post_id: String,
}
