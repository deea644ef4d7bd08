//! Form encoding for Graph API write requests.
//!
//! Resources sent to the API (posts, photos) are flattened into an ordered
//! list of string pairs, [`Form`], which is then either URL-encoded into a
//! request body or turned into multipart text fields.
//!
//! # Encoding Rules
//!
//! - Empty strings, missing timestamps and empty collections are omitted
//! - Booleans are always written, as `true` / `false`
//! - Timestamps follow the [`TimestampFormat`] of the target API version
//! - Lists of sub-objects use indexed brackets: `field[0][attr]=value`
//!
//! # Example
//!
//! ```rust
//! use facebook_graph::clients::Form;
//!
//! let mut form = Form::new();
//! form.text("message", "Hello")
//!     .text("link", "")
//!     .flag("published", false);
//!
//! assert_eq!(form.encode().unwrap(), "message=Hello&published=false");
//! ```

use chrono::{DateTime, Utc};

use crate::clients::errors::GraphError;

/// Layout used when writing timestamps into a request form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimestampFormat {
    /// Seconds since the Unix epoch, e.g. `1438387200`.
    UnixSeconds,
    /// ISO-8601 with a numeric offset, e.g. `2015-08-01T00:00:00+0000`.
    Iso8601,
}

impl TimestampFormat {
    /// `strftime` layout of the ISO-8601 form, shared with response parsing.
    pub const ISO8601_LAYOUT: &'static str = "%Y-%m-%dT%H:%M:%S%z";

    /// Formats a timestamp in this layout.
    #[must_use]
    pub fn format(self, time: &DateTime<Utc>) -> String {
        match self {
            Self::UnixSeconds => time.timestamp().to_string(),
            Self::Iso8601 => time.format(Self::ISO8601_LAYOUT).to_string(),
        }
    }
}

/// An ordered multimap of form keys to values.
///
/// Keys keep insertion order and may repeat. The same `Form` backs
/// URL-encoded bodies and multipart text fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Form {
    pairs: Vec<(String, String)>,
}

impl Form {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair unconditionally.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Appends a text field, skipping empty values.
    pub fn text(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.push(key, value);
        }
        self
    }

    /// Appends a boolean field. Booleans are never omitted.
    pub fn flag(&mut self, key: &str, value: bool) -> &mut Self {
        self.push(key, if value { "true" } else { "false" })
    }

    /// Appends a timestamp field, skipping `None`.
    pub fn timestamp(
        &mut self,
        key: &str,
        value: Option<&DateTime<Utc>>,
        layout: TimestampFormat,
    ) -> &mut Self {
        if let Some(time) = value {
            self.push(key, layout.format(time));
        }
        self
    }

    /// Appends one `field[index][attribute]` pair per sub-object attribute.
    ///
    /// An empty slice writes nothing.
    pub fn nested<T: NestedAttributes>(&mut self, field: &str, items: &[T]) -> &mut Self {
        for (index, item) in items.iter().enumerate() {
            for (attribute, value) in item.attributes() {
                self.push(format!("{field}[{index}][{attribute}]"), value);
            }
        }
        self
    }

    /// Appends every pair of another form, in order.
    pub fn merge(&mut self, other: Self) -> &mut Self {
        self.pairs.extend(other.pairs);
        self
    }

    /// Returns the first value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if at least one value is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the form has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the form as `application/x-www-form-urlencoded`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Encode`] if the serializer rejects the pairs.
    pub fn encode(&self) -> Result<String, GraphError> {
        Ok(serde_html_form::to_string(&self.pairs)?)
    }

    /// Parses an `application/x-www-form-urlencoded` string.
    ///
    /// # Errors
    ///
    /// Returns the deserializer error for malformed input.
    pub fn decode(input: &str) -> Result<Self, serde_html_form::de::Error> {
        let pairs: Vec<(String, String)> = serde_html_form::from_str(input)?;
        Ok(Self { pairs })
    }
}

impl IntoIterator for Form {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// A resource that can be written as a request form.
pub trait Formable {
    /// Flattens the resource. `timestamps` is chosen by the API version the
    /// request targets.
    fn as_form(&self, timestamps: TimestampFormat) -> Form;
}

/// A sub-object written with indexed bracket keys by [`Form::nested`].
pub trait NestedAttributes {
    /// Returns the `(attribute, value)` pairs to write, already filtered of
    /// empty values.
    fn attributes(&self) -> Vec<(&'static str, String)>;
}
