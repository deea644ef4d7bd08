//! Pages and the accounts listing.

use serde::{Deserialize, Serialize};

/// The response of `GET /me/accounts`: the pages the user manages.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Accounts {
    /// Pages in the order the API returned them.
    #[serde(default)]
    pub data: Vec<Page>,
}

impl Accounts {
    /// Returns the first page with the given ID.
    #[must_use]
    pub fn find(&self, page_id: &str) -> Option<&Page> {
        self.data.iter().find(|page| page.id == page_id)
    }
}

/// A Facebook Page.
///
/// # Fields
///
/// `id` and `name` are always present. `access_token` is only filled in by
/// the accounts listing, where it holds the page scoped token.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Page {
    /// The page ID.
    pub id: String,

    /// The page name.
    #[serde(default)]
    pub name: String,

    /// Where the page is located.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The page's website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Contact email addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,

    /// Page scoped access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Address and coordinates of a page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Location {
    /// Street address.
    #[serde(default)]
    pub street: String,

    /// City name.
    #[serde(default)]
    pub city: String,

    /// Country name.
    #[serde(default)]
    pub country: String,

    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Latitude in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}
