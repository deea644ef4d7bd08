//! HTTP client types for Graph API communication.
//!
//! This module provides the transport layer under [`GraphApi`](crate::GraphApi):
//! request encoding, the HTTP calls themselves, and error envelope detection.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async transport (GET, POST form, POST multipart, DELETE)
//! - [`Form`]: Ordered form pairs produced from resources
//! - [`Formable`] / [`NestedAttributes`]: Conversion of resources into forms
//! - [`TimestampFormat`]: Per-version layout of request timestamps
//! - [`FieldSelection`] / [`fields_for`]: Sparse `fields=` projections
//! - [`parse_response`]: Error envelope detection
//! - [`GraphError`] / [`ApiError`]: Error types
//!
//! # Example
//!
//! ```rust,ignore
//! use facebook_graph::clients::{Form, HttpClient};
//!
//! let client = HttpClient::new(reqwest::Client::new(), Some(&config), None);
//!
//! let mut form = Form::new();
//! form.text("message", "Hello").flag("published", true);
//!
//! let body = client.post_form("1234/feed", form, Some("page-token")).await?;
//! ```

mod errors;
mod fields;
mod form;
mod http_client;
mod response;

pub use errors::{ApiError, GraphError};
pub use fields::{fields_for, FieldSelection};
pub use form::{Form, Formable, NestedAttributes, TimestampFormat};
pub use http_client::{HttpClient, SDK_VERSION, SOURCE_PART};
pub use response::parse_response;

pub(crate) use response::decode;
