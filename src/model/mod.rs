//! Graph API resource types.
//!
//! Response types deserialize with `serde`; request types implement
//! [`Formable`](crate::clients::Formable) to become form bodies.
//!
//! # Overview
//!
//! | Type | Direction | Endpoint |
//! |------|-----------|----------|
//! | [`User`] | read | `GET /me` |
//! | [`Accounts`], [`Page`], [`Location`] | read | `GET /me/accounts`, `GET /{page-id}` |
//! | [`Post`], [`ChildAttachment`] | write | `POST /{page-id}/feed`, `POST /{post-id}` |
//! | [`PostResponse`] | read | `GET /{post-id}`, publish response |
//! | [`Photo`] | write | `POST /{page-id}/photos` |
//! | [`PhotoResponse`] | read | upload response |

mod page;
mod photo;
mod post;
mod user;

pub use page::{Accounts, Location, Page};
pub use photo::{Photo, PhotoResponse, DEFAULT_PHOTO_FILENAME};
pub use post::{ChildAttachment, Post, PostResponse};
pub use user::User;

pub(crate) use post::WirePostResponse;
