//! HAL representations of users.
//!
//! Purpose: project already-assembled users into the JSON shape served by the
//! users API and read that shape back. Representers are pure; everything they
//! need per request travels in a [`SerializationContext`].
//!
//! Public surface:
//! - `UsersRepresenter` — users collection with `self`, `current_user` and
//!   `doc` links.
//! - `UserRepresenter` — default per-user renderer behind `UserRenderer`.
//! - `ApiDocs` / `SerializationContext` — request-scoped rendering inputs.

mod context;
mod error;
mod links;
mod user;
mod users;

pub use self::context::{ApiDocs, DEFAULT_DOCS_BASE_URL, SerializationContext, URL_BUILDER_KEY};
pub use self::error::{RepresentationError, UserRepresentationError};
pub use self::links::{Link, USERS_DOC_ANCHOR, UserLinks, UsersLinks};
pub use self::user::{LOGIN_NAME_TEMPLATE, UserRenderer, UserRepresenter};
pub use self::users::{UsersDocument, UsersRepresenter};

/// Collection representer wired to the default per-user renderer.
pub type DefaultUsersRepresenter = UsersRepresenter<UserRepresenter>;

/// Error of [`DefaultUsersRepresenter`].
pub type UsersRepresentationError = RepresentationError<UserRepresentationError>;
