//! Users collection representation.
//!
//! Renders an ordered collection of users with the collection's hyperlinks
//! and delegates every element to a [`UserRenderer`]. Parsing reads the
//! `users` array back through the same renderer; `_links` is write-only.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::context::{SerializationContext, URL_BUILDER_KEY};
use super::error::{RepresentationError, expected_object};
use super::links::{Link, USERS_DOC_ANCHOR, UsersLinks};
use super::user::UserRenderer;
use crate::domain::User;

/// Rendered users collection, serialised as `{"_links": ..., "users": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsersDocument {
    /// Collection hyperlinks.
    #[serde(rename = "_links")]
    pub links: UsersLinks,
    /// Per-user documents in input order.
    pub users: Vec<Value>,
}

#[derive(Deserialize)]
struct UsersPayload {
    #[serde(default)]
    users: Vec<Value>,
}

/// Representer for the users collection.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use users_api::domain::ports::FixtureUrlBuilder;
/// use users_api::domain::representation::{
///     ApiDocs, SerializationContext, UserRepresenter, UsersRepresenter,
/// };
///
/// let context = SerializationContext::new(ApiDocs::for_version("19.1.0"))
///     .with_url_builder(Arc::new(FixtureUrlBuilder));
/// let document = UsersRepresenter::new(UserRepresenter)
///     .render(&[], &context)
///     .expect("render users");
/// assert_eq!(document.links.self_link.href, "/api/users");
/// assert!(document.users.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct UsersRepresenter<R> {
    user: R,
}

impl<R> UsersRepresenter<R>
where
    R: UserRenderer,
{
    /// Build a collection representer delegating elements to `user`.
    pub fn new(user: R) -> Self {
        Self { user }
    }

    /// Render `users` in input order.
    ///
    /// Fails with [`RepresentationError::MissingContext`] when the context
    /// carries no URL builder, even for an empty collection, and aborts on
    /// the first per-user failure.
    pub fn render(
        &self,
        users: &[User],
        context: &SerializationContext,
    ) -> Result<UsersDocument, RepresentationError<R::Error>> {
        let url_builder = context
            .url_builder()
            .ok_or(RepresentationError::MissingContext {
                key: URL_BUILDER_KEY,
            })?;
        let links = UsersLinks {
            self_link: Link::new(url_builder.users_list_url()),
            current_user: Link::new(url_builder.current_user_url()),
            doc: Link::new(context.docs().api_docs_url(USERS_DOC_ANCHOR)),
        };
        let users = users
            .iter()
            .map(|user| self.user.render(user, context))
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepresentationError::Delegate)?;
        debug!(count = users.len(), "rendered users collection");
        Ok(UsersDocument { links, users })
    }

    /// Rebuild the collection from a users document.
    ///
    /// A document without `users` yields an empty collection; anything other
    /// than a JSON object is [`RepresentationError::MalformedDocument`].
    pub fn parse(&self, document: Value) -> Result<Vec<User>, RepresentationError<R::Error>> {
        if !document.is_object() {
            return Err(RepresentationError::MalformedDocument(expected_object(
                &document,
                "a users document object",
            )));
        }
        let payload: UsersPayload =
            serde_json::from_value(document).map_err(RepresentationError::MalformedDocument)?;
        let users = payload
            .users
            .into_iter()
            .map(|element| self.user.parse(element))
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepresentationError::Delegate)?;
        debug!(count = users.len(), "parsed users collection");
        Ok(users)
    }

    /// Parse a users document from JSON text.
    pub fn parse_str(&self, json: &str) -> Result<Vec<User>, RepresentationError<R::Error>> {
        let document = serde_json::from_str(json).map_err(RepresentationError::MalformedDocument)?;
        self.parse(document)
    }
}
