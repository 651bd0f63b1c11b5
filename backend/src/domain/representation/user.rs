//! Single user representation.
//!
//! ```text
//! {
//!   "_links": { "self": ..., "doc": ..., "find": ... },
//!   "login_name": "jdoe",
//!   "display_name": "John Doe",
//!   "enabled": true,
//!   "email": "jdoe@example.com",
//!   "email_me": false,
//!   "checkin_aliases": ["jdoe"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::context::{SerializationContext, URL_BUILDER_KEY};
use super::error::{UserRepresentationError, expected_object};
use super::links::{Link, USERS_DOC_ANCHOR, UserLinks};
use crate::domain::{EmailAddress, LoginName, User};

/// Placeholder segment of the templated `find` link.
pub const LOGIN_NAME_TEMPLATE: &str = ":login_name";

/// Renders one user to JSON and parses it back.
///
/// The users collection representer delegates each element to an
/// implementation of this trait.
pub trait UserRenderer: Send + Sync {
    /// Error raised by [`UserRenderer::render`] and [`UserRenderer::parse`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Render `user` as a JSON document.
    fn render(&self, user: &User, context: &SerializationContext) -> Result<Value, Self::Error>;

    /// Rebuild a user from a JSON document produced by [`UserRenderer::render`].
    fn parse(&self, document: Value) -> Result<User, Self::Error>;
}

/// Default HAL representation of a [`User`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UserRepresenter;

#[derive(Serialize)]
struct UserDocument<'a> {
    #[serde(rename = "_links")]
    links: UserLinks,
    login_name: &'a str,
    display_name: &'a str,
    enabled: bool,
    email: Option<&'a str>,
    email_me: bool,
    checkin_aliases: &'a [String],
}

#[derive(Deserialize)]
struct UserPayload {
    login_name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default = "enabled_by_default")]
    enabled: bool,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_me: bool,
    #[serde(default)]
    checkin_aliases: Vec<String>,
}

fn enabled_by_default() -> bool {
    true
}

impl UserRenderer for UserRepresenter {
    type Error = UserRepresentationError;

    fn render(&self, user: &User, context: &SerializationContext) -> Result<Value, Self::Error> {
        let url_builder = context
            .url_builder()
            .ok_or(UserRepresentationError::MissingContext {
                key: URL_BUILDER_KEY,
            })?;
        let document = UserDocument {
            links: UserLinks {
                self_link: Link::new(url_builder.user_url(user.login_name().as_ref())),
                doc: Link::new(context.docs().api_docs_url(USERS_DOC_ANCHOR)),
                find: Link::new(url_builder.user_url(LOGIN_NAME_TEMPLATE)),
            },
            login_name: user.login_name().as_ref(),
            display_name: user.display_name(),
            enabled: user.is_enabled(),
            email: user.email().map(AsRef::as_ref),
            email_me: user.email_me(),
            checkin_aliases: user.checkin_aliases(),
        };
        Ok(serde_json::to_value(document)?)
    }

    fn parse(&self, document: Value) -> Result<User, Self::Error> {
        if !document.is_object() {
            return Err(UserRepresentationError::MalformedUser(expected_object(
                &document,
                "a user document object",
            )));
        }
        let payload: UserPayload = serde_json::from_value(document)?;
        let mut user = User::new(LoginName::new(payload.login_name)?)
            .with_enabled(payload.enabled)
            .with_email_me(payload.email_me)
            .with_checkin_aliases(payload.checkin_aliases);
        if let Some(display_name) = payload.display_name {
            user = user.with_display_name(display_name);
        }
        if let Some(email) = payload.email.filter(|email| !email.trim().is_empty()) {
            user = user.with_email(EmailAddress::new(email)?);
        }
        Ok(user)
    }
}
