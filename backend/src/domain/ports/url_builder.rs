//! Driven port for building resource URLs.
//!
//! Representers only know link relations; the inbound adapter decides what
//! the concrete URLs look like for the current request.

/// Builds the URLs that representers embed as hyperlinks.
pub trait UrlBuilder: Send + Sync {
    /// URL of the users collection resource.
    fn users_list_url(&self) -> String;

    /// URL of the authenticated user's resource.
    fn current_user_url(&self) -> String;

    /// URL of a single user resource addressed by login name.
    fn user_url(&self, login_name: &str) -> String;
}

/// Path-only URL builder rooted at `/api`.
///
/// # Examples
/// ```
/// use users_api::domain::ports::{FixtureUrlBuilder, UrlBuilder};
///
/// assert_eq!(FixtureUrlBuilder.users_list_url(), "/api/users");
/// assert_eq!(FixtureUrlBuilder.user_url("jdoe"), "/api/users/jdoe");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUrlBuilder;

impl UrlBuilder for FixtureUrlBuilder {
    fn users_list_url(&self) -> String {
        "/api/users".to_owned()
    }

    fn current_user_url(&self) -> String {
        "/api/current_user".to_owned()
    }

    fn user_url(&self, login_name: &str) -> String {
        format!("/api/users/{login_name}")
    }
}
