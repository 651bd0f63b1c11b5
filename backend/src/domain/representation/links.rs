//! HAL hyperlinks embedded under `_links`.

use serde::Serialize;

/// Documentation anchor shared by the users resources.
pub const USERS_DOC_ANCHOR: &str = "#users";

/// Single hyperlink, serialised as `{"href": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Target URL.
    pub href: String,
}

impl Link {
    /// Build a link to `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Links of the users collection, in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsersLinks {
    /// The collection itself.
    #[serde(rename = "self")]
    pub self_link: Link,
    /// The authenticated user's resource.
    pub current_user: Link,
    /// Documentation for the users API.
    pub doc: Link,
}

/// Links of a single user resource, in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserLinks {
    /// The user resource itself.
    #[serde(rename = "self")]
    pub self_link: Link,
    /// Documentation for the users API.
    pub doc: Link,
    /// Templated link for looking up any user by login name.
    pub find: Link,
}
