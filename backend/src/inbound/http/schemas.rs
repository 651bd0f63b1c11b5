//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the wire shape produced by the representers but
//! live in the inbound adapter layer where framework concerns belong.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "login name must not be empty")]
    message: String,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::representation::Link`].
#[derive(ToSchema)]
#[schema(as = crate::domain::representation::Link)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LinkSchema {
    /// Target URL.
    #[schema(example = "https://ci.example.com/api/users")]
    href: String,
}

/// OpenAPI schema for a single user document.
///
/// `_links` carries `self`, `doc` and the templated `find` relation.
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Hyperlinks keyed by relation name.
    _links: BTreeMap<String, LinkSchema>,
    /// Unique login name.
    #[schema(example = "jdoe")]
    login_name: String,
    /// Name shown in the UI; defaults to the login name.
    #[schema(example = "John Doe")]
    display_name: String,
    /// Whether the account may log in.
    enabled: bool,
    /// Notification email address.
    #[schema(example = "jdoe@example.com")]
    email: Option<String>,
    /// Whether the user opted into email notifications.
    email_me: bool,
    /// VCS check-in aliases matched against commit authors.
    checkin_aliases: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::representation::UsersDocument`].
///
/// `_links` carries `self`, `current_user` and `doc` relations.
#[derive(ToSchema)]
#[schema(as = crate::domain::representation::UsersDocument)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UsersDocumentSchema {
    /// Hyperlinks keyed by relation name.
    _links: BTreeMap<String, LinkSchema>,
    /// Users in the order supplied by the users source.
    users: Vec<UserSchema>,
}
