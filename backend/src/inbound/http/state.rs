//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UsersQuery;
use crate::domain::representation::ApiDocs;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use users_api::domain::ports::FixtureUsersQuery;
/// use users_api::domain::representation::ApiDocs;
/// use users_api::inbound::http::state::HttpState;
///
/// let state = HttpState::new(Arc::new(FixtureUsersQuery), ApiDocs::for_version("19.1.0"));
/// assert_eq!(state.docs.version(), "19.1.0");
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Source of the users being represented.
    pub users: Arc<dyn UsersQuery>,
    /// Documentation links embedded in every representation.
    pub docs: ApiDocs,
}

impl HttpState {
    /// Bundle the users source with documentation settings.
    pub fn new(users: Arc<dyn UsersQuery>, docs: ApiDocs) -> Self {
        Self { users, docs }
    }
}
