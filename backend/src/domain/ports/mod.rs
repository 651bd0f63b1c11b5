//! Domain ports and supporting types for the hexagonal boundary.

mod url_builder;
mod users_query;

pub use url_builder::{FixtureUrlBuilder, UrlBuilder};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::{FixtureUsersQuery, UsersQuery};
