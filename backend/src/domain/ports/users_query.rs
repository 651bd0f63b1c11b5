//! Driving port for user-facing queries.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch users without
//! importing where they are stored. Production backs it with a users
//! document; tests use a deterministic in-memory implementation.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Error, LoginName, User};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every known user in a stable order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Look up a single user by login name.
    async fn find_user(&self, login_name: &LoginName) -> Result<Option<User>, Error>;
}

/// Temporary fixture users query used until a users document is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

impl FixtureUsersQuery {
    fn fixture_user() -> Result<User, Error> {
        const FIXTURE_LOGIN_NAME: &str = "ada";
        const FIXTURE_DISPLAY_NAME: &str = "Ada Lovelace";
        const FIXTURE_EMAIL: &str = "ada@example.com";

        // These values are compile-time constants; surface invalid data as an
        // internal error so automated checks catch accidental regressions.
        let login_name = LoginName::new(FIXTURE_LOGIN_NAME)
            .map_err(|err| Error::internal(format!("invalid fixture login name: {err}")))?;
        let email = EmailAddress::new(FIXTURE_EMAIL)
            .map_err(|err| Error::internal(format!("invalid fixture email: {err}")))?;
        Ok(User::new(login_name)
            .with_display_name(FIXTURE_DISPLAY_NAME)
            .with_email(email)
            .with_checkin_aliases(["ada", "alovelace"]))
    }
}

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(vec![Self::fixture_user()?])
    }

    async fn find_user(&self, login_name: &LoginName) -> Result<Option<User>, Error> {
        let user = Self::fixture_user()?;
        Ok((user.login_name() == login_name).then_some(user))
    }
}
