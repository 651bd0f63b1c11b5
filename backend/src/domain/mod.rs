//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the API and the
//! users representation. Keep types immutable and document invariants in each
//! type's Rustdoc; wire mapping lives in [`representation`].
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User (alias to `user::User`) — user account exposed by the users API.

pub mod error;
pub mod ports;
pub mod representation;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user::{EmailAddress, LOGIN_NAME_MAX, LoginName, User, UserValidationError};

