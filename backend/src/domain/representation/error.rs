//! Errors raised while rendering or parsing representations.

use serde::de::Unexpected;
use serde_json::Value;

use crate::domain::UserValidationError;

/// Failure of the users collection representer.
///
/// `E` is the per-user renderer's error, which is surfaced unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RepresentationError<E>
where
    E: std::error::Error + 'static,
{
    /// A required context value was absent.
    #[error("serialization context is missing `{key}`")]
    MissingContext {
        /// Name of the missing value.
        key: &'static str,
    },
    /// The per-user renderer failed.
    #[error(transparent)]
    Delegate(E),
    /// The document to parse does not have the users collection shape.
    #[error("malformed users document: {0}")]
    MalformedDocument(#[source] serde_json::Error),
}

/// Failure of the single user representer.
#[derive(Debug, thiserror::Error)]
pub enum UserRepresentationError {
    /// A required context value was absent.
    #[error("serialization context is missing `{key}`")]
    MissingContext {
        /// Name of the missing value.
        key: &'static str,
    },
    /// The user document is not a JSON object of the expected shape.
    #[error("malformed user document: {0}")]
    MalformedUser(#[from] serde_json::Error),
    /// The user document carried values that violate user invariants.
    #[error("invalid user: {0}")]
    InvalidUser(#[from] UserValidationError),
}

/// Type error for a document that is not a JSON object.
///
/// Derived struct deserialisers also accept sequences positionally, so the
/// parsers check the shape first and report it through this error.
pub(super) fn expected_object(document: &Value, expected: &'static str) -> serde_json::Error {
    let unexpected = match document {
        Value::Null => Unexpected::Unit,
        Value::Bool(value) => Unexpected::Bool(*value),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(value) => Unexpected::Str(value),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    };
    <serde_json::Error as serde::de::Error>::invalid_type(unexpected, &expected)
}
