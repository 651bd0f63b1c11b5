//! Users API library modules.
//!
//! The crate is laid out hexagonally: [`domain`] holds the user record, the
//! ports and the HAL representers; [`inbound`] exposes them over HTTP; and
//! [`outbound`] adapts stored users documents to the query port.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
