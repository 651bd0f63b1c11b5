//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod schemas;
pub mod state;
pub mod url_builder;
pub mod users;

pub use error::ApiResult;
