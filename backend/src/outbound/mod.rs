//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **users_document**: users source loaded from a users document on disk.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod users_document;
