//! HTTP server settings loaded via OrthoConfig.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use users_api::domain::representation::{ApiDocs, DEFAULT_DOCS_BASE_URL};

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Settings controlling how the users API is served.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct ServerSettings {
    /// Socket address to listen on; defaults to `0.0.0.0:8080`.
    pub bind_addr: Option<SocketAddr>,
    /// Documentation site the `doc` links point at.
    pub docs_base_url: Option<String>,
    /// API version embedded in documentation links.
    pub api_version: Option<String>,
    /// Users document to serve instead of the built-in fixture.
    pub users_file: Option<PathBuf>,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or_else(default_bind_addr)
    }

    /// Return the configured documentation site, falling back to the default.
    pub fn docs_base_url(&self) -> &str {
        self.docs_base_url.as_deref().unwrap_or(DEFAULT_DOCS_BASE_URL)
    }

    /// Return the configured API version, falling back to the crate version.
    pub fn api_version(&self) -> &str {
        self.api_version
            .as_deref()
            .unwrap_or(env!("CARGO_PKG_VERSION"))
    }

    /// Build documentation link settings.
    ///
    /// # Errors
    /// Returns [`url::ParseError`] when the documentation site is not an
    /// absolute URL.
    pub fn api_docs(&self) -> Result<ApiDocs, url::ParseError> {
        ApiDocs::new(self.docs_base_url(), self.api_version())
    }
}
