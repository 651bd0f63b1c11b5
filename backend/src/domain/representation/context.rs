//! Request-scoped serialization context.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::domain::ports::UrlBuilder;

/// Context key naming the URL-building capability in error reports.
pub const URL_BUILDER_KEY: &str = "url_builder";

/// Default documentation site for the API.
pub const DEFAULT_DOCS_BASE_URL: &str = "https://api.gocd.org";

/// Builds links into the versioned API documentation.
///
/// # Examples
/// ```
/// use users_api::domain::representation::ApiDocs;
///
/// let docs = ApiDocs::new("https://api.gocd.org/", "19.1.0").expect("valid base URL");
/// assert_eq!(docs.api_docs_url("#users"), "https://api.gocd.org/19.1.0/#users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDocs {
    base: String,
    version: String,
}

impl ApiDocs {
    /// Validate `base` as an absolute URL and pair it with an API version.
    pub fn new(base: &str, version: impl Into<String>) -> Result<Self, url::ParseError> {
        Url::parse(base)?;
        Ok(Self {
            base: base.trim_end_matches('/').to_owned(),
            version: version.into(),
        })
    }

    /// Documentation for `version` on the default documentation site.
    pub fn for_version(version: impl Into<String>) -> Self {
        Self {
            base: DEFAULT_DOCS_BASE_URL.to_owned(),
            version: version.into(),
        }
    }

    /// API version the documentation links point at.
    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    /// Documentation URL for `anchor`, e.g. `#users`.
    pub fn api_docs_url(&self, anchor: &str) -> String {
        format!("{}/{}/{anchor}", self.base, self.version)
    }
}

/// Values representers need while rendering a single response.
///
/// Created by the caller per request and dropped once the response is built.
#[derive(Clone)]
pub struct SerializationContext {
    url_builder: Option<Arc<dyn UrlBuilder>>,
    docs: ApiDocs,
}

impl SerializationContext {
    /// Start a context with documentation links but no URL builder.
    pub fn new(docs: ApiDocs) -> Self {
        Self {
            url_builder: None,
            docs,
        }
    }

    /// Attach the URL-building capability.
    #[must_use]
    pub fn with_url_builder(mut self, url_builder: Arc<dyn UrlBuilder>) -> Self {
        self.url_builder = Some(url_builder);
        self
    }

    /// URL builder, when one was supplied.
    pub fn url_builder(&self) -> Option<&dyn UrlBuilder> {
        self.url_builder.as_deref()
    }

    /// Documentation link provider.
    pub fn docs(&self) -> &ApiDocs {
        &self.docs
    }
}

impl fmt::Debug for SerializationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializationContext")
            .field("url_builder", &self.url_builder.as_ref().map(|_| "<UrlBuilder>"))
            .field("docs", &self.docs)
            .finish()
    }
}
