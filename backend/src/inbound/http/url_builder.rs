//! Request-scoped URL builder.
//!
//! Links are absolute and rooted at the scheme and host the client used to
//! reach the server, honouring `Forwarded`/`X-Forwarded-*` via Actix's
//! connection info.

use actix_web::HttpRequest;
use url::Url;

use crate::domain::ports::UrlBuilder;

const API_SEGMENT: &str = "api";
const USERS_SEGMENT: &str = "users";
const CURRENT_USER_SEGMENT: &str = "current_user";

/// Errors raised while deriving a URL builder.
#[derive(Debug, thiserror::Error)]
pub enum RequestUrlError {
    /// The request's scheme and host do not form a valid URL.
    #[error("request origin is not a valid URL: {0}")]
    InvalidOrigin(#[from] url::ParseError),
    /// The base URL cannot have path segments appended.
    #[error("`{0}` cannot be used as a base URL")]
    NotABase(Url),
}

/// Builds absolute API URLs under a base origin.
///
/// # Examples
/// ```
/// use url::Url;
/// use users_api::domain::ports::UrlBuilder;
/// use users_api::inbound::http::url_builder::RequestUrlBuilder;
///
/// let base = Url::parse("https://ci.example.com/").expect("valid URL");
/// let builder = RequestUrlBuilder::new(base).expect("usable base");
/// assert_eq!(builder.users_list_url(), "https://ci.example.com/api/users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrlBuilder {
    base: Url,
}

impl RequestUrlBuilder {
    /// Use `base` as the origin for every generated URL.
    pub fn new(base: Url) -> Result<Self, RequestUrlError> {
        if base.cannot_be_a_base() {
            return Err(RequestUrlError::NotABase(base));
        }
        Ok(Self { base })
    }

    /// Derive the origin from the request's scheme and host.
    pub fn from_request(request: &HttpRequest) -> Result<Self, RequestUrlError> {
        let base = {
            let info = request.connection_info();
            Url::parse(&format!("{}://{}/", info.scheme(), info.host()))?
        };
        Self::new(base)
    }

    fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        // `new` rejects bases without path segments, so this always applies.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }
}

impl UrlBuilder for RequestUrlBuilder {
    fn users_list_url(&self) -> String {
        self.endpoint(&[API_SEGMENT, USERS_SEGMENT])
    }

    fn current_user_url(&self) -> String {
        self.endpoint(&[API_SEGMENT, CURRENT_USER_SEGMENT])
    }

    fn user_url(&self, login_name: &str) -> String {
        self.endpoint(&[API_SEGMENT, USERS_SEGMENT, login_name])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use rstest::{fixture, rstest};

    #[fixture]
    fn builder() -> RequestUrlBuilder {
        RequestUrlBuilder::new(Url::parse("https://ci.example.com/").expect("valid URL"))
            .expect("usable base")
    }

    #[rstest]
    fn builds_collection_and_current_user_urls(builder: RequestUrlBuilder) {
        assert_eq!(builder.users_list_url(), "https://ci.example.com/api/users");
        assert_eq!(
            builder.current_user_url(),
            "https://ci.example.com/api/current_user"
        );
    }

    #[rstest]
    #[case("jdoe", "https://ci.example.com/api/users/jdoe")]
    #[case(":login_name", "https://ci.example.com/api/users/:login_name")]
    #[case("john doe", "https://ci.example.com/api/users/john%20doe")]
    #[case("a/b", "https://ci.example.com/api/users/a%2Fb")]
    fn user_url_encodes_login_name(
        builder: RequestUrlBuilder,
        #[case] login_name: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(builder.user_url(login_name), expected);
    }

    #[rstest]
    fn urls_nest_under_base_path() {
        let builder =
            RequestUrlBuilder::new(Url::parse("http://localhost:8153/go/").expect("valid URL"))
                .expect("usable base");
        assert_eq!(builder.users_list_url(), "http://localhost:8153/go/api/users");
    }

    #[rstest]
    fn rejects_bases_without_paths() {
        let base = Url::parse("mailto:ops@example.com").expect("valid URL");
        assert!(matches!(
            RequestUrlBuilder::new(base),
            Err(RequestUrlError::NotABase(_))
        ));
    }

    #[rstest]
    fn derives_origin_from_request_host() {
        let request = TestRequest::default()
            .insert_header(("Host", "ci.example.com:8153"))
            .to_http_request();
        let builder = RequestUrlBuilder::from_request(&request).expect("valid origin");
        assert_eq!(builder.users_list_url(), "http://ci.example.com:8153/api/users");
    }
}
