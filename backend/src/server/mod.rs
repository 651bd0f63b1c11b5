//! Server construction and route wiring.

mod config;

pub use config::ServerSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use users_api::doc::ApiDoc;
use users_api::domain::ports::{FixtureUsersQuery, UsersQuery};
use users_api::inbound::http::state::HttpState;
use users_api::inbound::http::users::{list_users, show_user};
use users_api::outbound::users_document::DocumentUsersQuery;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

/// Build the users source based on configuration.
///
/// Serves the configured users document when one is set, otherwise falls back
/// to the fixture.
///
/// # Errors
/// Returns [`std::io::Error`] when the users document cannot be read or
/// parsed.
fn build_users_query(settings: &ServerSettings) -> std::io::Result<Arc<dyn UsersQuery>> {
    match &settings.users_file {
        Some(path) => {
            let query = DocumentUsersQuery::load(path).map_err(std::io::Error::other)?;
            Ok(Arc::new(query))
        }
        None => {
            info!("no users file configured; serving fixture users");
            Ok(Arc::new(FixtureUsersQuery))
        }
    }
}

/// Assemble handler state from settings.
///
/// # Errors
/// Returns [`std::io::Error`] when the documentation site is invalid or the
/// users source cannot be built.
pub fn build_http_state(settings: &ServerSettings) -> std::io::Result<web::Data<HttpState>> {
    let docs = settings.api_docs().map_err(|err| {
        std::io::Error::other(format!(
            "invalid docs base URL `{}`: {err}",
            settings.docs_base_url()
        ))
    })?;
    let users = build_users_query(settings)?;
    Ok(web::Data::new(HttpState::new(users, docs)))
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api").service(list_users).service(show_user);

    let app = App::new().app_data(http_state).service(api);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the provided settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when building state, binding the socket, or
/// starting the server fails.
pub fn create_server(settings: &ServerSettings) -> std::io::Result<Server> {
    let http_state = build_http_state(settings)?;
    let bind_addr = settings.bind_addr();

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "users API listening");
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Tests for server wiring.

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use std::io::Write;

    fn settings(users_file: Option<std::path::PathBuf>) -> ServerSettings {
        ServerSettings {
            bind_addr: None,
            docs_base_url: None,
            api_version: Some("19.1.0".to_owned()),
            users_file,
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn app_serves_users_collection_under_api_scope() {
        let state = build_http_state(&settings(None)).expect("state builds");
        let app = actix_test::init_service(build_app(state)).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/users")
            .insert_header(("Host", "localhost:8080"))
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn app_serves_users_from_configured_document() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(br#"{"users": [{"login_name": "grace"}]}"#)
            .expect("write users document");
        let state =
            build_http_state(&settings(Some(file.path().to_path_buf()))).expect("state builds");
        let app = actix_test::init_service(build_app(state)).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/users/grace")
            .insert_header(("Host", "localhost:8080"))
            .to_request();

        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["display_name"], "grace");
    }

    #[rstest]
    fn missing_users_file_fails_startup() {
        let missing = std::env::temp_dir().join("users-api-missing-users.json");
        let result = build_http_state(&settings(Some(missing)));
        assert!(result.is_err());
    }
}
