//! Users API handlers.
//!
//! ```text
//! GET /api/users
//! GET /api/users/{login_name}
//! ```

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, get, web};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::representation::{
    SerializationContext, UserRenderer, UserRepresenter, UsersRepresenter,
};
use crate::domain::{Error, LoginName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::url_builder::RequestUrlBuilder;

fn serialization_context(
    request: &HttpRequest,
    state: &HttpState,
) -> ApiResult<SerializationContext> {
    let url_builder = RequestUrlBuilder::from_request(request).map_err(|err| {
        Error::invalid_request("request host cannot be used to build links")
            .with_details(json!({ "reason": err.to_string() }))
    })?;
    Ok(SerializationContext::new(state.docs.clone()).with_url_builder(Arc::new(url_builder)))
}

fn map_render_error(err: &dyn std::error::Error) -> Error {
    error!(error = %err, "users representation failed");
    Error::internal("failed to render users")
}

/// List known users as a HAL collection.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users collection", body = crate::inbound::http::schemas::UsersDocumentSchema),
        (status = 400, description = "Invalid request", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    request: HttpRequest,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let context = serialization_context(&request, &state)?;
    let users = state.users.list_users().await?;
    let document = UsersRepresenter::new(UserRepresenter)
        .render(&users, &context)
        .map_err(|err| map_render_error(&err))?;
    debug!(count = document.users.len(), "serving users collection");
    Ok(HttpResponse::Ok().json(document))
}

/// Show a single user.
#[utoipa::path(
    get,
    path = "/api/users/{login_name}",
    params(("login_name" = String, Path, description = "Login name of the user")),
    responses(
        (status = 200, description = "User", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Invalid login name", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Unknown user", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "showUser"
)]
#[get("/users/{login_name}")]
pub async fn show_user(
    request: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let login_name = LoginName::new(path.into_inner()).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({ "field": "login_name" }))
    })?;
    let user = state
        .users
        .find_user(&login_name)
        .await?
        .ok_or_else(|| Error::not_found(format!("user `{login_name}` was not found")))?;
    let context = serialization_context(&request, &state)?;
    let document = UserRepresenter
        .render(&user, &context)
        .map_err(|err| map_render_error(&err))?;
    Ok(HttpResponse::Ok().json(document))
}
