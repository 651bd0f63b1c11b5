//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

async fn response_body(error: &Error) -> Value {
    let response = error.error_response();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error body is JSON")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
    assert_eq!(error.error_response().status(), expected);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("database password leaked").with_details(json!({ "secret": "x" }));
    let body = response_body(&error).await;
    assert_eq!(
        body,
        json!({ "code": "internal_error", "message": "Internal server error" })
    );
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::invalid_request("login name must not be empty")
        .with_details(json!({ "field": "login_name" }));
    let body = response_body(&error).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "login name must not be empty");
    assert_eq!(body["details"], json!({ "field": "login_name" }));
}
