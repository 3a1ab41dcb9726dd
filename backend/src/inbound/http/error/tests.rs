//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn internal_error() -> Error {
    Error::internal("connection string leaked: postgres://secret")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"sql": "SELECT 1"}))
}

async fn body_of(error: &Error) -> Error {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialises")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error: Error) {
    let body = body_of(&internal_error).await;

    assert_eq!(body.code(), ErrorCode::InternalError);
    assert_eq!(body.message(), "Internal server error");
    assert_eq!(body.trace_id(), Some(TRACE_ID));
    assert!(body.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::invalid_request("pageSize must be a positive integer")
        .with_details(json!({"field": "pageSize"}));

    let body = body_of(&error).await;

    assert_eq!(body, error);
}

#[rstest]
fn trace_id_header_is_set_when_known(internal_error: Error) {
    let response = ResponseError::error_response(&internal_error);

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    assert_eq!(header, Some(TRACE_ID));
}

#[rstest]
fn trace_id_header_is_absent_otherwise() {
    let response = ResponseError::error_response(&Error::not_found("missing"));
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}

#[actix_web::test]
async fn malformed_json_uses_the_error_envelope() {
    use actix_web::{App, test as actix_test, web};

    async fn echo(body: web::Json<serde_json::Value>) -> web::Json<serde_json::Value> {
        body
    }

    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .route("/", web::post().to(echo)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Error = actix_test::read_body_json(response).await;
    assert_eq!(body.code(), ErrorCode::InvalidRequest);
}
