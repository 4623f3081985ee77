//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn body_json(response: HttpResponse) -> Value {
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
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("database password is hunter2")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(header.as_deref(), Some(TRACE_ID));

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "code": "internal_error",
            "message": "Internal server error",
            "traceId": expected_trace_id
        })
    );
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(expected_trace_id: String) {
    let error = Error::invalid_request("first and second must differ")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"field": "second"}));

    let body = body_json(ResponseError::error_response(&error)).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "first and second must differ");
    assert_eq!(body["details"], json!({"field": "second"}));
}

#[rstest]
#[actix_web::test]
async fn responses_without_trace_id_omit_header() {
    let response = ResponseError::error_response(&Error::not_found("missing"));
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
    let body = body_json(response).await;
    assert!(body.get("traceId").is_none());
}

#[rstest]
fn actix_errors_become_internal() {
    let actix = actix_web::error::ErrorBadGateway("upstream");
    assert_eq!(Error::from(actix).code(), ErrorCode::InternalError);
}
