use crate::{ApiError, ApiErrorResponse, PlanError};

use cutover_core::CoreError;

use axum::{http::StatusCode, response::IntoResponse};
use googletest::prelude::*;

async fn body_of(error: ApiError) -> (StatusCode, ApiErrorResponse) {
    let response = error.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_code() {
    let (status, body) = body_of(ApiError::not_found("Task 7 not found")).await;

    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(body.error.code.as_str(), eq("NOT_FOUND"));
    assert_that!(body.error.message.as_str(), eq("Task 7 not found"));
    assert_that!(body.error.field, none());
}

#[tokio::test]
async fn given_core_validation_error_when_converted_then_field_is_kept() {
    let error = ApiError::from(CoreError::validation("bad date", Some("start")));

    let (status, body) = body_of(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(body.error.code.as_str(), eq("VALIDATION_ERROR"));
    assert_that!(body.error.field, some(eq("start")));
}

#[tokio::test]
async fn given_missing_task_when_converted_then_not_found() {
    let (status, _) = body_of(ApiError::from(CoreError::not_found(42))).await;

    assert_that!(status, eq(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn given_plan_failure_when_converted_then_bad_gateway_without_location() {
    let error = ApiError::from(PlanError::status(503, "overloaded"));

    let (status, body) = body_of(error).await;

    assert_that!(status, eq(StatusCode::BAD_GATEWAY));
    assert_that!(body.error.code.as_str(), eq("BAD_GATEWAY"));
    assert_that!(body.error.message, contains_substring("503"));
    assert_that!(body.error.message, not(contains_substring(".rs")));
}

#[tokio::test]
async fn given_database_error_when_converted_then_details_hidden() {
    let error = ApiError::from(cutover_db::DbError::invalid_data("row 3 is garbage"));

    let (status, body) = body_of(error).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(body.error.code.as_str(), eq("INTERNAL_ERROR"));
    assert_that!(body.error.message, not(contains_substring("garbage")));
}
