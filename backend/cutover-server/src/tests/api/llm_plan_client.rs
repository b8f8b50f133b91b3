use crate::{LlmPlanClient, PlanError, PlanGenerator};

use std::time::Duration;

use googletest::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_key: Option<&str>) -> LlmPlanClient {
    LlmPlanClient::new(
        &format!("{}/v1/", server.uri()),
        "test-model",
        api_key.map(String::from),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn given_successful_completion_when_complete_then_returns_reply_text() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({"model": "test-model"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("[]")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, Some("sk-test"));

    // When
    let reply = client.complete("system", "make a plan").await;

    // Then
    assert_that!(reply, ok(eq("[]")));
}

#[tokio::test]
async fn given_no_api_key_when_complete_then_no_authorization_header() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(move |request: &wiremock::Request| {
            if request.headers.contains_key("authorization") {
                ResponseTemplate::new(401)
            } else {
                ResponseTemplate::new(200).set_body_json(completion("[{}]"))
            }
        })
        .mount(&server)
        .await;
    let client = client_for(&server, None);

    // When
    let reply = client.complete("system", "plan").await;

    // Then
    assert_that!(reply, ok(eq("[{}]")));
}

#[tokio::test]
async fn given_server_error_when_complete_then_status_error() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let client = client_for(&server, Some("k"));

    // When
    let result = client.complete("system", "plan").await;

    // Then
    match result {
        Err(PlanError::Status { status, body, .. }) => {
            assert_that!(status, eq(500));
            assert_that!(body.as_str(), eq("boom"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_no_choices_when_complete_then_empty_reply() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;
    let client = client_for(&server, Some("k"));

    // When
    let result = client.complete("system", "plan").await;

    // Then
    assert!(matches!(result, Err(PlanError::EmptyReply { .. })));
}

#[tokio::test]
async fn given_slow_endpoint_when_complete_then_timeout_error() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("[]"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let client = LlmPlanClient::new(
        &server.uri(),
        "m",
        None,
        Duration::from_millis(200),
    )
    .unwrap();

    // When
    let result = client.complete("system", "plan").await;

    // Then
    let error = result.unwrap_err();
    assert_that!(error.summary().as_str(), eq("model endpoint timed out"));
}

#[test]
fn given_base_url_with_trailing_slash_when_built_then_single_separator() {
    let client = LlmPlanClient::new(
        "http://localhost:11434/v1/",
        "m",
        None,
        Duration::from_secs(1),
    )
    .unwrap();

    assert_that!(
        client.endpoint(),
        eq("http://localhost:11434/v1/chat/completions")
    );
}
