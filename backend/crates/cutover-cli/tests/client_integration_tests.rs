//! Integration tests for the CLI client using wiremock mock server

use cutover_cli::{Client, ClientError};

use googletest::prelude::*;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, method, path, query_param},
};

fn task_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "owner": "",
        "start": "2024-01-01",
        "end": "2024-01-02",
        "type": "prep",
        "status": "todo",
        "dependencies": [],
        "order": id,
        "isExpanded": true
    })
}

#[tokio::test]
async fn given_tasks_on_server_when_fetching_then_decodes_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([task_json(1, "Freeze"), task_json(2, "Backup")])),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let tasks = client.fetch_tasks().await.unwrap();

    assert_that!(tasks.len(), eq(2));
    assert_that!(tasks[1].name, eq("Backup"));
}

#[tokio::test]
async fn given_not_found_body_when_deleting_then_returns_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "NOT_FOUND",
                "message": "Task 99 not found"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.delete_task(99, false).await;

    match result {
        Err(ClientError::Api {
            status,
            code,
            message,
            ..
        }) => {
            assert_that!(status, eq(404));
            assert_that!(code, eq("NOT_FOUND"));
            assert_that!(message, eq("Task 99 not found"));
        }
        other => panic!("expected API error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn given_cascade_flag_when_deleting_then_sends_query_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tasks/3"))
        .and(query_param("cascade", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "deleted": [3, 4] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let body = client.delete_task(3, true).await.unwrap();

    assert_that!(body["deleted"], eq(&json!([3, 4])));
}

#[tokio::test]
async fn given_error_without_json_body_when_requesting_then_status_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tasks/reset"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let err = client.reset_tasks().await.unwrap_err();

    assert_that!(err.status(), some(eq(502)));
    assert_that!(err.to_string(), contains_substring("UNKNOWN"));
}

#[tokio::test]
async fn given_no_content_when_deleting_snapshot_then_returns_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/snapshots/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let body = client.delete_snapshot(7).await.unwrap();

    assert_that!(body.is_null(), eq(true));
}

#[tokio::test]
async fn given_name_when_creating_snapshot_then_posts_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/snapshots"))
        .and(body_json(json!({ "name": "before go-live" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "snapshot": {
                "id": 1,
                "name": "before go-live",
                "createdAt": "2024-01-01T00:00:00Z",
                "taskCount": 2
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let body = client.create_snapshot("before go-live").await.unwrap();

    assert_that!(body["snapshot"]["taskCount"], eq(&json!(2)));
}

#[tokio::test]
async fn given_parent_when_generating_plan_then_sends_camel_case_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/plan/generate"))
        .and(body_json(json!({
            "description": "Migrate billing",
            "parentId": 4,
            "apply": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [task_json(10, "Export billing")],
            "quarantined": [],
            "applied": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let body = client
        .generate_plan("Migrate billing", Some(4), true)
        .await
        .unwrap();

    assert_that!(body["applied"], eq(&json!(true)));
}

#[tokio::test]
async fn given_no_parent_when_generating_plan_then_parent_is_omitted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/plan/generate"))
        .and(body_json(json!({ "description": "Go live", "apply": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [],
            "quarantined": [{ "index": 0, "reason": "name is required" }],
            "applied": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let body = client.generate_plan("Go live", None, false).await.unwrap();

    assert_that!(body["quarantined"][0]["reason"], eq(&json!("name is required")));
}

#[tokio::test]
async fn given_document_when_importing_then_posts_it_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/snapshots/import"))
        .and(body_string_contains("\"name\":\"archived\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "snapshot": {
                "id": 3,
                "name": "archived",
                "createdAt": "2024-01-01T00:00:00Z",
                "taskCount": 1
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let document = json!({
        "name": "archived",
        "createdAt": "2024-01-01T00:00:00Z",
        "tasks": [task_json(1, "Freeze")]
    });

    let client = Client::new(&mock_server.uri());
    let body = client.import_snapshot(&document).await.unwrap();

    assert_that!(body["snapshot"]["id"], eq(&json!(3)));
}
