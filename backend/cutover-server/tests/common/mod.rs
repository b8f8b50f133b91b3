#![allow(dead_code)]

//! Test infrastructure for cutover-server API tests

use cutover_config::ViewConfig;
use cutover_core::{Task, TaskIdGenerator, TaskNotifier, TaskType};
use cutover_db::TaskRepository;
use cutover_server::{AppState, PlanError, PlanGenerator, build_router};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tokio::sync::watch;
use tower::ServiceExt;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const TEST_PLAN_TIMEOUT: Duration = Duration::from_secs(60);

/// AppState over a fresh in-memory database, plan generation disabled
pub async fn create_test_app_state() -> AppState {
    let pool = cutover_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    // Nobody signals shutdown in tests
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);

    AppState {
        pool,
        notifier: TaskNotifier::new(Vec::new()),
        ids: Arc::new(TaskIdGenerator::new()),
        view: ViewConfig::default(),
        plan_generator: None,
        plan_max_tasks: 100,
        metrics: None,
        shutdown: shutdown_rx,
    }
}

pub async fn create_test_app_state_with_plan(generator: Arc<dyn PlanGenerator>) -> AppState {
    let mut state = create_test_app_state().await;
    state.plan_generator = Some(generator);
    state
}

pub fn app(state: AppState) -> Router {
    build_router(state, TEST_TIMEOUT, TEST_PLAN_TIMEOUT)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn test_task(id: i64, name: &str, parent_id: Option<i64>, order: i64) -> Task {
    Task {
        id,
        name: name.to_string(),
        owner: "ops".to_string(),
        start: date("2025-03-01"),
        end: date("2025-03-02"),
        task_type: TaskType::Preparation,
        status: Default::default(),
        dependencies: Vec::new(),
        order,
        parent_id,
        is_expanded: true,
    }
}

pub async fn insert_tasks(state: &AppState, tasks: &[Task]) {
    for task in tasks {
        TaskRepository::upsert(&state.pool, task)
            .await
            .expect("Failed to insert test task");
    }
    state.publish_tasks().await.expect("Failed to publish");
}

/// Send one request through a fresh router; returns status and JSON body
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    send_to(app(state.clone()), method, uri, body).await
}

/// Like [`send`], through a caller-built router
pub async fn send_to(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// Replies with canned text and records the prompts it was given
pub struct FakePlanGenerator {
    reply: Result<String, u16>,
    delay: Duration,
    pub prompts: Mutex<Vec<String>>,
}

impl FakePlanGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Self::replying_after(reply, Duration::ZERO)
    }

    /// Replies only after `delay`, like a slow model
    pub fn replying_after(reply: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            delay,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            delay: Duration::ZERO,
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl PlanGenerator for FakePlanGenerator {
    async fn complete(&self, _system_prompt: &str, prompt: &str) -> Result<String, PlanError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(PlanError::status(*status, "upstream failed")),
        }
    }
}
