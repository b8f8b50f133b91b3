use crate::{
    AppState, create_snapshot, delete_snapshot, delete_task, generate_plan, get_snapshot, health,
    import_snapshot, list_snapshots, list_tasks, load_default_tasks, reset_tasks,
    restore_snapshot, sync_tasks, task_events, upsert_task, view_tasks,
};

use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

/// Headroom over the LLM client's own deadline, so its 502 wins the race
pub const PLAN_TIMEOUT_GRACE: Duration = Duration::from_secs(5);

/// Build the application router with all endpoints
///
/// `plan_timeout` is the LLM client's deadline; plan generation gets its own
/// timeout layer above it instead of `request_timeout`.
pub fn build_router(state: AppState, request_timeout: Duration, plan_timeout: Duration) -> Router {
    // The SSE stream is long-lived, so it stays outside the timeout layer
    let api = Router::new()
        .route("/api/tasks", get(list_tasks).post(upsert_task))
        .route("/api/tasks/sync", put(sync_tasks))
        .route("/api/tasks/reset", post(reset_tasks))
        .route("/api/tasks/default", post(load_default_tasks))
        .route("/api/tasks/view", get(view_tasks))
        .route("/api/tasks/{id}", delete(delete_task))
        .route("/api/snapshots", get(list_snapshots).post(create_snapshot))
        .route("/api/snapshots/import", post(import_snapshot))
        .route(
            "/api/snapshots/{id}",
            get(get_snapshot).delete(delete_snapshot),
        )
        .route("/api/snapshots/{id}/restore", post(restore_snapshot))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ));

    let plan = Router::new()
        .route("/api/plan/generate", post(generate_plan))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            plan_timeout + PLAN_TIMEOUT_GRACE,
        ));

    Router::new()
        .merge(api)
        .merge(plan)
        .route("/api/tasks/events", get(task_events))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
