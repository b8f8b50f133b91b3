//! Task REST API handlers
//!
//! Every mutation commits to SQLite, then re-reads the collection and
//! publishes it to SSE subscribers.

use crate::{
    ApiError, ApiResult, AppState, CountResponse, DeleteResponse, DeleteTaskQuery, Metrics,
    UpsertResponse, ViewQuery, ViewResponse, decode_task,
};

use cutover_core::{
    DateRange, Task, build_view_model, collect_descendants, default_plan, dependency_violations,
    ensure_unique_ids, layout_bars,
};
use cutover_db::TaskRepository;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::Value;

/// GET /api/tasks
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = TaskRepository::find_all(&state.pool).await?;
    log::debug!("Listing {} tasks", tasks.len());
    Ok(Json(tasks))
}

/// POST /api/tasks
///
/// Full-object upsert. Without an id the server assigns one.
pub async fn upsert_task(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<UpsertResponse>> {
    let Json(body) = payload?;

    let next_order = next_order(&state).await?;
    let task = decode_task(body, &state.ids, next_order)
        .map_err(|message| ApiError::validation(message, None))?;

    TaskRepository::upsert(&state.pool, &task).await?;
    state.publish_tasks().await?;

    Metrics::task_mutation("upsert");
    log::info!("Upserted task {} '{}'", task.id, task.name);

    Ok(Json(UpsertResponse { id: task.id }))
}

/// PUT /api/tasks/sync
///
/// Bulk upsert in one transaction. Any bad entry rejects the whole batch.
pub async fn sync_tasks(
    State(state): State<AppState>,
    payload: Result<Json<Vec<Value>>, JsonRejection>,
) -> ApiResult<Json<CountResponse>> {
    let Json(items) = payload?;

    let first_order = next_order(&state).await?;
    let tasks = items
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            decode_task(value, &state.ids, first_order + index as i64).map_err(|message| {
                ApiError::validation(format!("tasks[{index}]: {message}"), Some("tasks"))
            })
        })
        .collect::<ApiResult<Vec<Task>>>()?;
    ensure_unique_ids(&tasks)?;

    let mut tx = state.pool.begin().await?;
    let count = TaskRepository::upsert_many(&mut tx, &tasks).await?;
    tx.commit().await?;

    state.publish_tasks().await?;

    Metrics::task_mutation("sync");
    log::info!("Synced {} tasks", count);

    Ok(Json(CountResponse { count }))
}

/// DELETE /api/tasks/{id}[?cascade=true]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    query: Result<Query<DeleteTaskQuery>, QueryRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Query(query) = query?;

    let deleted = if query.cascade {
        let mut tx = state.pool.begin().await?;
        let tasks = TaskRepository::find_all(&mut *tx).await?;
        let doomed = collect_descendants(&tasks, id);
        if doomed.is_empty() {
            return Err(ApiError::not_found(format!("Task {} not found", id)));
        }
        TaskRepository::delete_many(&mut tx, &doomed).await?;
        tx.commit().await?;
        doomed
    } else {
        if !TaskRepository::delete(&state.pool, id).await? {
            return Err(ApiError::not_found(format!("Task {} not found", id)));
        }
        vec![id]
    };

    state.publish_tasks().await?;

    Metrics::task_mutation("delete");
    log::info!("Deleted {} task(s) starting at {}", deleted.len(), id);

    Ok(Json(DeleteResponse { deleted }))
}

/// POST /api/tasks/reset
///
/// Remove every task.
pub async fn reset_tasks(State(state): State<AppState>) -> ApiResult<Json<CountResponse>> {
    let removed = TaskRepository::delete_all(&state.pool).await?;
    state.publish_tasks().await?;

    Metrics::task_mutation("reset");
    log::info!("Reset: removed {} tasks", removed);

    Ok(Json(CountResponse {
        count: removed as usize,
    }))
}

/// POST /api/tasks/default
///
/// Replace the collection with the built-in plan.
pub async fn load_default_tasks(State(state): State<AppState>) -> ApiResult<Json<CountResponse>> {
    let defaults = default_plan();

    let mut tx = state.pool.begin().await?;
    let count = TaskRepository::replace_all(&mut tx, &defaults).await?;
    tx.commit().await?;

    state.publish_tasks().await?;

    Metrics::task_mutation("default");
    log::info!("Loaded default plan ({} tasks)", count);

    Ok(Json(CountResponse { count }))
}

/// GET /api/tasks/view
///
/// Filtered, sorted and flattened rows plus the timeline layout.
pub async fn view_tasks(
    State(state): State<AppState>,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;

    let tasks = TaskRepository::find_all(&state.pool).await?;
    let rows = build_view_model(&tasks, &query.filters(), &query.sort_config());

    // The axis spans all tasks, not only the visible ones
    let range = DateRange::spanning(&tasks, state.view.padding_days, Utc::now().date_naive());
    let bars = layout_bars(&rows, &range, state.view.day_width_px);

    log::debug!("View: {} rows of {} tasks", rows.len(), tasks.len());

    let response = ViewResponse {
        day_count: range.day_count(),
        day_width_px: state.view.day_width_px,
        dependency_issues: dependency_violations(&tasks),
        rows,
        range,
        bars,
    };

    Ok(Json(response).into_response())
}

async fn next_order(state: &AppState) -> ApiResult<i64> {
    Ok(TaskRepository::max_order(&state.pool)
        .await?
        .map_or(1, |max| max + 1))
}
