//! Snapshot REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CountResponse, CreateSnapshotRequest, Metrics,
    SnapshotCreatedResponse,
};

use cutover_core::{Snapshot, SnapshotSummary};
use cutover_db::{SnapshotRepository, TaskRepository};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

/// GET /api/snapshots
///
/// Newest first, without task payloads.
pub async fn list_snapshots(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SnapshotSummary>>> {
    let repo = SnapshotRepository::new(state.pool.clone());
    Ok(Json(repo.find_all().await?))
}

/// POST /api/snapshots
///
/// Capture the live collection under `name`.
pub async fn create_snapshot(
    State(state): State<AppState>,
    payload: Result<Json<CreateSnapshotRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SnapshotCreatedResponse>)> {
    let Json(req) = payload?;

    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::validation(
            "Snapshot name cannot be empty",
            Some("name"),
        ));
    }

    let tasks = TaskRepository::find_all(&state.pool).await?;
    let mut snapshot = Snapshot::capture(name, &tasks);

    let repo = SnapshotRepository::new(state.pool.clone());
    snapshot.id = Some(repo.create(&snapshot).await?);

    Metrics::snapshot_operation("created");
    log::info!(
        "Created snapshot '{}' with {} tasks",
        snapshot.name,
        snapshot.tasks.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(SnapshotCreatedResponse {
            snapshot: snapshot.summary(),
        }),
    ))
}

/// GET /api/snapshots/{id}
///
/// The full export document.
pub async fn get_snapshot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Snapshot>> {
    let repo = SnapshotRepository::new(state.pool.clone());
    let snapshot = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Snapshot {} not found", id)))?;

    Ok(Json(snapshot))
}

/// POST /api/snapshots/{id}/restore
///
/// Replace the live collection with the snapshot's tasks.
pub async fn restore_snapshot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CountResponse>> {
    let repo = SnapshotRepository::new(state.pool.clone());
    let snapshot = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Snapshot {} not found", id)))?;

    let mut tx = state.pool.begin().await?;
    let count = TaskRepository::replace_all(&mut tx, &snapshot.tasks).await?;
    tx.commit().await?;

    observe_ids(&state, &snapshot.tasks);
    state.publish_tasks().await?;

    Metrics::snapshot_operation("restored");
    log::info!("Restored snapshot {} '{}' ({} tasks)", id, snapshot.name, count);

    Ok(Json(CountResponse { count }))
}

/// DELETE /api/snapshots/{id}
pub async fn delete_snapshot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let repo = SnapshotRepository::new(state.pool.clone());
    if !repo.delete(id).await? {
        return Err(ApiError::not_found(format!("Snapshot {} not found", id)));
    }

    Metrics::snapshot_operation("deleted");
    log::info!("Deleted snapshot {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/snapshots/import
///
/// Store an exported document as a new snapshot. The document is validated
/// as a whole; one bad task rejects it. Restoring is a separate step.
pub async fn import_snapshot(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SnapshotCreatedResponse>)> {
    let Json(document) = payload?;

    let mut snapshot = Snapshot::from_value(document)?;

    let repo = SnapshotRepository::new(state.pool.clone());
    snapshot.id = Some(repo.create(&snapshot).await?);

    Metrics::snapshot_operation("imported");
    log::info!(
        "Imported snapshot '{}' with {} tasks",
        snapshot.name,
        snapshot.tasks.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(SnapshotCreatedResponse {
            snapshot: snapshot.summary(),
        }),
    ))
}

fn observe_ids(state: &AppState, tasks: &[cutover_core::Task]) {
    if let Some(max) = tasks.iter().map(|t| t.id).max() {
        state.ids.observe(max);
    }
}
