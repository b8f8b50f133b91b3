//! Plan generation handler

use crate::{
    ApiError, ApiResult, AppState, GeneratePlanRequest, GeneratePlanResponse, Metrics, PlanError,
};

use cutover_core::{
    PlanContext, SYSTEM_PROMPT, Task, build_prompt, extract_json_array, validate_plan,
};
use cutover_db::TaskRepository;

use std::collections::HashSet;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;

/// POST /api/plan/generate
///
/// Ask the model for a plan, validate every entry, and optionally append
/// the accepted tasks. Entries that fail validation come back quarantined.
pub async fn generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePlanRequest>, JsonRejection>,
) -> ApiResult<Json<GeneratePlanResponse>> {
    let Json(req) = payload?;

    let generator = state
        .plan_generator
        .clone()
        .ok_or_else(|| ApiError::bad_request("Plan generation is disabled"))?;

    let description = req.description.trim();
    if description.is_empty() {
        return Err(ApiError::validation(
            "Description cannot be empty",
            Some("description"),
        ));
    }

    let tasks = TaskRepository::find_all(&state.pool).await?;
    let parent: Option<&Task> = match req.parent_id {
        Some(parent_id) => Some(
            tasks
                .iter()
                .find(|t| t.id == parent_id)
                .ok_or_else(|| ApiError::not_found(format!("Task {} not found", parent_id)))?,
        ),
        None => None,
    };

    let prompt = build_prompt(description, parent, Utc::now().date_naive());
    let reply = generator
        .complete(SYSTEM_PROMPT, &prompt)
        .await
        .inspect_err(|e| {
            Metrics::plan_failed();
            log::warn!("Plan generation failed: {}", e);
        })?;

    let items = extract_json_array(&reply).map_err(|e| {
        Metrics::plan_failed();
        log::warn!("Unusable plan reply: {}", e);
        PlanError::invalid_reply("model reply does not contain a JSON task array")
    })?;

    if let Some(max) = tasks.iter().map(|t| t.id).max() {
        state.ids.observe(max);
    }

    let context = PlanContext {
        ids: &state.ids,
        next_order: Task::next_order(&tasks),
        parent: req.parent_id,
        existing_ids: tasks.iter().map(|t| t.id).collect::<HashSet<_>>(),
        max_tasks: state.plan_max_tasks,
    };
    let outcome = validate_plan(items, &context);

    let applied = req.apply && !outcome.tasks.is_empty();
    if applied {
        let mut tx = state.pool.begin().await?;
        TaskRepository::upsert_many(&mut tx, &outcome.tasks).await?;
        tx.commit().await?;
        state.publish_tasks().await?;
    }

    Metrics::plan_generated(outcome.tasks.len(), outcome.quarantined.len());
    log::info!(
        "Generated plan: {} accepted, {} quarantined{}",
        outcome.tasks.len(),
        outcome.quarantined.len(),
        if applied { ", applied" } else { "" }
    );

    Ok(Json(GeneratePlanResponse {
        tasks: outcome.tasks,
        quarantined: outcome.quarantined,
        applied,
    }))
}
