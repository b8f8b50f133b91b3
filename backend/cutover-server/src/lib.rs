pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, ApiErrorBody, ApiErrorResponse, Result as ApiResult},
    events::{TASKS_EVENT, task_events},
    plan::{
        generate_plan_request::GeneratePlanRequest,
        generate_plan_response::GeneratePlanResponse,
        llm_plan_client::LlmPlanClient,
        plan::generate_plan,
        plan_error::{PlanError, Result as PlanResult},
        plan_generator::PlanGenerator,
    },
    snapshots::{
        create_snapshot_request::CreateSnapshotRequest,
        snapshot_created_response::SnapshotCreatedResponse,
        snapshots::{
            create_snapshot, delete_snapshot, get_snapshot, import_snapshot, list_snapshots,
            restore_snapshot,
        },
    },
    tasks::{
        count_response::CountResponse,
        delete_response::DeleteResponse,
        delete_task_query::DeleteTaskQuery,
        task_input::decode_task,
        tasks::{
            delete_task, list_tasks, load_default_tasks, reset_tasks, sync_tasks, upsert_task,
            view_tasks,
        },
        upsert_response::UpsertResponse,
        view_query::ViewQuery,
        view_response::ViewResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use metrics::Metrics;

pub use crate::routes::build_router;
