pub mod error;
pub mod forest;
pub mod models;
pub mod plan;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;

pub use error_location::ErrorLocation;

pub use error::{CoreError, Result as CoreResult};
pub use forest::{TaskForest, collect_descendants, cyclic_task_ids, remove_with_descendants};
pub use models::dates::{DATE_FORMAT, format_date, is_iso_date, parse_date};
pub use models::default_plan::default_plan;
pub use models::snapshot::{Snapshot, SnapshotSummary, ensure_unique_ids};
pub use models::task::{NEW_TASK_NAME, Task};
pub use models::task_id::{TaskId, TaskIdGenerator};
pub use models::task_status::TaskStatus;
pub use models::task_type::TaskType;
pub use plan::plan_entry::{PlanEntry, PlanRef};
pub use plan::plan_validation::{PlanContext, PlanOutcome, QuarantinedEntry, validate_plan};
pub use plan::prompt::{SYSTEM_PROMPT, build_prompt};
pub use plan::response_text::extract_json_array;
pub use store::memory_store::MemoryTaskStore;
pub use store::replicated::replicated_map::ReplicatedTaskMap;
pub use store::replicated::replicated_store::ReplicatedTaskStore;
pub use store::replicated::stamp::{ReplicaId, Stamp};
pub use store::replicated::task_op::TaskOp;
pub use store::subscription::{SubscriptionHandle, TaskNotifier, TaskSnapshot, TaskSubscription};
pub use store::task_store::TaskStore;
pub use view::dependency_report::{DependencyIssue, dependency_violations};
pub use view::filter::{Filter, TaskFilters, WILDCARD};
pub use view::sort::{SortConfig, SortDirection, SortKey};
pub use view::timeline::{
    BarGeometry, DEFAULT_DAY_WIDTH_PX, DEFAULT_PADDING_DAYS, DateRange, TimelineBar, layout_bars,
};
pub use view::view_model::{
    ViewRow, build_view_model, collapse_all, expand_all, set_all_expanded, toggle_expanded,
};
