pub mod dates;
pub mod default_plan;
pub mod snapshot;
pub mod task;
pub mod task_id;
pub mod task_status;
pub mod task_type;
