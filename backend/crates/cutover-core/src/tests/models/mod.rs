mod dates;
mod default_plan;
mod snapshot;
mod task;
mod task_id;
mod task_type;
