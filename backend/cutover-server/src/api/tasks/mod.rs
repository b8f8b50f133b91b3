pub mod count_response;
pub mod delete_response;
pub mod delete_task_query;
pub mod task_input;
pub mod tasks;
pub mod upsert_response;
pub mod view_query;
pub mod view_response;
