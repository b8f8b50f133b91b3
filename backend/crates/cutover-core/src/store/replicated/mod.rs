pub mod replicated_map;
pub mod replicated_store;
pub mod stamp;
pub mod task_op;
