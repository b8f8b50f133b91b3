pub mod memory_store;
pub mod replicated;
pub mod subscription;
pub mod task_store;
