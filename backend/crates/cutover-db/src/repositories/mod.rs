pub mod snapshot_repository;
pub mod task_repository;
