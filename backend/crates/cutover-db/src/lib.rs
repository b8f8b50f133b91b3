pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::snapshot_repository::SnapshotRepository;
pub use repositories::task_repository::TaskRepository;
