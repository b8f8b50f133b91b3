use crate::{Task, TaskId, TaskSnapshot, TaskSubscription};

use async_trait::async_trait;

/// The contract every task backend presents to the view layer.
///
/// Mutations never return view data: callers re-derive the view model from
/// the next snapshot delivered through [`TaskStore::subscribe`].
#[async_trait]
pub trait TaskStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn subscribe(&self) -> TaskSubscription;

    /// The most recently published collection
    fn tasks(&self) -> TaskSnapshot {
        self.subscribe().current()
    }

    async fn add_task(&self, task: Task) -> Result<(), Self::Error>;

    /// Full-object replace by id
    async fn update_task(&self, task: Task) -> Result<(), Self::Error>;

    async fn delete_task(&self, id: TaskId) -> Result<(), Self::Error>;

    /// Delete `id` and every descendant; returns the removed ids
    async fn delete_task_cascade(&self, id: TaskId) -> Result<Vec<TaskId>, Self::Error>;

    async fn replace_all_tasks(&self, tasks: Vec<Task>) -> Result<(), Self::Error>;

    async fn reset_to_default(&self) -> Result<(), Self::Error>;
}
