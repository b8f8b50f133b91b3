use crate::{
    CoreError, CoreResult, ErrorLocation, Task, TaskId, TaskNotifier, TaskStore,
    TaskSubscription, default_plan, remove_with_descendants,
};

use std::panic::Location;

use async_trait::async_trait;
use tokio::sync::Mutex;

/// Process-local store. Each instance is independent; construct one per
/// composition root (or per test).
pub struct MemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
    notifier: TaskNotifier,
    defaults: Vec<Task>,
}

impl MemoryTaskStore {
    pub fn new(initial: Vec<Task>) -> Self {
        Self::with_defaults(initial, default_plan())
    }

    pub fn with_defaults(initial: Vec<Task>, defaults: Vec<Task>) -> Self {
        Self {
            notifier: TaskNotifier::new(initial.clone()),
            tasks: Mutex::new(initial),
            defaults,
        }
    }

    pub fn notifier(&self) -> &TaskNotifier {
        &self.notifier
    }
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new(default_plan())
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    type Error = CoreError;

    fn subscribe(&self) -> TaskSubscription {
        self.notifier.subscribe()
    }

    async fn add_task(&self, task: Task) -> CoreResult<()> {
        let mut tasks = self.tasks.lock().await;

        if tasks.iter().any(|t| t.id == task.id) {
            return Err(CoreError::TaskExists {
                id: task.id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        log::info!("Adding task {} ({})", task.id, task.name);
        tasks.push(task);
        self.notifier.publish(tasks.clone());
        Ok(())
    }

    async fn update_task(&self, task: Task) -> CoreResult<()> {
        let mut tasks = self.tasks.lock().await;

        let slot = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| CoreError::not_found(task.id))?;

        log::debug!("Updating task {}", task.id);
        *slot = task;
        self.notifier.publish(tasks.clone());
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> CoreResult<()> {
        let mut tasks = self.tasks.lock().await;

        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(CoreError::not_found(id));
        }

        log::info!("Deleted task {}", id);
        self.notifier.publish(tasks.clone());
        Ok(())
    }

    async fn delete_task_cascade(&self, id: TaskId) -> CoreResult<Vec<TaskId>> {
        let mut tasks = self.tasks.lock().await;

        let removed = remove_with_descendants(&mut tasks, id);
        if removed.is_empty() {
            return Err(CoreError::not_found(id));
        }

        log::info!("Deleted task {} with {} descendants", id, removed.len() - 1);
        self.notifier.publish(tasks.clone());
        Ok(removed)
    }

    async fn replace_all_tasks(&self, replacement: Vec<Task>) -> CoreResult<()> {
        let mut tasks = self.tasks.lock().await;

        log::info!("Replacing all tasks ({} -> {})", tasks.len(), replacement.len());
        *tasks = replacement;
        self.notifier.publish(tasks.clone());
        Ok(())
    }

    async fn reset_to_default(&self) -> CoreResult<()> {
        self.replace_all_tasks(self.defaults.clone()).await
    }
}
