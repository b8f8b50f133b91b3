//! [`TaskStore`] over the cutover-server REST API.
//!
//! Every mutation is a request followed by a full `GET /api/tasks`; the
//! refetched collection is what subscribers see. There is no optimistic
//! local update, so a failed request leaves the published snapshot as is.

use crate::{CliClientResult, Client, ClientError};

use cutover_core::{Task, TaskId, TaskNotifier, TaskSnapshot, TaskStore, TaskSubscription};

use async_trait::async_trait;
use serde_json::Value;

pub struct RestTaskStore {
    client: Client,
    notifier: TaskNotifier,
}

impl RestTaskStore {
    /// Fetch the current collection and start publishing from it.
    pub async fn connect(client: Client) -> CliClientResult<Self> {
        let tasks = client.fetch_tasks().await?;
        log::debug!("Connected to {} ({} tasks)", client.base_url, tasks.len());
        Ok(Self {
            client,
            notifier: TaskNotifier::new(tasks),
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Refetch and publish, returning the new snapshot.
    pub async fn refresh(&self) -> CliClientResult<TaskSnapshot> {
        let tasks = self.client.fetch_tasks().await?;
        self.notifier.publish(tasks);
        Ok(self.notifier.current())
    }
}

#[async_trait]
impl TaskStore for RestTaskStore {
    type Error = ClientError;

    fn subscribe(&self) -> TaskSubscription {
        self.notifier.subscribe()
    }

    /// Upsert: an existing id is overwritten (last write wins at the server).
    async fn add_task(&self, task: Task) -> CliClientResult<()> {
        self.client.upsert_task(&task).await?;
        self.refresh().await?;
        Ok(())
    }

    async fn update_task(&self, task: Task) -> CliClientResult<()> {
        self.client.upsert_task(&task).await?;
        self.refresh().await?;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> CliClientResult<()> {
        self.client.delete_task(id, false).await?;
        self.refresh().await?;
        Ok(())
    }

    async fn delete_task_cascade(&self, id: TaskId) -> CliClientResult<Vec<TaskId>> {
        let body = self.client.delete_task(id, true).await?;
        let deleted: Vec<TaskId> = match body.get("deleted") {
            Some(ids) => serde_json::from_value(ids.clone())?,
            None => Vec::new(),
        };
        self.refresh().await?;
        Ok(deleted)
    }

    async fn replace_all_tasks(&self, tasks: Vec<Task>) -> CliClientResult<()> {
        self.client.reset_tasks().await?;
        if !tasks.is_empty() {
            self.client.sync_tasks(&tasks).await?;
        }
        self.refresh().await?;
        Ok(())
    }

    async fn reset_to_default(&self) -> CliClientResult<()> {
        let body: Value = self.client.load_default_tasks().await?;
        log::info!(
            "Loaded default plan ({} tasks)",
            body.get("count").and_then(Value::as_u64).unwrap_or(0)
        );
        self.refresh().await?;
        Ok(())
    }
}
